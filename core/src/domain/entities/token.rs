//! Token claims for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token expiration time, measured from issuance (2 hours)
pub const TOKEN_EXPIRY_HOURS: i64 = 2;

/// Claims structure for the JWT payload
///
/// The claim set is exactly `{id, username, role}` plus the timestamps;
/// downstream validators depend on this shape. Tokens are stateless and are
/// never stored server-side, so expiry by clock is their only lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject account id
    pub id: String,

    /// Account username
    pub username: String,

    /// Names of the roles held by the account
    pub role: Vec<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp, fixed at issuance + 2 hours
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a token issued at the given instant
    pub fn new(
        account_id: Uuid,
        username: impl Into<String>,
        roles: Vec<String>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let expiry = issued_at + Duration::hours(TOKEN_EXPIRY_HOURS);
        Self {
            id: account_id.to_string(),
            username: username.into(),
            role: roles,
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks whether the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Parses the subject id back into a UUID
    pub fn account_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.id)
    }
}
