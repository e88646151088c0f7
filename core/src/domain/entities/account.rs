//! Account entity representing a registered identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned at registration when the caller does not request one
pub const DEFAULT_ROLE: &str = "User";

/// Account entity representing a registered identity
///
/// The username is unique across all accounts, compared case-insensitively;
/// uniqueness is enforced by the backing credential store, not here. The
/// password credential is owned exclusively by the store and never appears
/// on this entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Unique login name
    pub username: String,

    /// Optional human-readable display name
    pub display_name: Option<String>,

    /// Optional email address
    pub email: Option<String>,

    /// Names of the roles assigned to this account
    pub roles: Vec<String>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account instance with no roles assigned yet
    pub fn new(
        username: String,
        display_name: Option<String>,
        email: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            display_name,
            email,
            roles: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds a role to the account's role set; a no-op if already assigned
    pub fn assign_role(&mut self, role_name: &str) {
        if !self.has_role(role_name) {
            self.roles.push(role_name.to_string());
            self.updated_at = Utc::now();
        }
    }

    /// Checks whether the account holds the given role (case-insensitive)
    pub fn has_role(&self, role_name: &str) -> bool {
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(role_name))
    }

    /// The first assigned role, which is the only one surfaced in
    /// projections even when more roles exist
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }
}
