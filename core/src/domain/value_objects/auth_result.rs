//! Authentication outcome value object.

use serde::{Deserialize, Serialize};

use super::account_data::AccountData;

/// Outcome of a login attempt
///
/// Always returned as a value, never raised: unknown usernames and wrong
/// passwords both come back as a result with an empty token and an
/// explanatory message, so a caller cannot tell the two apart structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResult {
    /// Signed token, empty when authentication failed
    pub token: String,

    /// Projection of the authenticated account, absent on failure
    pub user: Option<AccountData>,

    /// Human-readable outcome message
    pub message: String,
}

impl AuthResult {
    /// Successful login carrying a token and the account projection
    pub fn success(token: String, user: AccountData, message: impl Into<String>) -> Self {
        Self {
            token,
            user: Some(user),
            message: message.into(),
        }
    }

    /// Failed login: empty token, no account, only a message
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            token: String::new(),
            user: None,
            message: message.into(),
        }
    }

    /// Whether this result represents a successful authentication
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_has_empty_token_and_no_user() {
        let result = AuthResult::failure("Usuario no encontrado");

        assert_eq!(result.token, "");
        assert!(result.user.is_none());
        assert_eq!(result.message, "Usuario no encontrado");
        assert!(!result.is_authenticated());
    }
}
