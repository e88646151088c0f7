//! Configuration for the authentication service

use crate::domain::entities::account::DEFAULT_ROLE;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Role assigned at registration when the request does not name one
    pub default_role: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            default_role: DEFAULT_ROLE.to_string(),
        }
    }
}
