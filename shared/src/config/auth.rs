//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Environment variable holding the symmetric token signing secret
pub const SECRET_KEY_VAR: &str = "API_SECRET_KEY";

/// JWT authentication configuration
///
/// Loaded once at process start and injected as an immutable value; there is
/// no runtime rotation of the signing secret. Token lifetime is fixed by the
/// domain layer, not configured here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret used to sign issued tokens
    pub secret: String,

    /// Signing algorithm (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: default_algorithm(),
        }
    }

    /// Load the configuration from environment variables
    ///
    /// Fails when `API_SECRET_KEY` is unset or blank. Callers are expected to
    /// abort startup on error rather than degrade to per-request failures.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var(SECRET_KEY_VAR).unwrap_or_default();
        if secret.trim().is_empty() {
            return Err(ConfigError::MissingValue {
                key: SECRET_KEY_VAR.to_string(),
            });
        }

        Ok(Self {
            secret,
            algorithm: default_algorithm(),
        })
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_new() {
        let config = JwtConfig::new("my-secret");
        assert_eq!(config.secret, "my-secret");
        assert_eq!(config.algorithm, "HS256");
    }
}
