//! Configuration for the token service

use ec_shared::config::JwtConfig;
use jsonwebtoken::Algorithm;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Symmetric signing secret
    pub secret: String,
    /// Signing algorithm
    pub algorithm: Algorithm,
}

impl TokenServiceConfig {
    /// Create a configuration with the given secret and HS256 signing
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Build from the shared JWT configuration loaded at startup
    pub fn from_jwt_config(config: &JwtConfig) -> Self {
        let algorithm = match config.algorithm.as_str() {
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            _ => Algorithm::HS256,
        };
        Self {
            secret: config.secret.clone(),
            algorithm,
        }
    }
}
