//! Configuration module
//!
//! Configuration is loaded once at process start; values are immutable for
//! the life of the process. A missing or blank signing secret is a startup
//! failure, never a per-request one.

pub mod auth;

use thiserror::Error;

pub use auth::JwtConfig;

/// Errors raised while loading configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration value: {key}")]
    MissingValue { key: String },
}
