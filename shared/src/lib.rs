//! Shared utilities and common types for the ApiEcommerce server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Validation helpers
//!
//! It carries no domain knowledge; the domain layer lives in `ec_core`.

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{ConfigError, JwtConfig};
pub use utils::validation;
