//! Request value objects consumed by the authentication service.
//!
//! The HTTP layer deserializes inbound bodies straight into these shapes.

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired unique login name
    pub username: String,

    /// Display name
    pub name: String,

    /// Plaintext password; handed to the credential store and never kept
    pub password: String,

    /// Optional email address
    #[serde(default)]
    pub email: Option<String>,

    /// Optional role name; the default role is used when absent or blank
    #[serde(default)]
    pub role: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
