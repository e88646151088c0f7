//! Domain-specific error types for authentication and token operations.
//!
//! Login failures (unknown username, wrong password) are deliberately NOT
//! raised through these types by the authentication service; they come back
//! as an ordinary [`AuthResult`](crate::domain::value_objects::AuthResult).
//! The variants exist for adapters and middleware that need them.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username already exists")]
    UserAlreadyExists,

    /// Store-side rejection of a registration; the reasons are surfaced to
    /// the caller verbatim
    #[error("No se pudo realizar el registro: {}", .reasons.join(", "))]
    RegistrationRejected { reasons: Vec<String> },
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Signing secret is missing or empty")]
    MissingSecret,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token format")]
    InvalidTokenFormat,
}

/// Input validation errors, raised before any side effect
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,
}
