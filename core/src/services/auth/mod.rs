//! Authentication service module
//!
//! Orchestrates user registration and login:
//! - field validation before any mutation
//! - account creation through the credential store
//! - role bootstrap and assignment through the role registry
//! - token issuance on successful login

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, MSG_BAD_CREDENTIALS, MSG_LOGIN_OK, MSG_USER_NOT_FOUND};
