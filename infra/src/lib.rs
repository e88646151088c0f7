//! # Infrastructure Layer
//!
//! Concrete adapters behind the repository traits of `ec_core`. The crate
//! currently provides an in-memory identity store; a relational
//! implementation plugs in behind the same traits without touching the core.

pub mod memory;

pub use memory::InMemoryIdentityStore;

use std::sync::Arc;

use ec_core::errors::DomainError;
use ec_core::services::auth::{AuthService, AuthServiceConfig};
use ec_core::services::token::{TokenService, TokenServiceConfig};
use ec_shared::config::JwtConfig;

/// Authentication service wired against the in-memory identity store
pub type MemoryAuthService = AuthService<InMemoryIdentityStore, InMemoryIdentityStore>;

/// Build the authentication stack from the process environment
///
/// Loads the signing secret once via [`JwtConfig::from_env`] and fails when
/// it is absent or blank; callers are expected to abort startup on error.
pub fn bootstrap_auth() -> Result<MemoryAuthService, DomainError> {
    dotenvy::dotenv().ok();

    let jwt = JwtConfig::from_env().map_err(|e| DomainError::Internal {
        message: e.to_string(),
    })?;
    let token_service = TokenService::new(TokenServiceConfig::from_jwt_config(&jwt))?;

    let store = Arc::new(InMemoryIdentityStore::new());
    tracing::info!("authentication services initialized");

    Ok(AuthService::new(
        store.clone(),
        store,
        Arc::new(token_service),
        AuthServiceConfig::default(),
    ))
}
