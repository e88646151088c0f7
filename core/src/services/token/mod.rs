//! Token service module
//!
//! Issues signed, time-bounded tokens carrying identity claims. Tokens are
//! stateless and self-describing; nothing is persisted at issuance.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
