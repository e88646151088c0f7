//! Repository interfaces abstracting the backing stores.
//!
//! The core orchestrates against these traits only; concrete adapters live
//! in the infrastructure layer.

pub mod credential;
pub mod role;

pub use credential::CredentialStore;
pub use role::RoleRegistry;
