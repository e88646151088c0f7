//! Value objects crossing the service boundary.

pub mod account_data;
pub mod auth_result;
pub mod requests;

// Re-export commonly used types
pub use account_data::AccountData;
pub use auth_result::AuthResult;
pub use requests::{LoginRequest, RegisterRequest};
