//! Credential store trait defining the contract for account persistence
//! and password verification.
//!
//! The store is the system of record for accounts. It owns all password
//! hashing and verification; the core never inspects or stores raw hashes,
//! and a plaintext password crosses this boundary only at creation and
//! verification time. Username uniqueness is enforced here, at the store
//! level, not by the orchestration above it.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Contract for account persistence and password checks
///
/// All operations are potentially I/O-bound round trips to the backing
/// store. Implementations must be thread-safe.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find an account by username (case-insensitive)
    ///
    /// No match is `Ok(None)`, never an error.
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Create a new account with the given plaintext password
    ///
    /// Fails with [`AuthError::UserAlreadyExists`] when the username is
    /// taken, or [`AuthError::RegistrationRejected`] carrying one
    /// human-readable reason per violated policy rule.
    ///
    /// [`AuthError::UserAlreadyExists`]: crate::errors::AuthError::UserAlreadyExists
    /// [`AuthError::RegistrationRejected`]: crate::errors::AuthError::RegistrationRejected
    async fn create_account(
        &self,
        username: &str,
        display_name: Option<&str>,
        email: Option<&str>,
        password: &str,
    ) -> Result<Account, DomainError>;

    /// Check a plaintext password against the stored credential
    async fn verify_password(
        &self,
        account: &Account,
        password: &str,
    ) -> Result<bool, DomainError>;

    /// Names of the roles currently assigned to the account
    async fn roles_of(&self, account: &Account) -> Result<Vec<String>, DomainError>;
}
