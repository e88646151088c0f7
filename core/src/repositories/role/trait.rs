//! Role registry trait managing role existence and assignment.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Contract for role existence and assignment
///
/// Role names are unique. Creation is idempotent and must be atomic at the
/// store level: two concurrent first-uses of the same new name yield exactly
/// one role and no visible failure to either caller. An exists-check
/// followed by a separate create does not satisfy this.
#[async_trait]
pub trait RoleRegistry: Send + Sync {
    /// Whether a role with the given name exists
    async fn exists(&self, role_name: &str) -> Result<bool, DomainError>;

    /// Create the role if it does not exist yet; a no-op otherwise
    async fn create_if_absent(&self, role_name: &str) -> Result<(), DomainError>;

    /// Add the role to the account's role set; idempotent if already assigned
    async fn assign(&self, account: &Account, role_name: &str) -> Result<(), DomainError>;
}
