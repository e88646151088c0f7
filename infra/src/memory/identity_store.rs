//! In-memory identity store.
//!
//! Implements both `CredentialStore` and `RoleRegistry` over shared maps,
//! the way a single backing identity database serves both contracts. All
//! password hashing happens here; plaintext never leaves this module and
//! hashes never enter the core.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use ec_core::domain::entities::account::Account;
use ec_core::errors::{AuthError, DomainError};
use ec_core::repositories::{CredentialStore, RoleRegistry};
use ec_shared::utils::validation::validators;

struct AccountRecord {
    account: Account,
    password_hash: String,
}

/// In-memory system of record for accounts and roles
///
/// Usernames and role names are unique case-insensitively; both maps are
/// keyed by the lowercased name while the stored records keep the original
/// casing. Uniqueness and role creation are enforced under a single write
/// lock, which is the store-level guarantee the orchestration relies on for
/// concurrent registrations.
pub struct InMemoryIdentityStore {
    /// Account records keyed by lowercase username
    accounts: RwLock<HashMap<String, AccountRecord>>,
    /// Role names keyed by their lowercase form
    roles: RwLock<HashMap<String, String>>,
    bcrypt_cost: u32,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }

    /// Use a non-default bcrypt cost; tests pass the minimum to stay fast
    pub fn with_cost(bcrypt_cost: u32) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            roles: RwLock::new(HashMap::new()),
            bcrypt_cost,
        }
    }

    /// Names of all existing roles, in their original casing
    pub async fn role_names(&self) -> Vec<String> {
        let roles = self.roles.read().await;
        roles.values().cloned().collect()
    }

    /// Password policy checks; one human-readable reason per violated rule
    fn password_problems(password: &str) -> Vec<String> {
        let mut problems = Vec::new();
        if password.len() < 6 {
            problems.push("Passwords must be at least 6 characters.".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            problems.push("Passwords must have at least one digit ('0'-'9').".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            problems.push("Passwords must have at least one lowercase ('a'-'z').".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            problems.push("Passwords must have at least one uppercase ('A'-'Z').".to_string());
        }
        if password.chars().all(|c| c.is_ascii_alphanumeric()) {
            problems.push("Passwords must have at least one non alphanumeric character.".to_string());
        }
        problems
    }
}

impl Default for InMemoryIdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryIdentityStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .get(&username.to_lowercase())
            .map(|record| record.account.clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|record| record.account.id == id)
            .map(|record| record.account.clone()))
    }

    async fn create_account(
        &self,
        username: &str,
        display_name: Option<&str>,
        email: Option<&str>,
        password: &str,
    ) -> Result<Account, DomainError> {
        let mut reasons = Self::password_problems(password);
        if let Some(email) = email {
            if !validators::is_valid_email(email) {
                reasons.push(format!("Email '{email}' is invalid."));
            }
        }
        if !reasons.is_empty() {
            return Err(DomainError::Auth(AuthError::RegistrationRejected {
                reasons,
            }));
        }

        // Uniqueness check and insert happen under the same write lock.
        let mut accounts = self.accounts.write().await;
        let key = username.to_lowercase();
        if accounts.contains_key(&key) {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }

        let password_hash =
            bcrypt::hash(password, self.bcrypt_cost).map_err(|e| DomainError::Internal {
                message: format!("password hashing failed: {e}"),
            })?;

        let account = Account::new(
            username.to_string(),
            display_name.map(str::to_string),
            email.map(str::to_string),
        );
        accounts.insert(
            key,
            AccountRecord {
                account: account.clone(),
                password_hash,
            },
        );

        debug!(username = %account.username, "account record created");
        Ok(account)
    }

    async fn verify_password(
        &self,
        account: &Account,
        password: &str,
    ) -> Result<bool, DomainError> {
        let accounts = self.accounts.read().await;
        let Some(record) = accounts.get(&account.username.to_lowercase()) else {
            return Ok(false);
        };
        bcrypt::verify(password, &record.password_hash).map_err(|e| DomainError::Internal {
            message: format!("password verification failed: {e}"),
        })
    }

    async fn roles_of(&self, account: &Account) -> Result<Vec<String>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .get(&account.username.to_lowercase())
            .map(|record| record.account.roles.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl RoleRegistry for InMemoryIdentityStore {
    async fn exists(&self, role_name: &str) -> Result<bool, DomainError> {
        let roles = self.roles.read().await;
        Ok(roles.contains_key(&role_name.to_lowercase()))
    }

    async fn create_if_absent(&self, role_name: &str) -> Result<(), DomainError> {
        // Insert-or-ignore under one write lock: concurrent first-use of the
        // same new name yields exactly one role and no failure.
        let mut roles = self.roles.write().await;
        roles
            .entry(role_name.to_lowercase())
            .or_insert_with(|| role_name.to_string());
        Ok(())
    }

    async fn assign(&self, account: &Account, role_name: &str) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;
        let record = accounts
            .get_mut(&account.username.to_lowercase())
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("account '{}'", account.username),
            })?;
        record.account.assign_role(role_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_COST: u32 = 4;

    #[test]
    fn test_password_problems_lists_every_violated_rule() {
        let problems = InMemoryIdentityStore::password_problems("abc");
        assert_eq!(problems.len(), 4);
        assert!(problems[0].contains("at least 6 characters"));

        let problems = InMemoryIdentityStore::password_problems("Secret1!");
        assert!(problems.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_case_insensitive() {
        let store = InMemoryIdentityStore::with_cost(MIN_COST);
        store
            .create_account("Alice", None, None, "Secret1!")
            .await
            .unwrap();

        let result = store.create_account("alice", None, None, "Other2@").await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::UserAlreadyExists))
        ));
    }

    #[tokio::test]
    async fn test_invalid_email_is_a_rejection_reason() {
        let store = InMemoryIdentityStore::with_cost(MIN_COST);
        let result = store
            .create_account("alice", None, Some("not-an-email"), "Secret1!")
            .await;

        match result {
            Err(DomainError::Auth(AuthError::RegistrationRejected { reasons })) => {
                assert_eq!(reasons, vec!["Email 'not-an-email' is invalid.".to_string()]);
            }
            other => panic!("expected RegistrationRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_verify_password_round_trip() {
        let store = InMemoryIdentityStore::with_cost(MIN_COST);
        let account = store
            .create_account("alice", None, None, "Secret1!")
            .await
            .unwrap();

        assert!(store.verify_password(&account, "Secret1!").await.unwrap());
        assert!(!store.verify_password(&account, "wrong").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_if_absent_is_idempotent() {
        let store = InMemoryIdentityStore::with_cost(MIN_COST);

        store.create_if_absent("Manager").await.unwrap();
        store.create_if_absent("Manager").await.unwrap();
        store.create_if_absent("manager").await.unwrap();

        assert!(store.exists("Manager").await.unwrap());
        assert_eq!(store.role_names().await, vec!["Manager".to_string()]);
    }

    #[tokio::test]
    async fn test_assign_unknown_account_fails() {
        let store = InMemoryIdentityStore::with_cost(MIN_COST);
        let ghost = Account::new("ghost".to_string(), None, None);

        let result = store.assign(&ghost, "User").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
