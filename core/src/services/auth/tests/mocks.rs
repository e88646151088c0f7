//! Mock implementations for testing the authentication service

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{CredentialStore, RoleRegistry};

/// In-memory credential store keeping plaintext passwords, for tests only
pub struct MockCredentialStore {
    pub accounts: Arc<Mutex<Vec<Account>>>,
    passwords: Arc<Mutex<HashMap<Uuid, String>>>,
    /// When non-empty, `create_account` rejects with these reasons
    pub reject_reasons: Vec<String>,
}

impl MockCredentialStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(Mutex::new(Vec::new())),
            passwords: Arc::new(Mutex::new(HashMap::new())),
            reject_reasons: Vec::new(),
        }
    }

    pub fn rejecting(reasons: Vec<String>) -> Self {
        Self {
            reject_reasons: reasons,
            ..Self::new()
        }
    }

    /// Seed an account with an assigned role and a known password
    pub fn with_account(username: &str, password: &str, role: &str) -> (Self, Account) {
        let store = Self::new();
        let mut account = Account::new(username.to_string(), None, None);
        account.assign_role(role);
        store
            .passwords
            .lock()
            .unwrap()
            .insert(account.id, password.to_string());
        store.accounts.lock().unwrap().push(account.clone());
        (store, account)
    }

    pub fn account_count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .iter()
            .find(|a| a.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn create_account(
        &self,
        username: &str,
        display_name: Option<&str>,
        email: Option<&str>,
        password: &str,
    ) -> Result<Account, DomainError> {
        if !self.reject_reasons.is_empty() {
            return Err(DomainError::Auth(AuthError::RegistrationRejected {
                reasons: self.reject_reasons.clone(),
            }));
        }

        let mut accounts = self.accounts.lock().unwrap();
        if accounts
            .iter()
            .any(|a| a.username.eq_ignore_ascii_case(username))
        {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }

        let account = Account::new(
            username.to_string(),
            display_name.map(str::to_string),
            email.map(str::to_string),
        );
        self.passwords
            .lock()
            .unwrap()
            .insert(account.id, password.to_string());
        accounts.push(account.clone());
        Ok(account)
    }

    async fn verify_password(
        &self,
        account: &Account,
        password: &str,
    ) -> Result<bool, DomainError> {
        let passwords = self.passwords.lock().unwrap();
        Ok(passwords
            .get(&account.id)
            .map_or(false, |stored| stored == password))
    }

    async fn roles_of(&self, account: &Account) -> Result<Vec<String>, DomainError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts
            .iter()
            .find(|a| a.id == account.id)
            .map(|a| a.roles.clone())
            .unwrap_or_default())
    }
}

/// Role registry sharing account storage with a [`MockCredentialStore`]
pub struct MockRoleRegistry {
    pub roles: Arc<Mutex<HashSet<String>>>,
    accounts: Arc<Mutex<Vec<Account>>>,
    /// When set, `assign` fails after account creation has succeeded
    pub fail_assign: bool,
}

impl MockRoleRegistry {
    /// Build a registry operating on the same accounts as the given store
    pub fn sharing(store: &MockCredentialStore) -> Self {
        Self {
            roles: Arc::new(Mutex::new(HashSet::new())),
            accounts: store.accounts.clone(),
            fail_assign: false,
        }
    }

    pub fn failing_assign(store: &MockCredentialStore) -> Self {
        Self {
            fail_assign: true,
            ..Self::sharing(store)
        }
    }

    pub fn role_count(&self) -> usize {
        self.roles.lock().unwrap().len()
    }
}

#[async_trait]
impl RoleRegistry for MockRoleRegistry {
    async fn exists(&self, role_name: &str) -> Result<bool, DomainError> {
        let roles = self.roles.lock().unwrap();
        Ok(roles.contains(role_name))
    }

    async fn create_if_absent(&self, role_name: &str) -> Result<(), DomainError> {
        let mut roles = self.roles.lock().unwrap();
        roles.insert(role_name.to_string());
        Ok(())
    }

    async fn assign(&self, account: &Account, role_name: &str) -> Result<(), DomainError> {
        if self.fail_assign {
            return Err(DomainError::Internal {
                message: "role store unavailable".to_string(),
            });
        }
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(stored) = accounts.iter_mut().find(|a| a.id == account.id) {
            stored.assign_role(role_name);
        }
        Ok(())
    }
}
