//! Main authentication service implementation

use std::sync::Arc;

use chrono::Utc;
use ec_shared::utils::validation::validators;
use tracing::{info, warn};

use crate::domain::value_objects::{AccountData, AuthResult, LoginRequest, RegisterRequest};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{CredentialStore, RoleRegistry};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Message returned when the username is unknown
pub const MSG_USER_NOT_FOUND: &str = "Usuario no encontrado";
/// Message returned when the password does not match
pub const MSG_BAD_CREDENTIALS: &str = "Credenciales incorrectas";
/// Message returned on successful login
pub const MSG_LOGIN_OK: &str = "Login correcto";

/// Authentication service orchestrating registration and login
///
/// Each call is an independent unit of work. Store and registry operations
/// are issued strictly sequentially because later steps depend on the
/// identity produced by earlier ones; there is no speculative fan-out, no
/// retries, and no timeout policy at this layer.
pub struct AuthService<C, R>
where
    C: CredentialStore,
    R: RoleRegistry,
{
    /// Credential store for account persistence and password checks
    credentials: Arc<C>,
    /// Registry for role existence and assignment
    roles: Arc<R>,
    /// Token service for issuing signed tokens
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<C, R> AuthService<C, R>
where
    C: CredentialStore,
    R: RoleRegistry,
{
    /// Create a new authentication service
    pub fn new(
        credentials: Arc<C>,
        roles: Arc<R>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            credentials,
            roles,
            token_service,
            config,
        }
    }

    /// Register a new account
    ///
    /// This method:
    /// 1. Rejects an empty or whitespace-only username or password before
    ///    any side effect
    /// 2. Delegates account creation to the credential store, propagating
    ///    its rejection reasons verbatim
    /// 3. Resolves the target role (the requested one, or the default)
    /// 4. Creates the role if absent and assigns it to the account
    /// 5. Re-fetches the account by username to pick up any store-side
    ///    normalization, and projects it
    ///
    /// There is no rollback between steps 2 and 4: when role assignment
    /// fails after creation succeeded, the account persists without its role
    /// and the failure surfaces to the caller.
    pub async fn register(&self, request: RegisterRequest) -> DomainResult<AccountData> {
        // Step 1: field validation, before any mutation
        if !validators::not_blank(&request.username) {
            return Err(ValidationError::RequiredField {
                field: "username".to_string(),
            }
            .into());
        }
        if !validators::not_blank(&request.password) {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            }
            .into());
        }

        // Best-effort duplicate pre-check; the store's uniqueness constraint
        // is the actual race-safety boundary.
        if self
            .credentials
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            warn!(username = %request.username, "registration rejected: username taken");
            return Err(AuthError::UserAlreadyExists.into());
        }

        // Step 2: create the credential record
        let display_name = Some(request.name.as_str()).filter(|n| validators::not_blank(n));
        let account = self
            .credentials
            .create_account(
                &request.username,
                display_name,
                request.email.as_deref(),
                &request.password,
            )
            .await?;

        // Step 3: resolve the target role
        let target_role = request
            .role
            .as_deref()
            .filter(|r| validators::not_blank(r))
            .unwrap_or(self.config.default_role.as_str());

        // Step 4: bootstrap and assign. No rollback past this point.
        self.roles.create_if_absent(target_role).await?;
        self.roles.assign(&account, target_role).await?;

        // Step 5: re-fetch and project
        let stored = self
            .credentials
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| DomainError::Internal {
                message: format!("account '{}' missing after creation", request.username),
            })?;

        info!(username = %stored.username, role = %target_role, "account registered");
        Ok(AccountData::from_account(&stored, Some(target_role)))
    }

    /// Authenticate a username/password pair
    ///
    /// Unknown usernames and wrong passwords both return an `Ok` result with
    /// an empty token and a message; only store, registry, or issuer
    /// failures become errors. On success the returned projection surfaces
    /// the first assigned role, and the token carries all of them.
    pub async fn login(&self, request: LoginRequest) -> DomainResult<AuthResult> {
        let account = match self.credentials.find_by_username(&request.username).await? {
            Some(account) => account,
            None => {
                warn!(username = %request.username, "login failed: unknown username");
                return Ok(AuthResult::failure(MSG_USER_NOT_FOUND));
            }
        };

        let valid = self
            .credentials
            .verify_password(&account, &request.password)
            .await?;
        if !valid {
            warn!(username = %account.username, "login failed: bad password");
            return Ok(AuthResult::failure(MSG_BAD_CREDENTIALS));
        }

        let roles = self.credentials.roles_of(&account).await?;
        let token = self
            .token_service
            .issue(account.id, &account.username, &roles, Utc::now())?;

        let user = AccountData::from_account(&account, roles.first().map(String::as_str));

        info!(username = %account.username, "login succeeded");
        Ok(AuthResult::success(token, user, MSG_LOGIN_OK))
    }
}
