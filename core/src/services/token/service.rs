//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service issuing signed JWTs carrying identity claims
///
/// The signing secret is loaded once at process start; construction fails
/// when it is absent or empty, so a misconfigured process refuses to start
/// instead of failing per request. Inbound token validation belongs to the
/// authentication middleware, not here; [`TokenService::decode`] exists for
/// that middleware and for tests asserting the claim shape.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// Returns [`TokenError::MissingSecret`] when the configured secret is
    /// empty or whitespace.
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.secret.trim().is_empty() {
            return Err(DomainError::Token(TokenError::MissingSecret));
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        let validation = Validation::new(config.algorithm);

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed token for the given identity
    ///
    /// The claim set is exactly `{id, username, role}` plus `iat`/`exp`;
    /// expiry is fixed at `issued_at` + 2 hours.
    pub fn issue(
        &self,
        account_id: Uuid,
        username: &str,
        roles: &[String],
        issued_at: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let claims = Claims::new(account_id, username, roles.to_vec(), issued_at);
        let header = Header::new(self.config.algorithm);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Decodes and verifies a token, returning its claims
    pub fn decode(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let kind = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        TokenError::InvalidSignature
                    }
                    _ => TokenError::InvalidTokenFormat,
                };
                DomainError::Token(kind)
            })
    }
}
