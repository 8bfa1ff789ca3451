use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::TokenPairDto,
    server::{config::Config, error::auth::AuthError},
};

const KIND_ACCESS: &str = "access";
const KIND_REFRESH: &str = "refresh";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token was issued for.
    pub sub: i64,
    pub iat: i64,
    pub exp: i64,
    /// Either `access` or `refresh`; access endpoints reject refresh tokens
    /// and vice versa.
    pub kind: String,
}

/// Issues and validates the signed bearer tokens used by the HTTP API and the
/// realtime socket. Access tokens are short-lived; refresh tokens are only
/// accepted by the refresh endpoint.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl_secs: config.access_token_ttl_secs,
            refresh_ttl_secs: config.refresh_token_ttl_secs,
        }
    }

    pub fn issue_pair(&self, user_id: i64) -> Result<TokenPairDto, AuthError> {
        Ok(TokenPairDto {
            access_token: self.issue(user_id, KIND_ACCESS, self.access_ttl_secs)?,
            refresh_token: self.issue(user_id, KIND_REFRESH, self.refresh_ttl_secs)?,
        })
    }

    /// Validates an access token and returns the user id it was issued for.
    pub fn verify_access(&self, token: &str) -> Result<i64, AuthError> {
        self.verify(token, KIND_ACCESS)
    }

    /// Validates a refresh token and returns the user id it was issued for.
    pub fn verify_refresh(&self, token: &str) -> Result<i64, AuthError> {
        self.verify(token, KIND_REFRESH)
    }

    fn issue(&self, user_id: i64, kind: &str, ttl_secs: i64) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + ttl_secs,
            kind: kind.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|err| {
            tracing::error!("Failed to sign {} token: {}", kind, err);
            AuthError::InvalidToken
        })
    }

    fn verify(&self, token: &str, expected_kind: &str) -> Result<i64, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(
            |err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            },
        )?;

        if data.claims.kind != expected_kind {
            return Err(AuthError::InvalidToken);
        }

        Ok(data.claims.sub)
    }
}
