//! JWT issuing and verification.
//!
//! Access and refresh tokens are HS256 JWTs signed with separate secrets and carrying
//! a `token_type` claim, so one kind can never be accepted in place of the other.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use entity::sea_orm_active_enums::Role;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::server::{
    config::Config,
    error::{auth::AuthError, AppError},
    model::{auth::TokenPair, user::role_name},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims stored in both token kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Role name at issue time
    pub role: String,
    pub token_type: TokenType,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse()
            .map_err(|_| AuthError::InvalidToken(format!("subject {:?} is not a user id", self.sub)))
    }
}

struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    lifetime: Duration,
}

impl TokenKeys {
    fn new(secret: &str, lifetime: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            lifetime,
        }
    }
}

struct Keys {
    access: TokenKeys,
    refresh: TokenKeys,
}

/// Issues and verifies access and refresh tokens.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
}

impl TokenService {
    pub fn new(config: &Config) -> Self {
        Self::from_secrets(
            &config.access_token_secret,
            &config.refresh_token_secret,
            Duration::minutes(config.access_token_expires_minutes),
            Duration::minutes(config.refresh_token_expires_minutes),
        )
    }

    pub fn from_secrets(
        access_secret: &str,
        refresh_secret: &str,
        access_lifetime: Duration,
        refresh_lifetime: Duration,
    ) -> Self {
        Self {
            keys: Arc::new(Keys {
                access: TokenKeys::new(access_secret, access_lifetime),
                refresh: TokenKeys::new(refresh_secret, refresh_lifetime),
            }),
        }
    }

    /// Issues a fresh access and refresh token for a user.
    ///
    /// # Arguments
    /// - `user_id` - Subject of both tokens
    /// - `role` - Role embedded in the claims
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Signed tokens
    /// - `Err(AppError::Jwt)` - Signing failed
    pub fn issue_pair(&self, user_id: i32, role: Role) -> Result<TokenPair, AppError> {
        let now = Utc::now();

        Ok(TokenPair {
            access_token: self.encode(TokenType::Access, user_id, role, now)?,
            refresh_token: self.encode(TokenType::Refresh, user_id, role, now)?,
        })
    }

    /// Signs a single token as if it had been issued at `issued_at`.
    pub fn encode(
        &self,
        token_type: TokenType,
        user_id: i32,
        role: Role,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let keys = self.keys_for(token_type);
        let claims = Claims {
            sub: user_id.to_string(),
            role: role_name(role).to_string(),
            token_type,
            iat: issued_at.timestamp(),
            exp: (issued_at + keys.lifetime).timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)?)
    }

    /// Verifies signature, expiry and type of an access token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::TokenExpired)` - Token is past its `exp`
    /// - `Err(AuthError::InvalidToken)` - Bad signature, format or token type
    pub fn verify_access(&self, token: &str) -> Result<Claims, AuthError> {
        self.decode(TokenType::Access, token, true)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
            .and_then(|claims| expect_type(claims, TokenType::Access))
    }

    /// Decodes an access token checking its signature and type but not its expiry.
    ///
    /// Used by the refresh flow, where the access token is expected to have expired.
    pub fn decode_access_ignoring_expiry(&self, token: &str) -> Result<Claims, AuthError> {
        self.decode(TokenType::Access, token, false)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
            .and_then(|claims| expect_type(claims, TokenType::Access))
    }

    /// Verifies signature, expiry and type of a refresh token.
    pub fn verify_refresh(&self, token: &str) -> Result<Claims, AuthError> {
        let claims = self
            .decode(TokenType::Refresh, token, true)
            .map_err(|e| AuthError::InvalidRefreshToken(e.to_string()))?;

        if claims.token_type != TokenType::Refresh {
            return Err(AuthError::InvalidRefreshToken(
                "not a refresh token".to_string(),
            ));
        }

        Ok(claims)
    }

    fn decode(
        &self,
        token_type: TokenType,
        token: &str,
        validate_exp: bool,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = validate_exp;
        if !validate_exp {
            validation.required_spec_claims.remove("exp");
        }

        let data = decode::<Claims>(token, &self.keys_for(token_type).decoding, &validation)?;
        Ok(data.claims)
    }

    fn keys_for(&self, token_type: TokenType) -> &TokenKeys {
        match token_type {
            TokenType::Access => &self.keys.access,
            TokenType::Refresh => &self.keys.refresh,
        }
    }
}

fn expect_type(claims: Claims, expected: TokenType) -> Result<Claims, AuthError> {
    if claims.token_type != expected {
        return Err(AuthError::InvalidToken(format!(
            "expected {:?} token, got {:?}",
            expected, claims.token_type
        )));
    }

    Ok(claims)
}
