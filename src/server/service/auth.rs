//! Registration, login and token refresh.

use entity::sea_orm_active_enums::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::{LoginParam, LoginResult, RegisterParam, TokenPair},
        user::{CreateUserParam, User},
    },
    service::token::TokenService,
    util::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account with the `user` role.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, param: RegisterParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_taken(&param.email, None).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let password_hash = hash_password(&param.password).await?;
        let user = repo
            .create(
                CreateUserParam {
                    name: param.name,
                    email: param.email,
                    password: None,
                    phone: param.phone,
                    birthday: param.birthday,
                    gender: param.gender,
                    role: Role::User,
                },
                Some(password_hash),
            )
            .await?;

        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }

    /// Checks credentials and issues a token pair.
    ///
    /// Unknown emails, deleted accounts and wrong passwords all fail with the same
    /// `InvalidCredentials` error.
    pub async fn login(&self, param: LoginParam) -> Result<LoginResult, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_email(&param.email)
            .await?
            .filter(|user| !user.is_deleted)
            .ok_or(AuthError::InvalidCredentials)?;

        let Some(hash) = user.password_hash.as_deref() else {
            return Err(AuthError::PasswordNotSet(user.id).into());
        };

        if !verify_password(&param.password, hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = self.tokens.issue_pair(user.id, user.role)?;

        tracing::info!("User {} logged in", user.id);

        Ok(LoginResult { tokens, user })
    }

    /// Exchanges a refresh token and a possibly expired access token for a new pair.
    ///
    /// The refresh token must be valid and unexpired; the access token only needs a
    /// valid signature. Both must name the same user, who must still exist. The new
    /// tokens carry the role currently stored for the user.
    ///
    /// # Returns
    /// - `Ok(TokenPair)` - Newly issued tokens
    /// - `Err(AppError::AuthErr)` - Any check failed, mapped to 401
    pub async fn refresh(
        &self,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> Result<TokenPair, AppError> {
        let (Some(access_token), Some(refresh_token)) =
            (non_blank(access_token), non_blank(refresh_token))
        else {
            return Err(AuthError::MissingToken.into());
        };

        let refresh_claims = self.tokens.verify_refresh(refresh_token)?;
        let access_claims = self.tokens.decode_access_ignoring_expiry(access_token)?;

        let refresh_user_id = refresh_claims.user_id()?;
        let access_user_id = access_claims.user_id()?;
        if access_user_id != refresh_user_id {
            return Err(AuthError::TokenMismatch(access_user_id, refresh_user_id).into());
        }

        let user = UserRepository::new(self.db)
            .find_by_id(refresh_user_id)
            .await?
            .ok_or(AuthError::UserNotFound(refresh_user_id))?;

        Ok(self.tokens.issue_pair(user.id, user.role)?)
    }
}

fn non_blank(token: Option<&str>) -> Option<&str> {
    token.filter(|t| !t.trim().is_empty())
}
