use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
};

pub enum Permission {
    /// User has the `admin` role.
    Admin,
    /// User is the given user id, or an admin.
    SelfOrAdmin(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { db, tokens, headers }
    }

    /// Authenticates the request and checks every permission.
    ///
    /// The role is read from the stored user rather than the token so role changes
    /// apply immediately.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken | InvalidToken | TokenExpired)` - Bad bearer token
    /// - `Err(AuthError::UserNotFound)` - Token user missing or soft-deleted
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify_access(token)?;
        let user_id = claims.user_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotFound(user_id).into());
        };

        authorize(&user, permissions)?;

        Ok(user)
    }
}

/// Checks permissions for an already authenticated user.
///
/// Used directly by controllers when the owner of a resource is only known after
/// loading it.
pub fn authorize(user: &User, permissions: &[Permission]) -> Result<(), AuthError> {
    for permission in permissions {
        match permission {
            Permission::Admin => {
                if !user.is_admin() {
                    return Err(AuthError::AccessDenied(
                        user.id,
                        "admin role required".to_string(),
                    ));
                }
            }
            Permission::SelfOrAdmin(owner_id) => {
                if user.id != *owner_id && !user.is_admin() {
                    return Err(AuthError::AccessDenied(
                        user.id,
                        format!("resource belongs to user {}", owner_id),
                    ));
                }
            }
        }
    }

    Ok(())
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
