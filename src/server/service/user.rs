use entity::sea_orm_active_enums::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        pagination::{Page, PageRequest},
        user::{CreateUserParam, UpdateUserParam, User, ROLES},
    },
    util::password::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    pub async fn get_paginated(&self, keyword: &str, page: PageRequest) -> Result<Page<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .get_paginated(keyword.trim(), page)
            .await?)
    }

    /// Searches users by name. A blank name returns no users.
    pub async fn search(&self, name: &str) -> Result<Vec<User>, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Vec::new());
        }

        Ok(UserRepository::new(self.db).search_by_name(name).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Creates a user with the requested role.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already in use
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_taken(&param.email, None).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let password_hash = match param.password.as_deref() {
            Some(plain) => Some(hash_password(plain).await?),
            None => None,
        };
        let user = repo.create(param, password_hash).await?;

        tracing::info!("Created user {} with role {:?}", user.id, user.role);

        Ok(user)
    }

    /// Applies a partial update.
    ///
    /// The email uniqueness check only runs when the email actually changes and a new
    /// password is hashed before storage.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No visible user with that id
    /// - `Err(AppError::Conflict)` - New email belongs to another account
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let existing = repo.find_by_id(id).await?.ok_or_else(|| user_not_found(id))?;

        if let Some(email) = param.email.as_deref() {
            if email != existing.email && repo.email_taken(email, Some(id)).await? {
                return Err(AppError::Conflict("Email is already registered".to_string()));
            }
        }

        let password_hash = match param.password.as_deref() {
            Some(plain) => Some(hash_password(plain).await?),
            None => None,
        };

        repo.update(id, param, password_hash)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).soft_delete(id).await? {
            return Err(user_not_found(id));
        }

        tracing::info!("Soft-deleted user {}", id);

        Ok(())
    }

    pub fn roles(&self) -> Vec<Role> {
        ROLES.to_vec()
    }
}

fn user_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}
