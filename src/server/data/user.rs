//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! Soft-deleted users are filtered out of every read except `find_by_email`, which must
//! see them for uniqueness and login checks.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    pagination::{Page, PageRequest},
    user::{CreateUserParam, UpdateUserParam, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - User fields; `param.password` is ignored
    /// - `password_hash` - bcrypt hash to store, or `None` for no password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique email violations
    pub async fn create(
        &self,
        param: CreateUserParam,
        password_hash: Option<String>,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(password_hash),
            phone: ActiveValue::Set(param.phone),
            birthday: ActiveValue::Set(param.birthday),
            gender: ActiveValue::Set(param.gender),
            role: ActiveValue::Set(param.role),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a visible user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User exists and is not soft-deleted
    /// - `Ok(None)` - No such user, or the user was soft-deleted
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email, including soft-deleted users.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether an email is used by any account other than `exclude_id`.
    ///
    /// Soft-deleted accounts still hold their email.
    pub async fn email_taken(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));
        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets all visible users ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::IsDeleted.eq(false))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets one page of visible users whose name contains `keyword`.
    ///
    /// # Arguments
    /// - `keyword` - Substring to match against the name; empty matches everyone
    /// - `page` - Normalized page request
    ///
    /// # Returns
    /// - `Ok(Page<User>)` - Users for the requested page with totals
    /// - `Err(DbErr)` - Database error during count or fetch
    pub async fn get_paginated(&self, keyword: &str, page: PageRequest) -> Result<Page<User>, DbErr> {
        let txn = self.db.begin().await?;

        let paginator = entity::prelude::User::find()
            .filter(entity::user::Column::IsDeleted.eq(false))
            .filter(entity::user::Column::Name.contains(keyword))
            .order_by_asc(entity::user::Column::Id)
            .paginate(&txn, page.page_size);
        let total_items = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;

        txn.commit().await?;

        let users = entities.into_iter().map(User::from_entity).collect();
        Ok(Page::new(users, page, total_items))
    }

    /// Gets visible users whose name contains `name`.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::IsDeleted.eq(false))
            .filter(entity::user::Column::Name.contains(name))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Applies a partial update to a visible user.
    ///
    /// # Arguments
    /// - `id` - User to update
    /// - `param` - Fields to change; `param.password` is ignored
    /// - `password_hash` - Replacement bcrypt hash, if the password changes
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No visible user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateUserParam,
        password_hash: Option<String>,
    ) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(hash) = password_hash {
            active_model.password = ActiveValue::Set(Some(hash));
        }
        if let Some(phone) = param.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(birthday) = param.birthday {
            active_model.birthday = ActiveValue::Set(Some(birthday));
        }
        if let Some(gender) = param.gender {
            active_model.gender = ActiveValue::Set(Some(gender));
        }
        if let Some(role) = param.role {
            active_model.role = ActiveValue::Set(role);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Marks a visible user as deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - User was soft-deleted
    /// - `Ok(false)` - No visible user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::IsDeleted.eq(false))
            .col_expr(
                entity::user::Column::IsDeleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
