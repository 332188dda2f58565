//! Comment data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    comment::{Comment, CreateCommentParam, UpdateCommentParam},
    pagination::{Page, PageRequest},
};

/// Repository providing database operations for comments.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            room_id: ActiveValue::Set(param.room_id),
            user_id: ActiveValue::Set(param.user_id),
            content: ActiveValue::Set(param.content),
            rating: ActiveValue::Set(param.rating),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Gets all comments, newest first.
    pub async fn get_all(&self) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Gets comments left on one room, newest first.
    pub async fn get_by_room(&self, room_id: i32) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::RoomId.eq(room_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Gets one page of comments whose content contains `keyword`, newest first.
    ///
    /// # Arguments
    /// - `keyword` - Substring matched against the content; empty matches all
    /// - `page` - Normalized page request
    ///
    /// # Returns
    /// - `Ok(Page<Comment>)` - Comments for the requested page with totals
    /// - `Err(DbErr)` - Database error during count or fetch
    pub async fn get_paginated(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Comment>, DbErr> {
        let txn = self.db.begin().await?;

        let paginator = entity::prelude::Comment::find()
            .filter(entity::comment::Column::Content.contains(keyword))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .paginate(&txn, page.page_size);
        let total_items = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;

        txn.commit().await?;

        let comments = entities.into_iter().map(Comment::from_entity).collect();
        Ok(Page::new(comments, page, total_items))
    }

    pub async fn search_by_content(&self, keyword: &str) -> Result<Vec<Comment>, DbErr> {
        let entities = entity::prelude::Comment::find()
            .filter(entity::comment::Column::Content.contains(keyword))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Comment::from_entity).collect())
    }

    /// Replaces content and rating.
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - The updated comment
    /// - `Ok(None)` - No comment with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateCommentParam,
    ) -> Result<Option<Comment>, DbErr> {
        let Some(comment) = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::comment::ActiveModel = comment.into();
        active_model.content = ActiveValue::Set(param.content);
        active_model.rating = ActiveValue::Set(param.rating);

        let updated = active_model.update(self.db).await?;

        Ok(Some(Comment::from_entity(updated)))
    }

    /// Deletes a comment row.
    ///
    /// # Returns
    /// - `Ok(true)` - Comment was deleted
    /// - `Ok(false)` - No comment with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
