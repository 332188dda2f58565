use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, room::RoomRepository},
    error::AppError,
    model::{
        comment::{Comment, CreateCommentParam, UpdateCommentParam},
        pagination::{Page, PageRequest},
    },
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Comment>, AppError> {
        Ok(CommentRepository::new(self.db).get_all().await?)
    }

    pub async fn get_paginated(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Comment>, AppError> {
        Ok(CommentRepository::new(self.db)
            .get_paginated(keyword.trim(), page)
            .await?)
    }

    /// Searches comment content. A blank keyword returns nothing.
    pub async fn search(&self, keyword: &str) -> Result<Vec<Comment>, AppError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        Ok(CommentRepository::new(self.db)
            .search_by_content(keyword)
            .await?)
    }

    /// Lists comments of a visible room, newest first.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The room does not exist or was deleted
    pub async fn get_by_room(&self, room_id: i32) -> Result<Vec<Comment>, AppError> {
        if RoomRepository::new(self.db)
            .find_by_id(room_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Room {} not found", room_id)));
        }

        Ok(CommentRepository::new(self.db).get_by_room(room_id).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Comment, AppError> {
        CommentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| comment_not_found(id))
    }

    /// Adds a comment to a visible room.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - The room does not exist or was deleted
    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, AppError> {
        if RoomRepository::new(self.db)
            .find_by_id(param.room_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Room {} does not exist",
                param.room_id
            )));
        }

        Ok(CommentRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, id: i32, param: UpdateCommentParam) -> Result<Comment, AppError> {
        CommentRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| comment_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CommentRepository::new(self.db).delete(id).await? {
            return Err(comment_not_found(id));
        }

        Ok(())
    }
}

fn comment_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Comment {} not found", id))
}
