//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments with customizable fields.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    user_id: i32,
    content: String,
    rating: i32,
    created_at: DateTime<Utc>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Comment {id}"`
    /// - rating: `5`
    pub fn new(db: &'a DatabaseConnection, room_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            room_id,
            user_id,
            content: format!("Comment {}", id),
            rating: 5,
            created_at: Utc::now(),
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            room_id: ActiveValue::Set(self.room_id),
            user_id: ActiveValue::Set(self.user_id),
            content: ActiveValue::Set(self.content),
            rating: ActiveValue::Set(self.rating),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values.
pub async fn create_comment(
    db: &DatabaseConnection,
    room_id: i32,
    user_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, room_id, user_id).build().await
}
