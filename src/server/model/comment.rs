//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::comment::{CommentDto, CreateCommentDto, UpdateCommentDto};

/// Review left by a user on a room.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub room_id: i32,
    pub user_id: i32,
    pub content: String,
    /// Star rating from 1 to 5.
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            room_id: self.room_id,
            user_id: self.user_id,
            content: self.content,
            rating: self.rating,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            room_id: entity.room_id,
            user_id: entity.user_id,
            content: entity.content,
            rating: entity.rating,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCommentParam {
    pub room_id: i32,
    pub user_id: i32,
    pub content: String,
    pub rating: i32,
}

impl CreateCommentParam {
    pub fn from_dto(dto: CreateCommentDto, user_id: i32) -> Self {
        Self {
            room_id: dto.room_id,
            user_id,
            content: dto.content,
            rating: dto.rating,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCommentParam {
    pub content: String,
    pub rating: i32,
}

impl UpdateCommentParam {
    pub fn from_dto(dto: UpdateCommentDto) -> Self {
        Self {
            content: dto.content,
            rating: dto.rating,
        }
    }
}
