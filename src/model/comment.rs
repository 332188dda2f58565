use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub room_id: i32,
    pub user_id: i32,
    pub content: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateCommentDto {
    pub room_id: i32,
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateCommentDto {
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
}
