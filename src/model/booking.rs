use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub room_id: i32,
    pub user_id: i32,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateBookingDto {
    pub room_id: i32,
    /// Guest the booking is made for. Only admins may book for someone else,
    /// otherwise the authenticated user is used.
    pub user_id: Option<i32>,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    #[validate(range(min = 1))]
    pub guests: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateBookingDto {
    pub room_id: i32,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    #[validate(range(min = 1))]
    pub guests: i32,
}
