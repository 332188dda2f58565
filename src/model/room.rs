use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Amenity flags offered by a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AmenitiesDto {
    #[serde(default)]
    pub washer: bool,
    #[serde(default)]
    pub iron: bool,
    #[serde(default)]
    pub tv: bool,
    #[serde(default)]
    pub air_conditioner: bool,
    #[serde(default)]
    pub wifi: bool,
    #[serde(default)]
    pub kitchen: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub pool: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub name: String,
    pub location_id: i32,
    pub price: i32,
    pub guests: i32,
    pub bedrooms: i32,
    pub beds: i32,
    pub bathrooms: i32,
    pub description: String,
    pub amenities: AmenitiesDto,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateRoomDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub location_id: i32,
    #[validate(range(min = 0))]
    pub price: i32,
    #[validate(range(min = 1))]
    pub guests: i32,
    #[validate(range(min = 0))]
    pub bedrooms: i32,
    #[validate(range(min = 0))]
    pub beds: i32,
    #[validate(range(min = 0))]
    pub bathrooms: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenities: AmenitiesDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateRoomDto {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub location_id: Option<i32>,
    #[validate(range(min = 0))]
    pub price: Option<i32>,
    #[validate(range(min = 1))]
    pub guests: Option<i32>,
    #[validate(range(min = 0))]
    pub bedrooms: Option<i32>,
    #[validate(range(min = 0))]
    pub beds: Option<i32>,
    #[validate(range(min = 0))]
    pub bathrooms: Option<i32>,
    pub description: Option<String>,
    pub amenities: Option<AmenitiesDto>,
}
