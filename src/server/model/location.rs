//! Location domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::location::{CreateLocationDto, LocationDto, UpdateLocationDto};

/// A place rooms are listed in, identified by name within a province.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub province: String,
    pub country: String,
    /// Public path of the uploaded image.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Location {
    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            id: self.id,
            name: self.name,
            province: self.province,
            country: self.country,
            image: self.image,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            province: entity.province,
            country: entity.country,
            image: entity.image,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLocationParam {
    pub name: String,
    pub province: String,
    pub country: String,
}

impl CreateLocationParam {
    pub fn from_dto(dto: CreateLocationDto) -> Self {
        Self {
            name: dto.name,
            province: dto.province,
            country: dto.country,
        }
    }
}

/// Partial update of a location. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateLocationParam {
    pub name: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
}

impl UpdateLocationParam {
    pub fn from_dto(dto: UpdateLocationDto) -> Self {
        Self {
            name: dto.name,
            province: dto.province,
            country: dto.country,
        }
    }
}
