//! Room domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::room::{AmenitiesDto, CreateRoomDto, RoomDto, UpdateRoomDto};

/// Amenities offered by a room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Amenities {
    pub washer: bool,
    pub iron: bool,
    pub tv: bool,
    pub air_conditioner: bool,
    pub wifi: bool,
    pub kitchen: bool,
    pub parking: bool,
    pub pool: bool,
}

impl Amenities {
    pub fn into_dto(self) -> AmenitiesDto {
        AmenitiesDto {
            washer: self.washer,
            iron: self.iron,
            tv: self.tv,
            air_conditioner: self.air_conditioner,
            wifi: self.wifi,
            kitchen: self.kitchen,
            parking: self.parking,
            pool: self.pool,
        }
    }

    pub fn from_dto(dto: AmenitiesDto) -> Self {
        Self {
            washer: dto.washer,
            iron: dto.iron,
            tv: dto.tv,
            air_conditioner: dto.air_conditioner,
            wifi: dto.wifi,
            kitchen: dto.kitchen,
            parking: dto.parking,
            pool: dto.pool,
        }
    }
}

/// Bookable room listed under a location.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub name: String,
    pub location_id: i32,
    /// Nightly price in whole currency units.
    pub price: i32,
    /// Maximum number of guests per booking.
    pub guests: i32,
    pub bedrooms: i32,
    pub beds: i32,
    pub bathrooms: i32,
    pub description: String,
    pub amenities: Amenities,
    pub image: Option<String>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            name: self.name,
            location_id: self.location_id,
            price: self.price,
            guests: self.guests,
            bedrooms: self.bedrooms,
            beds: self.beds,
            bathrooms: self.bathrooms,
            description: self.description,
            amenities: self.amenities.into_dto(),
            image: self.image,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location_id: entity.location_id,
            price: entity.price,
            guests: entity.guests,
            bedrooms: entity.bedrooms,
            beds: entity.beds,
            bathrooms: entity.bathrooms,
            description: entity.description,
            amenities: Amenities {
                washer: entity.washer,
                iron: entity.iron,
                tv: entity.tv,
                air_conditioner: entity.air_conditioner,
                wifi: entity.wifi,
                kitchen: entity.kitchen,
                parking: entity.parking,
                pool: entity.pool,
            },
            image: entity.image,
            is_deleted: entity.is_deleted,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomParam {
    pub name: String,
    pub location_id: i32,
    pub price: i32,
    pub guests: i32,
    pub bedrooms: i32,
    pub beds: i32,
    pub bathrooms: i32,
    pub description: String,
    pub amenities: Amenities,
}

impl CreateRoomParam {
    pub fn from_dto(dto: CreateRoomDto) -> Self {
        Self {
            name: dto.name,
            location_id: dto.location_id,
            price: dto.price,
            guests: dto.guests,
            bedrooms: dto.bedrooms,
            beds: dto.beds,
            bathrooms: dto.bathrooms,
            description: dto.description,
            amenities: Amenities::from_dto(dto.amenities),
        }
    }
}

/// Partial update of a room. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoomParam {
    pub name: Option<String>,
    pub location_id: Option<i32>,
    pub price: Option<i32>,
    pub guests: Option<i32>,
    pub bedrooms: Option<i32>,
    pub beds: Option<i32>,
    pub bathrooms: Option<i32>,
    pub description: Option<String>,
    pub amenities: Option<Amenities>,
}

impl UpdateRoomParam {
    pub fn from_dto(dto: UpdateRoomDto) -> Self {
        Self {
            name: dto.name,
            location_id: dto.location_id,
            price: dto.price,
            guests: dto.guests,
            bedrooms: dto.bedrooms,
            beds: dto.beds,
            bathrooms: dto.bathrooms,
            description: dto.description,
            amenities: dto.amenities.map(Amenities::from_dto),
        }
    }
}
