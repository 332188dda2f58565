//! Booking domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::booking::{BookingDto, CreateBookingDto, UpdateBookingDto};

/// Reservation of a room by a user for a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub room_id: i32,
    pub user_id: i32,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: i32,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            room_id: self.room_id,
            user_id: self.user_id,
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            room_id: entity.room_id,
            user_id: entity.user_id,
            check_in: entity.check_in,
            check_out: entity.check_out,
            guests: entity.guests,
            is_deleted: entity.is_deleted,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a booking, with the guest already resolved.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub room_id: i32,
    pub user_id: i32,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: i32,
}

impl CreateBookingParam {
    /// Builds the parameters, booking for `user_id` when the DTO names nobody.
    pub fn from_dto(dto: CreateBookingDto, user_id: i32) -> Self {
        Self {
            room_id: dto.room_id,
            user_id: dto.user_id.unwrap_or(user_id),
            check_in: dto.check_in,
            check_out: dto.check_out,
            guests: dto.guests,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateBookingParam {
    pub room_id: i32,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub guests: i32,
}

impl UpdateBookingParam {
    pub fn from_dto(dto: UpdateBookingDto) -> Self {
        Self {
            room_id: dto.room_id,
            check_in: dto.check_in,
            check_out: dto.check_out,
            guests: dto.guests,
        }
    }
}
