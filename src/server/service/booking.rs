//! Booking rules and orchestration.
//!
//! Every write checks the date range, the guest count against the room's capacity
//! and that both the room and the guest are still visible.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, room::RoomRepository, user::UserRepository},
    error::AppError,
    model::{
        booking::{Booking, CreateBookingParam, UpdateBookingParam},
        pagination::{Page, PageRequest},
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Booking>, AppError> {
        Ok(BookingRepository::new(self.db).get_all().await?)
    }

    /// Paginates bookings, matching `keyword` against the province of the booked room.
    pub async fn get_paginated(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Booking>, AppError> {
        Ok(BookingRepository::new(self.db)
            .get_paginated(keyword.trim(), page)
            .await?)
    }

    /// Lists a user's bookings.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The user does not exist or was deleted
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Booking>, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        Ok(BookingRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Booking, AppError> {
        BookingRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| booking_not_found(id))
    }

    /// Books a room for a user.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(AppError::BadRequest)` - Invalid dates or guests, or room or user missing
    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, AppError> {
        validate_dates(param.check_in, param.check_out)?;
        self.ensure_room_fits(param.room_id, param.guests).await?;
        self.ensure_user_exists(param.user_id).await?;

        let booking = BookingRepository::new(self.db).create(param).await?;

        tracing::info!(
            "User {} booked room {} (booking {})",
            booking.user_id,
            booking.room_id,
            booking.id
        );

        Ok(booking)
    }

    /// Replaces room, dates and guests of a booking.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The updated booking
    /// - `Err(AppError::NotFound)` - No visible booking with that id
    /// - `Err(AppError::BadRequest)` - Invalid dates or guests, or room or booker missing
    pub async fn update(&self, id: i32, param: UpdateBookingParam) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Err(booking_not_found(id));
        };

        validate_dates(param.check_in, param.check_out)?;
        self.ensure_room_fits(param.room_id, param.guests).await?;
        self.ensure_user_exists(existing.user_id).await?;

        repo.update(id, param)
            .await?
            .ok_or_else(|| booking_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !BookingRepository::new(self.db).soft_delete(id).await? {
            return Err(booking_not_found(id));
        }

        tracing::info!("Soft-deleted booking {}", id);

        Ok(())
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "User {} does not exist",
                user_id
            )));
        }

        Ok(())
    }

    async fn ensure_room_fits(&self, room_id: i32, guests: i32) -> Result<(), AppError> {
        let room = RoomRepository::new(self.db)
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Room {} does not exist", room_id)))?;

        if guests < 1 {
            return Err(AppError::BadRequest(
                "A booking needs at least one guest".to_string(),
            ));
        }
        if guests > room.guests {
            return Err(AppError::BadRequest(format!(
                "Room {} accepts at most {} guest(s)",
                room_id, room.guests
            )));
        }

        Ok(())
    }
}

fn validate_dates(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Result<(), AppError> {
    if check_out <= check_in {
        return Err(AppError::BadRequest(
            "Check-out must be after check-in".to_string(),
        ));
    }

    Ok(())
}

fn booking_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Booking {} not found", id))
}
