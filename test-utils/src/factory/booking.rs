//! Booking factory for creating test booking entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    user_id: i32,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    guests: i32,
    is_deleted: bool,
    created_at: DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - check_in: 1 day from now
    /// - check_out: 3 days from now
    /// - guests: `1`
    pub fn new(db: &'a DatabaseConnection, room_id: i32, user_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            room_id,
            user_id,
            check_in: now + Duration::days(1),
            check_out: now + Duration::days(3),
            guests: 1,
            is_deleted: false,
            created_at: now,
        }
    }

    pub fn dates(mut self, check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Self {
        self.check_in = check_in;
        self.check_out = check_out;
        self
    }

    pub fn guests(mut self, guests: i32) -> Self {
        self.guests = guests;
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Overrides the creation timestamp, used to control list ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            room_id: ActiveValue::Set(self.room_id),
            user_id: ActiveValue::Set(self.user_id),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            guests: ActiveValue::Set(self.guests),
            is_deleted: ActiveValue::Set(self.is_deleted),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    room_id: i32,
    user_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, room_id, user_id).build().await
}
