//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let room = RoomFactory::new(&db, location.id)
///     .name("Sea view")
///     .guests(4)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    location_id: i32,
    name: String,
    price: i32,
    guests: i32,
    is_deleted: bool,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Room {id}"`
    /// - price: `50`
    /// - guests: `2`
    /// - one bedroom, bed and bathroom, wifi only
    pub fn new(db: &'a DatabaseConnection, location_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            location_id,
            name: format!("Room {}", id),
            price: 50,
            guests: 2,
            is_deleted: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
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

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            name: ActiveValue::Set(self.name),
            location_id: ActiveValue::Set(self.location_id),
            price: ActiveValue::Set(self.price),
            guests: ActiveValue::Set(self.guests),
            bedrooms: ActiveValue::Set(1),
            beds: ActiveValue::Set(1),
            bathrooms: ActiveValue::Set(1),
            description: ActiveValue::Set("Test room description".to_string()),
            washer: ActiveValue::Set(false),
            iron: ActiveValue::Set(false),
            tv: ActiveValue::Set(false),
            air_conditioner: ActiveValue::Set(false),
            wifi: ActiveValue::Set(true),
            kitchen: ActiveValue::Set(false),
            parking: ActiveValue::Set(false),
            pool: ActiveValue::Set(false),
            image: ActiveValue::Set(None),
            is_deleted: ActiveValue::Set(self.is_deleted),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values in the given location.
pub async fn create_room(
    db: &DatabaseConnection,
    location_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, location_id).build().await
}
