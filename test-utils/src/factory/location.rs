//! Location factory for creating test location entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test locations with customizable fields.
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    province: String,
    country: String,
    image: Option<String>,
}

impl<'a> LocationFactory<'a> {
    /// Creates a new LocationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Location {id}"`
    /// - province: `"Province {id}"`
    /// - country: `"Vietnam"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Location {}", id),
            province: format!("Province {}", id),
            country: "Vietnam".to_string(),
            image: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.province = province.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Builds and inserts the location entity into the database.
    pub async fn build(self) -> Result<entity::location::Model, DbErr> {
        entity::location::ActiveModel {
            name: ActiveValue::Set(self.name),
            province: ActiveValue::Set(self.province),
            country: ActiveValue::Set(self.country),
            image: ActiveValue::Set(self.image),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a location with default values.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    LocationFactory::new(db).build().await
}
