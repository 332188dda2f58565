//! Location data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    location::{CreateLocationParam, Location, UpdateLocationParam},
    pagination::{Page, PageRequest},
};

/// Repository providing database operations for locations.
pub struct LocationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationRepository<'a> {
    /// Creates a new LocationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new location without an image.
    pub async fn create(&self, param: CreateLocationParam) -> Result<Location, DbErr> {
        let entity = entity::location::ActiveModel {
            name: ActiveValue::Set(param.name),
            province: ActiveValue::Set(param.province),
            country: ActiveValue::Set(param.country),
            image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Location::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Location>, DbErr> {
        let entity = entity::prelude::Location::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Location::from_entity))
    }

    /// Finds the location with exactly this name in this province.
    ///
    /// Used to enforce the (name, province) uniqueness rule before writes.
    pub async fn find_by_name_and_province(
        &self,
        name: &str,
        province: &str,
    ) -> Result<Option<Location>, DbErr> {
        let entity = entity::prelude::Location::find()
            .filter(entity::location::Column::Name.eq(name))
            .filter(entity::location::Column::Province.eq(province))
            .one(self.db)
            .await?;

        Ok(entity.map(Location::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Location>, DbErr> {
        let entities = entity::prelude::Location::find()
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Location::from_entity).collect())
    }

    /// Gets one page of locations whose name contains `keyword`.
    ///
    /// # Arguments
    /// - `keyword` - Substring to match against the name; empty matches all
    /// - `page` - Normalized page request
    ///
    /// # Returns
    /// - `Ok(Page<Location>)` - Locations for the requested page with totals
    /// - `Err(DbErr)` - Database error during count or fetch
    pub async fn get_paginated(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Location>, DbErr> {
        let txn = self.db.begin().await?;

        let paginator = entity::prelude::Location::find()
            .filter(entity::location::Column::Name.contains(keyword))
            .order_by_asc(entity::location::Column::Id)
            .paginate(&txn, page.page_size);
        let total_items = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;

        txn.commit().await?;

        let locations = entities.into_iter().map(Location::from_entity).collect();
        Ok(Page::new(locations, page, total_items))
    }

    pub async fn search_by_name(&self, keyword: &str) -> Result<Vec<Location>, DbErr> {
        let entities = entity::prelude::Location::find()
            .filter(entity::location::Column::Name.contains(keyword))
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Location::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Location))` - The updated location
    /// - `Ok(None)` - No location with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateLocationParam,
    ) -> Result<Option<Location>, DbErr> {
        let Some(location) = entity::prelude::Location::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::location::ActiveModel = location.into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(province) = param.province {
            active_model.province = ActiveValue::Set(province);
        }
        if let Some(country) = param.country {
            active_model.country = ActiveValue::Set(country);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(Location::from_entity(updated)))
    }

    /// Stores the public path of a newly uploaded image.
    pub async fn set_image(&self, id: i32, image: String) -> Result<Option<Location>, DbErr> {
        let Some(location) = entity::prelude::Location::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::location::ActiveModel = location.into();
        active_model.image = ActiveValue::Set(Some(image));

        let updated = active_model.update(self.db).await?;

        Ok(Some(Location::from_entity(updated)))
    }

    /// Deletes a location row.
    ///
    /// # Returns
    /// - `Ok(true)` - Location was deleted
    /// - `Ok(false)` - No location with that id
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Location::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
