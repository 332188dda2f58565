use std::path::Path;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{location::LocationRepository, room::RoomRepository},
    error::AppError,
    model::{
        location::{CreateLocationParam, Location, UpdateLocationParam},
        pagination::{Page, PageRequest},
    },
    service::upload::{ImageUpload, UploadFolder, UploadService},
};

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Location>, AppError> {
        Ok(LocationRepository::new(self.db).get_all().await?)
    }

    pub async fn get_paginated(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Location>, AppError> {
        Ok(LocationRepository::new(self.db)
            .get_paginated(keyword.trim(), page)
            .await?)
    }

    /// Searches locations by name. A blank keyword returns nothing.
    pub async fn search(&self, keyword: &str) -> Result<Vec<Location>, AppError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        Ok(LocationRepository::new(self.db)
            .search_by_name(keyword)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Location, AppError> {
        LocationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| location_not_found(id))
    }

    /// Creates a location unless one with the same name already exists in the province.
    ///
    /// # Returns
    /// - `Ok(Location)` - The created location
    /// - `Err(AppError::Conflict)` - Name and province pair already used
    pub async fn create(&self, param: CreateLocationParam) -> Result<Location, AppError> {
        let repo = LocationRepository::new(self.db);

        if repo
            .find_by_name_and_province(&param.name, &param.province)
            .await?
            .is_some()
        {
            return Err(duplicate_location(&param.name, &param.province));
        }

        let location = repo.create(param).await?;

        tracing::info!("Created location {}", location.id);

        Ok(location)
    }

    /// Applies a partial update, re-checking name and province uniqueness against
    /// the values the location will have afterwards.
    ///
    /// # Returns
    /// - `Ok(Location)` - The updated location
    /// - `Err(AppError::NotFound)` - No location with that id
    /// - `Err(AppError::Conflict)` - Another location already uses the pair
    pub async fn update(&self, id: i32, param: UpdateLocationParam) -> Result<Location, AppError> {
        let repo = LocationRepository::new(self.db);

        let existing = repo.find_by_id(id).await?.ok_or_else(|| location_not_found(id))?;

        let name = param.name.as_deref().unwrap_or(&existing.name);
        let province = param.province.as_deref().unwrap_or(&existing.province);
        if let Some(other) = repo.find_by_name_and_province(name, province).await? {
            if other.id != id {
                return Err(duplicate_location(name, province));
            }
        }

        repo.update(id, param)
            .await?
            .ok_or_else(|| location_not_found(id))
    }

    /// Deletes a location that no room references.
    ///
    /// # Returns
    /// - `Ok(())` - Location deleted
    /// - `Err(AppError::NotFound)` - No location with that id
    /// - `Err(AppError::Conflict)` - Room rows, soft-deleted ones included, still reference the location
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = LocationRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(location_not_found(id));
        }

        let rooms = RoomRepository::new(self.db).count_by_location(id).await?;
        if rooms > 0 {
            return Err(AppError::Conflict(format!(
                "Location {} is still referenced by {} room(s)",
                id, rooms
            )));
        }

        repo.delete(id).await?;

        tracing::info!("Deleted location {}", id);

        Ok(())
    }

    /// Stores an uploaded image and points the location at it.
    pub async fn upload_image(
        &self,
        id: i32,
        public_dir: &Path,
        upload: ImageUpload,
    ) -> Result<Location, AppError> {
        let repo = LocationRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(location_not_found(id));
        }

        let path = UploadService::new(public_dir)
            .save(UploadFolder::Locations, upload)
            .await?;

        repo.set_image(id, path)
            .await?
            .ok_or_else(|| location_not_found(id))
    }
}

fn location_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Location {} not found", id))
}

fn duplicate_location(name: &str, province: &str) -> AppError {
    AppError::Conflict(format!(
        "Location '{}' already exists in {}",
        name, province
    ))
}
