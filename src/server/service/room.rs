use std::path::Path;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{location::LocationRepository, room::RoomRepository},
    error::AppError,
    model::{
        pagination::{Page, PageRequest},
        room::{CreateRoomParam, Room, UpdateRoomParam},
    },
    service::upload::{ImageUpload, UploadFolder, UploadService},
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Room>, AppError> {
        Ok(RoomRepository::new(self.db).get_all().await?)
    }

    /// Lists visible rooms of a location.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - The location does not exist
    pub async fn get_by_location(&self, location_id: i32) -> Result<Vec<Room>, AppError> {
        if LocationRepository::new(self.db)
            .find_by_id(location_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Location {} not found",
                location_id
            )));
        }

        Ok(RoomRepository::new(self.db)
            .get_by_location(location_id)
            .await?)
    }

    pub async fn get_paginated(&self, keyword: &str, page: PageRequest) -> Result<Page<Room>, AppError> {
        Ok(RoomRepository::new(self.db)
            .get_paginated(keyword.trim(), page)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Room, AppError> {
        RoomRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| room_not_found(id))
    }

    /// Creates a room in an existing location.
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room
    /// - `Err(AppError::BadRequest)` - The location does not exist
    pub async fn create(&self, param: CreateRoomParam) -> Result<Room, AppError> {
        self.ensure_location_exists(param.location_id).await?;

        let room = RoomRepository::new(self.db).create(param).await?;

        tracing::info!("Created room {} in location {}", room.id, room.location_id);

        Ok(room)
    }

    /// Applies a partial update, checking a new location before moving the room.
    ///
    /// # Returns
    /// - `Ok(Room)` - The updated room
    /// - `Err(AppError::NotFound)` - No visible room with that id
    /// - `Err(AppError::BadRequest)` - The new location does not exist
    pub async fn update(&self, id: i32, param: UpdateRoomParam) -> Result<Room, AppError> {
        let repo = RoomRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(room_not_found(id));
        }
        if let Some(location_id) = param.location_id {
            self.ensure_location_exists(location_id).await?;
        }

        repo.update(id, param)
            .await?
            .ok_or_else(|| room_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !RoomRepository::new(self.db).soft_delete(id).await? {
            return Err(room_not_found(id));
        }

        tracing::info!("Soft-deleted room {}", id);

        Ok(())
    }

    /// Stores an uploaded image and points the room at it.
    pub async fn upload_image(
        &self,
        id: i32,
        public_dir: &Path,
        upload: ImageUpload,
    ) -> Result<Room, AppError> {
        let repo = RoomRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(room_not_found(id));
        }

        let path = UploadService::new(public_dir)
            .save(UploadFolder::Rooms, upload)
            .await?;

        repo.set_image(id, path)
            .await?
            .ok_or_else(|| room_not_found(id))
    }

    async fn ensure_location_exists(&self, location_id: i32) -> Result<(), AppError> {
        match LocationRepository::new(self.db)
            .find_by_id(location_id)
            .await?
        {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(format!(
                "Location {} does not exist",
                location_id
            ))),
        }
    }
}

fn room_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Room {} not found", id))
}
