//! Room data repository for database operations.
//!
//! Rooms are soft-deleted. Every read filters on `is_deleted = false` except
//! `count_by_location`, which counts all rows holding a foreign key to the location.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    pagination::{Page, PageRequest},
    room::{CreateRoomParam, Room, UpdateRoomParam},
};

/// Repository providing database operations for rooms.
pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    /// Creates a new RoomRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new room without an image.
    ///
    /// # Arguments
    /// - `param` - Room fields; the location must already exist
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateRoomParam) -> Result<Room, DbErr> {
        let amenities = param.amenities;
        let entity = entity::room::ActiveModel {
            name: ActiveValue::Set(param.name),
            location_id: ActiveValue::Set(param.location_id),
            price: ActiveValue::Set(param.price),
            guests: ActiveValue::Set(param.guests),
            bedrooms: ActiveValue::Set(param.bedrooms),
            beds: ActiveValue::Set(param.beds),
            bathrooms: ActiveValue::Set(param.bathrooms),
            description: ActiveValue::Set(param.description),
            washer: ActiveValue::Set(amenities.washer),
            iron: ActiveValue::Set(amenities.iron),
            tv: ActiveValue::Set(amenities.tv),
            air_conditioner: ActiveValue::Set(amenities.air_conditioner),
            wifi: ActiveValue::Set(amenities.wifi),
            kitchen: ActiveValue::Set(amenities.kitchen),
            parking: ActiveValue::Set(amenities.parking),
            pool: ActiveValue::Set(amenities.pool),
            image: ActiveValue::Set(None),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(entity))
    }

    /// Finds a visible room by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(id)
            .filter(entity::room::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(Room::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .filter(entity::room::Column::IsDeleted.eq(false))
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Gets visible rooms listed under a location.
    pub async fn get_by_location(&self, location_id: i32) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .filter(entity::room::Column::LocationId.eq(location_id))
            .filter(entity::room::Column::IsDeleted.eq(false))
            .order_by_asc(entity::room::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Gets one page of visible rooms whose name contains `keyword`.
    ///
    /// # Arguments
    /// - `keyword` - Substring to match against the name; empty matches all
    /// - `page` - Normalized page request
    ///
    /// # Returns
    /// - `Ok(Page<Room>)` - Rooms for the requested page with totals
    /// - `Err(DbErr)` - Database error during count or fetch
    pub async fn get_paginated(&self, keyword: &str, page: PageRequest) -> Result<Page<Room>, DbErr> {
        let txn = self.db.begin().await?;

        let paginator = entity::prelude::Room::find()
            .filter(entity::room::Column::IsDeleted.eq(false))
            .filter(entity::room::Column::Name.contains(keyword))
            .order_by_asc(entity::room::Column::Id)
            .paginate(&txn, page.page_size);
        let total_items = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;

        txn.commit().await?;

        let rooms = entities.into_iter().map(Room::from_entity).collect();
        Ok(Page::new(rooms, page, total_items))
    }

    /// Counts every room row referencing a location, soft-deleted ones included.
    pub async fn count_by_location(&self, location_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::LocationId.eq(location_id))
            .count(self.db)
            .await
    }

    /// Applies a partial update to a visible room.
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - The updated room
    /// - `Ok(None)` - No visible room with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: UpdateRoomParam) -> Result<Option<Room>, DbErr> {
        let Some(room) = entity::prelude::Room::find_by_id(id)
            .filter(entity::room::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::room::ActiveModel = room.into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(location_id) = param.location_id {
            active_model.location_id = ActiveValue::Set(location_id);
        }
        if let Some(price) = param.price {
            active_model.price = ActiveValue::Set(price);
        }
        if let Some(guests) = param.guests {
            active_model.guests = ActiveValue::Set(guests);
        }
        if let Some(bedrooms) = param.bedrooms {
            active_model.bedrooms = ActiveValue::Set(bedrooms);
        }
        if let Some(beds) = param.beds {
            active_model.beds = ActiveValue::Set(beds);
        }
        if let Some(bathrooms) = param.bathrooms {
            active_model.bathrooms = ActiveValue::Set(bathrooms);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(amenities) = param.amenities {
            active_model.washer = ActiveValue::Set(amenities.washer);
            active_model.iron = ActiveValue::Set(amenities.iron);
            active_model.tv = ActiveValue::Set(amenities.tv);
            active_model.air_conditioner = ActiveValue::Set(amenities.air_conditioner);
            active_model.wifi = ActiveValue::Set(amenities.wifi);
            active_model.kitchen = ActiveValue::Set(amenities.kitchen);
            active_model.parking = ActiveValue::Set(amenities.parking);
            active_model.pool = ActiveValue::Set(amenities.pool);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Some(Room::from_entity(updated)))
    }

    /// Stores the public path of a newly uploaded image on a visible room.
    pub async fn set_image(&self, id: i32, image: String) -> Result<Option<Room>, DbErr> {
        let Some(room) = entity::prelude::Room::find_by_id(id)
            .filter(entity::room::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::room::ActiveModel = room.into();
        active_model.image = ActiveValue::Set(Some(image));

        let updated = active_model.update(self.db).await?;

        Ok(Some(Room::from_entity(updated)))
    }

    /// Marks a visible room as deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - Room was soft-deleted
    /// - `Ok(false)` - No visible room with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::update_many()
            .filter(entity::room::Column::Id.eq(id))
            .filter(entity::room::Column::IsDeleted.eq(false))
            .col_expr(
                entity::room::Column::IsDeleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
