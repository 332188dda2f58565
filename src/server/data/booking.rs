//! Booking data repository for database operations.
//!
//! Bookings are soft-deleted and listed newest first. Pagination searches the province
//! of the booked room's location, which requires joining through `room` to `location`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    TransactionTrait,
};

use crate::server::model::{
    booking::{Booking, CreateBookingParam, UpdateBookingParam},
    pagination::{Page, PageRequest},
};

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new booking. Room and user existence is checked by the caller.
    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            room_id: ActiveValue::Set(param.room_id),
            user_id: ActiveValue::Set(param.user_id),
            check_in: ActiveValue::Set(param.check_in),
            check_out: ActiveValue::Set(param.check_out),
            guests: ActiveValue::Set(param.guests),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    /// Finds a visible booking by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id)
            .filter(entity::booking::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Gets all visible bookings, newest first.
    pub async fn get_all(&self) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::IsDeleted.eq(false))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Gets visible bookings made by one user, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::IsDeleted.eq(false))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Gets one page of visible bookings whose room lies in a matching province.
    ///
    /// # Arguments
    /// - `keyword` - Substring matched against the location province; empty matches all
    /// - `page` - Normalized page request
    ///
    /// # Returns
    /// - `Ok(Page<Booking>)` - Bookings for the requested page with totals
    /// - `Err(DbErr)` - Database error during count or fetch
    pub async fn get_paginated(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> Result<Page<Booking>, DbErr> {
        let txn = self.db.begin().await?;

        let paginator = entity::prelude::Booking::find()
            .join(JoinType::InnerJoin, entity::booking::Relation::Room.def())
            .join(JoinType::InnerJoin, entity::room::Relation::Location.def())
            .filter(entity::booking::Column::IsDeleted.eq(false))
            .filter(entity::location::Column::Province.contains(keyword))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .paginate(&txn, page.page_size);
        let total_items = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;

        txn.commit().await?;

        let bookings = entities.into_iter().map(Booking::from_entity).collect();
        Ok(Page::new(bookings, page, total_items))
    }

    /// Replaces room, dates and guest count of a visible booking.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The updated booking
    /// - `Ok(None)` - No visible booking with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateBookingParam,
    ) -> Result<Option<Booking>, DbErr> {
        let Some(booking) = entity::prelude::Booking::find_by_id(id)
            .filter(entity::booking::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.room_id = ActiveValue::Set(param.room_id);
        active_model.check_in = ActiveValue::Set(param.check_in);
        active_model.check_out = ActiveValue::Set(param.check_out);
        active_model.guests = ActiveValue::Set(param.guests);

        let updated = active_model.update(self.db).await?;

        Ok(Some(Booking::from_entity(updated)))
    }

    /// Marks a visible booking as deleted.
    ///
    /// # Returns
    /// - `Ok(true)` - Booking was soft-deleted
    /// - `Ok(false)` - No visible booking with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::IsDeleted.eq(false))
            .col_expr(
                entity::booking::Column::IsDeleted,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
