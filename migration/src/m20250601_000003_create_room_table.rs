use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_location_table::Location;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(string(Room::Name))
                    .col(integer(Room::LocationId))
                    .col(integer(Room::Price))
                    .col(integer(Room::Guests))
                    .col(integer(Room::Bedrooms))
                    .col(integer(Room::Beds))
                    .col(integer(Room::Bathrooms))
                    .col(text(Room::Description))
                    .col(boolean(Room::Washer).default(false))
                    .col(boolean(Room::Iron).default(false))
                    .col(boolean(Room::Tv).default(false))
                    .col(boolean(Room::AirConditioner).default(false))
                    .col(boolean(Room::Wifi).default(false))
                    .col(boolean(Room::Kitchen).default(false))
                    .col(boolean(Room::Parking).default(false))
                    .col(boolean(Room::Pool).default(false))
                    .col(string_null(Room::Image))
                    .col(boolean(Room::IsDeleted).default(false))
                    .col(
                        timestamp_with_time_zone(Room::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_location_id")
                            .from(Room::Table, Room::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    Name,
    LocationId,
    Price,
    Guests,
    Bedrooms,
    Beds,
    Bathrooms,
    Description,
    Washer,
    Iron,
    Tv,
    AirConditioner,
    Wifi,
    Kitchen,
    Parking,
    Pool,
    Image,
    IsDeleted,
    CreatedAt,
}
