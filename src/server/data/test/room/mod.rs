use crate::server::{
    data::room::RoomRepository,
    model::{
        pagination::PageRequest,
        room::{Amenities, CreateRoomParam, UpdateRoomParam},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_location;
mod create;
mod update;
