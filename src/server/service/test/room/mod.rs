use crate::server::{
    error::AppError,
    model::room::{Amenities, CreateRoomParam, UpdateRoomParam},
    service::room::RoomService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_location;
mod update;

fn param(location_id: i32) -> CreateRoomParam {
    CreateRoomParam {
        name: "Garden Studio".to_string(),
        location_id,
        price: 45,
        guests: 2,
        bedrooms: 1,
        beds: 1,
        bathrooms: 1,
        description: "Quiet studio facing the garden".to_string(),
        amenities: Amenities {
            wifi: true,
            kitchen: true,
            ..Default::default()
        },
    }
}
