//! SeaORM entities for the booking platform schema.

pub mod prelude;

pub mod booking;
pub mod comment;
pub mod location;
pub mod room;
pub mod sea_orm_active_enums;
pub mod user;
