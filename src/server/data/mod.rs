//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. Paginated queries
//! count and fetch inside one transaction so totals match the returned page.

pub mod booking;
pub mod comment;
pub mod location;
pub mod room;
pub mod user;

#[cfg(test)]
mod test;
