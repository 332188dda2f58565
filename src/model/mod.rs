//! API data transfer objects.
//!
//! Request and response shapes exchanged over HTTP. These types carry serde,
//! OpenAPI schema and validation derives but no business logic; the server
//! converts them to and from domain models at the controller boundary.

pub mod api;
pub mod auth;
pub mod booking;
pub mod comment;
pub mod location;
pub mod pagination;
pub mod room;
pub mod upload;
pub mod user;
