//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard` where the route is protected,
//! validates the request DTO, calls the matching service and converts the domain
//! result back into a DTO. Every handler carries a `#[utoipa::path]` annotation
//! and is registered in `router` through `utoipa_axum::routes!`.

pub mod auth;
pub mod booking;
pub mod comment;
pub mod location;
pub mod param;
pub mod room;
pub mod user;
