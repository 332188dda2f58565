//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Uniqueness rules, existence checks and booking invariants
//! - **Orchestration**: Coordinating multiple repository calls and file storage
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod booking;
pub mod comment;
pub mod location;
pub mod room;
pub mod token;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;
