//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Token service with the JWT signing keys
//! - Directory uploaded images are written to

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::server::service::token::TokenService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `TokenService` keeps its keys behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies access and refresh tokens.
    pub tokens: TokenService,

    /// Root of the statically served `/public` directory.
    pub public_dir: PathBuf,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service built from configuration
    /// - `public_dir` - Directory uploads are stored in
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenService, public_dir: PathBuf) -> Self {
        Self {
            db,
            tokens,
            public_dir,
        }
    }
}
