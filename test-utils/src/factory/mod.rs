//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let (location, room) = factory::helpers::create_room_with_location(&db).await?;
//! let booking = factory::booking::create_booking(&db, room.id, user.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .admin(true)
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod comment;
pub mod helpers;
pub mod location;
pub mod room;
pub mod user;

pub use booking::create_booking;
pub use comment::create_comment;
pub use location::create_location;
pub use room::create_room;
pub use user::create_user;
