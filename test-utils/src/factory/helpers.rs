//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a location and a room inside it.
///
/// # Returns
/// - `Ok((location, room))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_location(
    db: &DatabaseConnection,
) -> Result<(entity::location::Model, entity::room::Model), DbErr> {
    let location = crate::factory::location::create_location(db).await?;
    let room = crate::factory::room::create_room(db, location.id).await?;

    Ok((location, room))
}

/// Creates a complete booking hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as guest)
/// 2. Location
/// 3. Room
/// 4. Booking
///
/// # Returns
/// - `Ok((user, location, room, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::location::Model,
        entity::room::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (location, room) = create_room_with_location(db).await?;
    let booking = crate::factory::booking::create_booking(db, room.id, user.id).await?;

    Ok((user, location, room, booking))
}
