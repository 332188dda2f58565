use super::*;

/// Tests listing rooms of a location that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_location_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoomService::new(db).get_by_location(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that only visible rooms of the location are listed.
///
/// Expected: the visible room only
#[tokio::test]
async fn lists_visible_rooms_of_location() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, room) = factory::helpers::create_room_with_location(db).await?;
    factory::room::RoomFactory::new(db, location.id)
        .deleted(true)
        .build()
        .await?;
    factory::helpers::create_room_with_location(db).await?;

    let rooms = RoomService::new(db).get_by_location(location.id).await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, room.id);

    Ok(())
}
