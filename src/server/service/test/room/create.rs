use super::*;

/// Tests creating a room in an existing location.
///
/// Expected: Ok(Room) with the submitted amenities
#[tokio::test]
async fn creates_room_in_existing_location() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::location::create_location(db).await?;

    let room = RoomService::new(db).create(param(location.id)).await?;

    assert_eq!(room.location_id, location.id);
    assert!(room.amenities.wifi);
    assert!(!room.amenities.pool);
    assert!(room.image.is_none());

    Ok(())
}

/// Tests creating a room in a location that does not exist.
///
/// Expected: Err(AppError::BadRequest), no room stored
#[tokio::test]
async fn rejects_unknown_location() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = RoomService::new(db);
    let result = service.create(param(9999)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_all().await?.is_empty());

    Ok(())
}
