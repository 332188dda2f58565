use super::*;

/// Tests moving a room to another existing location.
///
/// Expected: Ok(Room) with the new location, other fields untouched
#[tokio::test]
async fn moves_room_to_existing_location() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_location(db).await?;
    let other = factory::location::create_location(db).await?;

    let updated = RoomService::new(db)
        .update(
            room.id,
            UpdateRoomParam {
                location_id: Some(other.id),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.location_id, other.id);
    assert_eq!(updated.name, room.name);

    Ok(())
}

/// Tests moving a room to a location that does not exist.
///
/// Expected: Err(AppError::BadRequest), room keeps its location
#[tokio::test]
async fn rejects_unknown_new_location() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, room) = factory::helpers::create_room_with_location(db).await?;

    let service = RoomService::new(db);
    let result = service
        .update(
            room.id,
            UpdateRoomParam {
                location_id: Some(9999),
                price: Some(1),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let stored = service.get_by_id(room.id).await?;
    assert_eq!(stored.location_id, location.id);
    assert_eq!(stored.price, room.price);

    Ok(())
}

/// Tests updating a soft-deleted room.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn deleted_room_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_location(db).await?;
    let service = RoomService::new(db);
    service.delete(room.id).await?;

    let result = service
        .update(
            room.id,
            UpdateRoomParam {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
