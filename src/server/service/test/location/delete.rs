use super::*;

/// Tests deleting a location that rooms still reference.
///
/// Expected: Err(AppError::Conflict), location kept
#[tokio::test]
async fn rejects_location_with_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, _) = factory::helpers::create_room_with_location(db).await?;

    let service = LocationService::new(db);
    let result = service.delete(location.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert!(service.get_by_id(location.id).await.is_ok());

    Ok(())
}

/// Tests deleting an unused location and then deleting it again.
///
/// Expected: Ok, then Err(AppError::NotFound)
#[tokio::test]
async fn deletes_unused_location() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::location::create_location(db).await?;

    let service = LocationService::new(db);
    service.delete(location.id).await?;

    let again = service.delete(location.id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a location whose only room is soft-deleted.
///
/// Expected: Err(AppError::Conflict), the deleted room row still references it
#[tokio::test]
async fn soft_deleted_room_blocks_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::location::create_location(db).await?;
    factory::room::RoomFactory::new(db, location.id)
        .deleted(true)
        .build()
        .await?;

    let result = LocationService::new(db).delete(location.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
