use super::*;

/// Tests partial update including moving the room to another location.
///
/// Expected: price and location changed, name kept
#[tokio::test]
async fn updates_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, room) = factory::helpers::create_room_with_location(db).await?;
    let target = factory::location::create_location(db).await?;

    let repo = RoomRepository::new(db);
    let updated = repo
        .update(
            room.id,
            UpdateRoomParam {
                price: Some(99),
                location_id: Some(target.id),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 99);
    assert_eq!(updated.location_id, target.id);
    assert_eq!(updated.name, room.name);

    Ok(())
}

/// Tests that deleted rooms cannot be updated or given an image.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_deleted_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::location::create_location(db).await?;
    let room = factory::room::RoomFactory::new(db, location.id)
        .deleted(true)
        .build()
        .await?;

    let repo = RoomRepository::new(db);

    assert!(repo.update(room.id, UpdateRoomParam::default()).await?.is_none());
    assert!(repo.set_image(room.id, "x".to_string()).await?.is_none());

    Ok(())
}
