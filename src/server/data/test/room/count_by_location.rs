use super::*;

/// Tests that soft-deleted rooms still count as references.
///
/// Expected: 2 for the used location, 0 for an empty one
#[tokio::test]
async fn counts_deleted_rooms_too() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, _) = factory::helpers::create_room_with_location(db).await?;
    factory::room::RoomFactory::new(db, location.id)
        .deleted(true)
        .build()
        .await?;
    let empty = factory::location::create_location(db).await?;

    let repo = RoomRepository::new(db);

    assert_eq!(repo.count_by_location(location.id).await?, 2);
    assert_eq!(repo.count_by_location(empty.id).await?, 0);

    Ok(())
}
