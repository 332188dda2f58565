use super::*;

/// Tests ordering and soft-delete exclusion of booking listings.
///
/// Expected: newest first, deleted booking absent
#[tokio::test]
async fn lists_newest_first_without_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, room) = factory::helpers::create_room_with_location(db).await?;
    let now = Utc::now();

    let older = factory::booking::BookingFactory::new(db, room.id, user.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::booking::BookingFactory::new(db, room.id, user.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, room.id, user.id)
        .deleted(true)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let all = repo.get_all().await?;

    assert_eq!(all.iter().map(|b| b.id).collect::<Vec<_>>(), vec![newer.id, older.id]);

    let by_user = repo.get_by_user(user.id).await?;
    assert_eq!(by_user.len(), 2);

    Ok(())
}

/// Tests soft-deleting a booking.
///
/// Expected: hidden from lookups afterwards
#[tokio::test]
async fn soft_delete_hides_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);

    assert!(repo.soft_delete(booking.id).await?);
    assert!(repo.find_by_id(booking.id).await?.is_none());
    assert!(!repo.soft_delete(booking.id).await?);

    Ok(())
}
