use super::*;

/// Tests that pagination searches the province of the booked room's location.
///
/// Expected: only the booking in the matching province
#[tokio::test]
async fn filters_by_location_province() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let hanoi = factory::location::LocationFactory::new(db)
        .province("Hanoi")
        .build()
        .await?;
    let hue = factory::location::LocationFactory::new(db)
        .province("Hue")
        .build()
        .await?;
    let hanoi_room = factory::room::create_room(db, hanoi.id).await?;
    let hue_room = factory::room::create_room(db, hue.id).await?;

    let hanoi_booking = factory::booking::create_booking(db, hanoi_room.id, user.id).await?;
    factory::booking::create_booking(db, hue_room.id, user.id).await?;

    let repo = BookingRepository::new(db);

    let page = repo.get_paginated("Hanoi", PageRequest::default()).await?;
    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].id, hanoi_booking.id);

    let everything = repo.get_paginated("", PageRequest::new(1, 1)).await?;
    assert_eq!(everything.total_items, 2);
    assert_eq!(everything.total_pages, 2);
    assert_eq!(everything.items.len(), 1);

    Ok(())
}
