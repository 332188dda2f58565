use super::*;

/// Tests replacing dates, room and guests of a booking.
///
/// Expected: all supplied values stored, owner unchanged
#[tokio::test]
async fn replaces_booking_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, location, _, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let other_room = factory::room::create_room(db, location.id).await?;
    let check_in = Utc::now() + Duration::days(10);

    let repo = BookingRepository::new(db);
    let updated = repo
        .update(
            booking.id,
            UpdateBookingParam {
                room_id: other_room.id,
                check_in,
                check_out: check_in + Duration::days(1),
                guests: 2,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.room_id, other_room.id);
    assert_eq!(updated.user_id, user.id);
    assert_eq!(updated.guests, 2);
    assert_eq!(updated.check_out - updated.check_in, Duration::days(1));

    Ok(())
}
