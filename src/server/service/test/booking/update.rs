use super::*;

/// Tests updating a booking to a room that cannot hold the guests.
///
/// Expected: Err(AppError::BadRequest), booking unchanged
#[tokio::test]
async fn rechecks_capacity_of_new_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, location, room, booking) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let single = factory::room::RoomFactory::new(db, location.id)
        .guests(1)
        .build()
        .await?;

    let service = BookingService::new(db);
    let result = service
        .update(
            booking.id,
            UpdateBookingParam {
                room_id: single.id,
                check_in: booking.check_in,
                check_out: booking.check_out,
                guests: 2,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get_by_id(booking.id).await?.room_id, room.id);

    Ok(())
}

/// Tests that deleted bookings can be neither read, updated nor deleted again.
///
/// Expected: Err(AppError::NotFound) for each
#[tokio::test]
async fn deleted_booking_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, room, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db);
    service.delete(booking.id).await?;

    assert!(matches!(
        service.get_by_id(booking.id).await,
        Err(AppError::NotFound(_))
    ));
    let update = service
        .update(
            booking.id,
            UpdateBookingParam {
                room_id: room.id,
                check_in: booking.check_in,
                check_out: booking.check_out,
                guests: 1,
            },
        )
        .await;
    assert!(matches!(update, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.delete(booking.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests updating a booking whose guest was soft-deleted afterwards.
///
/// Expected: Err(AppError::BadRequest), booking unchanged
#[tokio::test]
async fn rejects_update_when_guest_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, room, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    assert!(UserRepository::new(db).soft_delete(user.id).await?);

    let service = BookingService::new(db);
    let result = service
        .update(
            booking.id,
            UpdateBookingParam {
                room_id: room.id,
                check_in: booking.check_in,
                check_out: booking.check_out,
                guests: 2,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get_by_id(booking.id).await?.guests, booking.guests);

    Ok(())
}
