use super::*;

/// Tests creating a room with amenities.
///
/// Expected: amenities stored and read back, image empty
#[tokio::test]
async fn creates_room_with_amenities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::location::create_location(db).await?;

    let repo = RoomRepository::new(db);
    let room = repo
        .create(CreateRoomParam {
            name: "Sea view".to_string(),
            location_id: location.id,
            price: 120,
            guests: 4,
            bedrooms: 2,
            beds: 2,
            bathrooms: 1,
            description: "Balcony facing the beach".to_string(),
            amenities: Amenities {
                wifi: true,
                pool: true,
                ..Default::default()
            },
        })
        .await?;

    assert_eq!(room.location_id, location.id);
    assert!(room.amenities.wifi && room.amenities.pool);
    assert!(!room.amenities.washer);
    assert!(room.image.is_none());

    let found = repo.find_by_id(room.id).await?;
    assert_eq!(found, Some(room));

    Ok(())
}
