use super::*;

/// Tests renaming a location onto another location's name and province.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_rename_onto_existing_pair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::location::LocationFactory::new(db)
        .name("Old Town")
        .province("Hoi An")
        .build()
        .await?;
    let other = factory::location::LocationFactory::new(db)
        .name("New Town")
        .province("Hoi An")
        .build()
        .await?;

    let result = LocationService::new(db)
        .update(
            other.id,
            UpdateLocationParam {
                name: Some("Old Town".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests updating a location while keeping its own name and province.
///
/// Expected: Ok, the location does not conflict with itself
#[tokio::test]
async fn allows_unchanged_pair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::location::create_location(db).await?;

    let updated = LocationService::new(db)
        .update(
            location.id,
            UpdateLocationParam {
                name: Some(location.name.clone()),
                country: Some("Laos".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.country, "Laos");

    Ok(())
}

/// Tests updating a missing location.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LocationService::new(db)
        .update(404, UpdateLocationParam::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
