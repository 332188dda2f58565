use super::*;

/// Tests creating a location whose name already exists in the same province.
///
/// Expected: Err(AppError::Conflict), while the same name elsewhere succeeds
#[tokio::test]
async fn rejects_duplicate_name_in_province() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::location::LocationFactory::new(db)
        .name("Central")
        .province("Hanoi")
        .build()
        .await?;

    let service = LocationService::new(db);
    let param = |province: &str| CreateLocationParam {
        name: "Central".to_string(),
        province: province.to_string(),
        country: "Vietnam".to_string(),
    };

    let duplicate = service.create(param("Hanoi")).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let elsewhere = service.create(param("Hue")).await?;
    assert_eq!(elsewhere.province, "Hue");

    Ok(())
}

/// Tests that a blank search returns nothing while listings return everything.
///
/// Expected: empty search, full listing
#[tokio::test]
async fn blank_search_returns_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::location::create_location(db).await?;

    let service = LocationService::new(db);

    assert!(service.search("   ").await?.is_empty());
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}
