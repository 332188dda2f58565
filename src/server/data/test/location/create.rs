use super::*;

/// Tests creating a location and finding it by name and province.
///
/// Expected: lookup matches only the exact (name, province) pair
#[tokio::test]
async fn creates_and_finds_by_name_and_province() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Location)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LocationRepository::new(db);
    let created = repo
        .create(CreateLocationParam {
            name: "Old Quarter".to_string(),
            province: "Hanoi".to_string(),
            country: "Vietnam".to_string(),
        })
        .await?;

    assert!(created.image.is_none());

    let found = repo.find_by_name_and_province("Old Quarter", "Hanoi").await?;
    assert_eq!(found.map(|l| l.id), Some(created.id));

    let other_province = repo
        .find_by_name_and_province("Old Quarter", "Da Nang")
        .await?;
    assert!(other_province.is_none());

    Ok(())
}
