use super::*;

/// Tests deleting an existing and a missing location.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Location)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::location::create_location(db).await?;

    let repo = LocationRepository::new(db);

    assert!(repo.delete(location.id).await?);
    assert!(!repo.delete(location.id).await?);
    assert!(repo.find_by_id(location.id).await?.is_none());

    Ok(())
}
