use super::*;

/// Tests keyword matching across paginated and plain search.
///
/// Expected: only names containing the keyword
#[tokio::test]
async fn filters_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Location)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::location::LocationFactory::new(db)
        .name("Ben Thanh")
        .build()
        .await?;
    factory::location::LocationFactory::new(db)
        .name("Ho Tay")
        .build()
        .await?;
    factory::location::LocationFactory::new(db)
        .name("Ben Nghe")
        .build()
        .await?;

    let repo = LocationRepository::new(db);

    let page = repo.get_paginated("Ben", PageRequest::new(1, 1)).await?;
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_items, 2);
    assert_eq!(page.total_pages, 2);

    let searched = repo.search_by_name("Tay").await?;
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].name, "Ho Tay");

    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}
