use super::*;

/// Tests page boundaries and totals.
///
/// Creates 5 users and requests pages of 2.
///
/// Expected: 3 pages, last page holding a single user
#[tokio::test]
async fn splits_users_into_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::user::create_user(db).await?;
    }

    let repo = UserRepository::new(db);

    let first = repo.get_paginated("", PageRequest::new(1, 2)).await?;
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.total_items, 5);
    assert_eq!(first.total_pages, 3);

    let last = repo.get_paginated("", PageRequest::new(3, 2)).await?;
    assert_eq!(last.items.len(), 1);
    assert_eq!(last.page, 3);

    let beyond = repo.get_paginated("", PageRequest::new(4, 2)).await?;
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total_items, 5);

    Ok(())
}

/// Tests keyword filtering and soft-delete exclusion.
///
/// Expected: only visible users whose name contains the keyword
#[tokio::test]
async fn filters_by_name_and_hides_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Nguyen An").build().await?;
    factory::user::UserFactory::new(db).name("Tran Binh").build().await?;
    factory::user::UserFactory::new(db)
        .name("Nguyen Deleted")
        .deleted(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let page = repo.get_paginated("Nguyen", PageRequest::default()).await?;

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].name, "Nguyen An");

    let searched = repo.search_by_name("Binh").await?;
    assert_eq!(searched.len(), 1);

    Ok(())
}
