use super::*;

/// Tests content search in pagination and plain search.
///
/// Expected: only comments containing the keyword
#[tokio::test]
async fn filters_by_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (_, room) = factory::helpers::create_room_with_location(db).await?;

    factory::comment::CommentFactory::new(db, room.id, user.id)
        .content("Clean and quiet")
        .build()
        .await?;
    factory::comment::CommentFactory::new(db, room.id, user.id)
        .content("Very clean bathroom")
        .build()
        .await?;
    factory::comment::CommentFactory::new(db, room.id, user.id)
        .content("Too far from the center")
        .build()
        .await?;

    let repo = CommentRepository::new(db);

    let page = repo.get_paginated("lean", PageRequest::new(1, 10)).await?;
    assert_eq!(page.total_items, 2);
    assert_eq!(page.total_pages, 1);

    let searched = repo.search_by_content("center").await?;
    assert_eq!(searched.len(), 1);

    Ok(())
}
