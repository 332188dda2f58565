use super::*;

/// Tests finding a visible user.
///
/// Expected: Ok(Some)
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().email, created.email);

    Ok(())
}

/// Tests that soft-deleted users are hidden from id lookups but not email lookups.
///
/// Expected: find_by_id Ok(None), find_by_email Ok(Some)
#[tokio::test]
async fn hides_soft_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = factory::user::UserFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(deleted.id).await?.is_none());
    let by_email = repo.find_by_email(&deleted.email).await?;
    assert!(by_email.is_some_and(|u| u.is_deleted));

    Ok(())
}

/// Tests looking up an id that was never created.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());

    Ok(())
}
