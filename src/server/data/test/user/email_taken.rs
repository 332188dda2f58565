use super::*;

/// Tests email collision detection with and without an excluded id.
///
/// Expected: taken for others, free for the owner and unknown emails
#[tokio::test]
async fn detects_email_used_by_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_taken("taken@example.com", None).await?);
    assert!(repo.email_taken("taken@example.com", Some(user.id + 1)).await?);
    assert!(!repo.email_taken("taken@example.com", Some(user.id)).await?);
    assert!(!repo.email_taken("free@example.com", None).await?);

    Ok(())
}

/// Tests that a soft-deleted account still holds its email.
///
/// Expected: Ok(true)
#[tokio::test]
async fn counts_soft_deleted_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("gone@example.com")
        .deleted(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_taken("gone@example.com", None).await?);

    Ok(())
}
