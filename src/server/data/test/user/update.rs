use super::*;

/// Tests that only supplied fields change.
///
/// Expected: name and role updated, email and hash untouched
#[tokio::test]
async fn updates_supplied_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateUserParam {
                name: Some("Renamed".to_string()),
                role: Some(Role::Admin),
                ..Default::default()
            },
            None,
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.role, Role::Admin);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.password_hash, created.password);

    Ok(())
}

/// Tests that a soft-deleted user cannot be updated.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_deleted_user() -> Result<(), DbErr> {
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
    let result = repo
        .update(deleted.id, UpdateUserParam::default(), Some("hash".to_string()))
        .await?;

    assert!(result.is_none());

    Ok(())
}
