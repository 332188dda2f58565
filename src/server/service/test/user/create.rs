use super::*;

/// Tests that admins can create users with a chosen role.
///
/// Expected: Ok(User) with role `admin` and a hashed password
#[tokio::test]
async fn creates_user_with_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserService::new(db)
        .create(CreateUserParam {
            name: "Lan".to_string(),
            email: "lan@example.com".to_string(),
            password: Some("secret-pass".to_string()),
            phone: None,
            birthday: None,
            gender: None,
            role: Role::Admin,
        })
        .await?;

    assert_eq!(user.role, Role::Admin);
    assert!(user.password_hash.is_some_and(|h| h != "secret-pass"));

    Ok(())
}

/// Tests that blank name searches return nothing.
///
/// Expected: empty result
#[tokio::test]
async fn blank_search_returns_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let service = UserService::new(db);

    assert!(service.search("").await?.is_empty());
    assert_eq!(service.search("User").await?.len(), 1);

    Ok(())
}
