use super::*;

/// Tests changing the email to one used by another account.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_email_of_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let result = UserService::new(db)
        .update(
            user.id,
            UpdateUserParam {
                email: Some(other.email.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests resubmitting the current email together with a new password.
///
/// Expected: Ok, password re-hashed
#[tokio::test]
async fn keeps_own_email_and_rehashes_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let updated = UserService::new(db)
        .update(
            user.id,
            UpdateUserParam {
                email: Some(user.email.clone()),
                password: Some("brand-new-pass".to_string()),
                ..Default::default()
            },
        )
        .await?;

    let hash = updated.password_hash.unwrap();
    assert!(bcrypt::verify("brand-new-pass", &hash).unwrap());

    Ok(())
}

/// Tests updating and deleting a soft-deleted user.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn deleted_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db).deleted(true).build().await?;
    let service = UserService::new(db);

    let update = service.update(user.id, UpdateUserParam::default()).await;
    assert!(matches!(update, Err(AppError::NotFound(_))));

    let delete = service.delete(user.id).await;
    assert!(matches!(delete, Err(AppError::NotFound(_))));

    Ok(())
}
