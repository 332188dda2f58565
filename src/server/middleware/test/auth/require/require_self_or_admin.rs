use super::*;

/// Tests that users pass the ownership check for their own resources.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let user = factory::user::create_user(db).await?;
    let headers = bearer(&tokens.issue_pair(user.id, Role::User)?.access_token);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::SelfOrAdmin(user.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests access to another user's resource.
///
/// Expected: AccessDenied for a regular user, Ok for an admin
#[tokio::test]
async fn only_admin_may_access_others() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let stranger_headers = bearer(&tokens.issue_pair(stranger.id, Role::User)?.access_token);
    let denied = AuthGuard::new(db, &tokens, &stranger_headers)
        .require(&[Permission::SelfOrAdmin(owner.id)])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let admin_headers = bearer(&tokens.issue_pair(admin.id, Role::Admin)?.access_token);
    let allowed = AuthGuard::new(db, &tokens, &admin_headers)
        .require(&[Permission::SelfOrAdmin(owner.id)])
        .await?;
    assert_eq!(allowed.id, admin.id);

    Ok(())
}
