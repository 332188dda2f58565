use super::*;

/// Tests requests without an Authorization header or with another scheme.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let empty = HeaderMap::new();
    let result = AuthGuard::new(db, &tokens, &empty).require(&[]).await;
    assert!(matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))));

    let mut basic = HeaderMap::new();
    basic.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
    let result = AuthGuard::new(db, &tokens, &basic).require(&[]).await;
    assert!(matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))));

    Ok(())
}

/// Tests malformed tokens and refresh tokens used as access tokens.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_malformed_and_wrong_type_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let user = factory::user::create_user(db).await?;
    let pair = tokens.issue_pair(user.id, Role::User)?;

    for token in ["not-a-jwt", pair.refresh_token.as_str()] {
        let headers = bearer(token);
        let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken(_)))
        ));
    }

    Ok(())
}

/// Tests an expired access token.
///
/// Expected: Err(AuthError::TokenExpired)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let user = factory::user::create_user(db).await?;
    let expired = tokens.encode(
        TokenType::Access,
        user.id,
        Role::User,
        Utc::now() - Duration::hours(1),
    )?;
    let headers = bearer(&expired);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::TokenExpired))));

    Ok(())
}

/// Tests a valid token for a user that was soft-deleted afterwards.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let user = factory::user::UserFactory::new(db).deleted(true).build().await?;
    let headers = bearer(&tokens.issue_pair(user.id, Role::User)?.access_token);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(id))) if id == user.id
    ));

    Ok(())
}
