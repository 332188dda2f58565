use super::*;

/// Tests refreshing with an expired access token and a valid refresh token.
///
/// Expected: Ok with a new access token that verifies
#[tokio::test]
async fn accepts_expired_access_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let user = factory::user::create_user(db).await?;
    let expired_access = tokens.encode(
        TokenType::Access,
        user.id,
        Role::User,
        Utc::now() - Duration::hours(2),
    )?;
    let refresh = tokens.encode(TokenType::Refresh, user.id, Role::User, Utc::now())?;

    let pair = AuthService::new(db, &tokens)
        .refresh(Some(&expired_access), Some(&refresh))
        .await?;

    assert_eq!(tokens.verify_access(&pair.access_token)?.user_id()?, user.id);

    Ok(())
}

/// Tests refreshing with an expired refresh token.
///
/// Expected: Err(AuthError::InvalidRefreshToken)
#[tokio::test]
async fn rejects_expired_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let user = factory::user::create_user(db).await?;
    let access = tokens.encode(TokenType::Access, user.id, Role::User, Utc::now())?;
    let expired_refresh = tokens.encode(
        TokenType::Refresh,
        user.id,
        Role::User,
        Utc::now() - Duration::days(8),
    )?;

    let result = AuthService::new(db, &tokens)
        .refresh(Some(&access), Some(&expired_refresh))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken(_)))
    ));

    Ok(())
}

/// Tests refreshing with tokens issued to different users.
///
/// Expected: Err(AuthError::TokenMismatch)
#[tokio::test]
async fn rejects_mismatched_subjects() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    let alice_pair = tokens.issue_pair(alice.id, Role::User)?;
    let bob_pair = tokens.issue_pair(bob.id, Role::User)?;

    let result = AuthService::new(db, &tokens)
        .refresh(Some(&alice_pair.access_token), Some(&bob_pair.refresh_token))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenMismatch(a, b))) if a == alice.id && b == bob.id
    ));

    Ok(())
}

/// Tests that refreshed tokens carry the role stored now, not the one in the old token.
///
/// Expected: new access token with role `admin`
#[tokio::test]
async fn uses_current_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let promoted = factory::user::UserFactory::new(db).admin(true).build().await?;
    let stale = tokens.issue_pair(promoted.id, Role::User)?;

    let pair = AuthService::new(db, &tokens)
        .refresh(Some(&stale.access_token), Some(&stale.refresh_token))
        .await?;

    assert_eq!(tokens.verify_access(&pair.access_token)?.role, "admin");

    Ok(())
}

/// Tests refresh for a user deleted after the tokens were issued.
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
    let pair = tokens.issue_pair(user.id, Role::User)?;

    let result = AuthService::new(db, &tokens)
        .refresh(Some(&pair.access_token), Some(&pair.refresh_token))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(_)))
    ));

    Ok(())
}

/// Tests refresh requests missing a token or swapping token kinds.
///
/// Expected: MissingToken, then InvalidRefreshToken for a swapped pair
#[tokio::test]
async fn rejects_missing_or_swapped_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let user = factory::user::create_user(db).await?;
    let pair = tokens.issue_pair(user.id, Role::User)?;
    let service = AuthService::new(db, &tokens);

    let missing = service.refresh(Some(&pair.access_token), None).await;
    assert!(matches!(
        missing,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    let blank = service.refresh(Some(" "), Some(&pair.refresh_token)).await;
    assert!(matches!(blank, Err(AppError::AuthErr(AuthError::MissingToken))));

    let swapped = service
        .refresh(Some(&pair.refresh_token), Some(&pair.access_token))
        .await;
    assert!(matches!(
        swapped,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken(_)))
    ));

    Ok(())
}
