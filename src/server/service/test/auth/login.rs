use super::*;
use test_utils::factory::user::DEFAULT_PASSWORD;

fn login(email: &str, password: &str) -> LoginParam {
    LoginParam {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Tests a successful login.
///
/// Expected: tokens whose subject is the user
#[tokio::test]
async fn issues_tokens_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let user = factory::user::create_user(db).await?;

    let result = AuthService::new(db, &tokens)
        .login(login(&user.email, DEFAULT_PASSWORD))
        .await?;

    assert_eq!(result.user.id, user.id);
    let claims = tokens.verify_access(&result.tokens.access_token)?;
    assert_eq!(claims.user_id()?, user.id);
    assert_eq!(claims.role, "user");

    Ok(())
}

/// Tests that wrong password, unknown email and deleted account fail alike.
///
/// Expected: Err(AuthError::InvalidCredentials) for each
#[tokio::test]
async fn rejects_invalid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let user = factory::user::create_user(db).await?;
    let deleted = factory::user::UserFactory::new(db)
        .deleted(true)
        .build()
        .await?;

    let service = AuthService::new(db, &tokens);

    for attempt in [
        login(&user.email, "wrong-password"),
        login("nobody@example.com", DEFAULT_PASSWORD),
        login(&deleted.email, DEFAULT_PASSWORD),
    ] {
        let result = service.login(attempt).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    Ok(())
}

/// Tests logging into an account without a password.
///
/// Expected: Err(AuthError::PasswordNotSet)
#[tokio::test]
async fn rejects_account_without_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let user = factory::user::UserFactory::new(db)
        .password(None)
        .build()
        .await?;

    let result = AuthService::new(db, &tokens)
        .login(login(&user.email, DEFAULT_PASSWORD))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PasswordNotSet(id))) if id == user.id
    ));

    Ok(())
}
