use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginResponseDto, RefreshTokenDto, RegisterDto, TokenPairDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::auth::{LoginParam, RegisterParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates a user with the `user` role. The password is stored as a bcrypt hash
/// and never returned.
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Invalid body
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthService::new(&state.db, &state.tokens)
        .register(RegisterParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Access and refresh tokens plus the user
/// - `400 Bad Request` - Unknown email, wrong password or passwordless account
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let result = AuthService::new(&state.db, &state.tokens)
        .login(LoginParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Exchange a token pair for a fresh one.
///
/// The access token may be expired but must carry a valid signature and belong
/// to the same user as the refresh token. The new tokens carry the user's
/// current role.
///
/// # Returns
/// - `200 OK` - New token pair
/// - `401 Unauthorized` - Missing, invalid, expired or mismatched tokens
#[utoipa::path(
    post,
    path = "/api/auth/refresh-token",
    tag = AUTH_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "Tokens refreshed", body = TokenPairDto),
        (status = 401, description = "Token pair rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.tokens)
        .refresh(
            payload.access_token.as_deref(),
            payload.refresh_token.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Get the currently authenticated user.
///
/// # Returns
/// - `200 OK` - The user owning the access token
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
