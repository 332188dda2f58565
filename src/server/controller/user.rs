use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        pagination::PageDto,
        user::{CreateUserDto, RoleDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::param::{PaginationParam, SearchParam},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{CreateUserParam, UpdateUserParam, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user administration endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All visible users", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(to_dtos(users))))
}

/// Create a user with a chosen role.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new user
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let user = UserService::new(&state.db)
        .create(CreateUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Paginate users, filtering by a substring of the name.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/users/pagination",
    tag = USER_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "One page of users", body = PageDto<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn get_users_paginated(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let page = UserService::new(&state.db)
        .get_paginated(&params.keyword, params.page_request())
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(User::into_dto))))
}

/// Search users by name.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/users/search",
    tag = USER_TAG,
    params(SearchParam),
    responses(
        (status = 200, description = "Matching users, empty for a blank keyword", body = Vec<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn search_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParam>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).search(&params.keyword).await?;

    Ok((StatusCode::OK, Json(to_dtos(users))))
}

/// List the roles a user can hold.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/users/roles",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Available roles", body = Vec<RoleDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn get_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let roles: Vec<RoleDto> = UserService::new(&state.db)
        .roles()
        .into_iter()
        .map(RoleDto::from)
        .collect();

    Ok((StatusCode::OK, Json(roles)))
}

/// Get a user by id.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `404 Not Found` - User missing or deleted
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user.
///
/// Email uniqueness is re-checked when the email changes and a supplied
/// password is re-hashed.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let user = UserService::new(&state.db)
        .update(id, UpdateUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Soft-delete a user.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("User {} deleted", id),
        }),
    ))
}

fn to_dtos(users: Vec<User>) -> Vec<UserDto> {
    users.into_iter().map(User::into_dto).collect()
}
