use axum::{
    extract::{Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        location::{CreateLocationDto, LocationDto, UpdateLocationDto},
        pagination::PageDto,
        upload::UploadImageDto,
    },
    server::{
        controller::param::{PaginationParam, SearchParam},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::location::{CreateLocationParam, Location, UpdateLocationParam},
        service::location::LocationService,
        state::AppState,
        util::multipart::read_image,
    },
};

/// Tag for grouping location endpoints in OpenAPI documentation
pub static LOCATION_TAG: &str = "location";

/// List all locations.
#[utoipa::path(
    get,
    path = "/api/locations",
    tag = LOCATION_TAG,
    responses(
        (status = 200, description = "All locations", body = Vec<LocationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locations(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let locations = LocationService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(to_dtos(locations))))
}

/// Create a location.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new location
/// - `409 Conflict` - A location with the same name and province exists
#[utoipa::path(
    post,
    path = "/api/locations",
    tag = LOCATION_TAG,
    request_body = CreateLocationDto,
    responses(
        (status = 201, description = "Location created", body = LocationDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 409, description = "Duplicate name and province", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn create_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let location = LocationService::new(&state.db)
        .create(CreateLocationParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(location.into_dto())))
}

/// Paginate locations, filtering by a substring of the name.
#[utoipa::path(
    get,
    path = "/api/locations/pagination",
    tag = LOCATION_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "One page of locations", body = PageDto<LocationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locations_paginated(
    State(state): State<AppState>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = LocationService::new(&state.db)
        .get_paginated(&params.keyword, params.page_request())
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Location::into_dto))))
}

/// Search locations by name.
#[utoipa::path(
    get,
    path = "/api/locations/search",
    tag = LOCATION_TAG,
    params(SearchParam),
    responses(
        (status = 200, description = "Matching locations, empty for a blank keyword", body = Vec<LocationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_locations(
    State(state): State<AppState>,
    Query(params): Query<SearchParam>,
) -> Result<impl IntoResponse, AppError> {
    let locations = LocationService::new(&state.db)
        .search(&params.keyword)
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(locations))))
}

/// Get a location by id.
#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 200, description = "The location", body = LocationDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_location_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let location = LocationService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Update a location.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    request_body = UpdateLocationDto,
    responses(
        (status = 200, description = "Updated location", body = LocationDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 409, description = "Duplicate name and province", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn update_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let location = LocationService::new(&state.db)
        .update(id, UpdateLocationParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

/// Delete a location.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `409 Conflict` - Rooms still reference the location
#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Location deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 409, description = "Location still has rooms", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn delete_location(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    LocationService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Location {} deleted", id),
        }),
    ))
}

/// Upload the image of a location.
///
/// Accepts a multipart body with a `file` field of at most 5 MiB.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/locations/{id}/upload-image",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Location ID")),
    request_body(content = UploadImageDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Location with its new image path", body = LocationDto),
        (status = 400, description = "Missing, empty, oversized or unsupported file", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn upload_location_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let upload = read_image(multipart).await?;
    let location = LocationService::new(&state.db)
        .upload_image(id, &state.public_dir, upload)
        .await?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}

fn to_dtos(locations: Vec<Location>) -> Vec<LocationDto> {
    locations.into_iter().map(Location::into_dto).collect()
}
