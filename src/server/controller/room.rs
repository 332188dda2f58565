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
        pagination::PageDto,
        room::{CreateRoomDto, RoomDto, UpdateRoomDto},
        upload::UploadImageDto,
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::room::{CreateRoomParam, Room, UpdateRoomParam},
        service::room::RoomService,
        state::AppState,
        util::multipart::read_image,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// List all visible rooms.
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "All rooms that are not deleted", body = Vec<RoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(to_dtos(rooms))))
}

/// Create a room.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new room
/// - `400 Bad Request` - Invalid body or unknown location
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 400, description = "Invalid body or unknown location", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn create_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let room = RoomService::new(&state.db)
        .create(CreateRoomParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

/// List the visible rooms of a location.
#[utoipa::path(
    get,
    path = "/api/rooms/by-location/{location_id}",
    tag = ROOM_TAG,
    params(("location_id" = i32, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Rooms of the location", body = Vec<RoomDto>),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms_by_location(
    State(state): State<AppState>,
    Path(location_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db)
        .get_by_location(location_id)
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(rooms))))
}

/// Paginate rooms, filtering by a substring of the name.
#[utoipa::path(
    get,
    path = "/api/rooms/pagination",
    tag = ROOM_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "One page of rooms", body = PageDto<RoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms_paginated(
    State(state): State<AppState>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = RoomService::new(&state.db)
        .get_paginated(&params.keyword, params.page_request())
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Room::into_dto))))
}

/// Get a room by id.
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "The room", body = RoomDto),
        (status = 404, description = "Room not found or deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Update a room.
///
/// A new location id is checked before the room is saved.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    patch,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Updated room", body = RoomDto),
        (status = 400, description = "Invalid body or unknown location", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn update_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;
    payload.validate()?;

    let room = RoomService::new(&state.db)
        .update(id, UpdateRoomParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Soft-delete a room.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn delete_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    RoomService::new(&state.db).delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Room {} deleted", id),
        }),
    ))
}

/// Upload the image of a room.
///
/// Accepts a multipart body with a `file` field of at most 2 MiB.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/rooms/{id}/upload-image",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    request_body(content = UploadImageDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Room with its new image path", body = RoomDto),
        (status = 400, description = "Missing, empty, oversized or unsupported file", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn upload_room_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let upload = read_image(multipart).await?;
    let room = RoomService::new(&state.db)
        .upload_image(id, &state.public_dir, upload)
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

fn to_dtos(rooms: Vec<Room>) -> Vec<RoomDto> {
    rooms.into_iter().map(Room::into_dto).collect()
}
