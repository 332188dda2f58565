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
        booking::{BookingDto, CreateBookingDto, UpdateBookingDto},
        pagination::PageDto,
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{authorize, AuthGuard, Permission},
        model::booking::{Booking, CreateBookingParam, UpdateBookingParam},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// List all visible bookings, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "All bookings that are not deleted", body = Vec<BookingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let bookings = BookingService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(to_dtos(bookings))))
}

/// Book a room.
///
/// The booking is made for the authenticated user. Admins may pass `user_id`
/// to book on behalf of someone else.
///
/// # Access Control
/// - Any authenticated user
/// - `SelfOrAdmin(user_id)` when `user_id` is given
///
/// # Returns
/// - `201 Created` - The new booking
/// - `400 Bad Request` - Unknown room or user, bad dates or too many guests
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Booking for another user requires admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    payload.validate()?;

    if let Some(guest_id) = payload.user_id {
        authorize(&user, &[Permission::SelfOrAdmin(guest_id)])?;
    }

    let booking = BookingService::new(&state.db)
        .create(CreateBookingParam::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Paginate bookings, filtering by a substring of the booked room's province.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/bookings/pagination",
    tag = BOOKING_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "One page of bookings", body = PageDto<BookingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn get_bookings_paginated(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let page = BookingService::new(&state.db)
        .get_paginated(&params.keyword, params.page_request())
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Booking::into_dto))))
}

/// List the bookings of a user.
///
/// # Access Control
/// - `SelfOrAdmin(user_id)`
#[utoipa::path(
    get,
    path = "/api/bookings/by-user/{user_id}",
    tag = BOOKING_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Bookings of the user", body = Vec<BookingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the user and not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn get_bookings_by_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SelfOrAdmin(user_id)])
        .await?;

    let bookings = BookingService::new(&state.db).get_by_user(user_id).await?;

    Ok((StatusCode::OK, Json(to_dtos(bookings))))
}

/// Get a booking by id.
///
/// # Access Control
/// - `SelfOrAdmin(booking.user_id)`
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner and not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found or deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn get_booking_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let booking = BookingService::new(&state.db).get_by_id(id).await?;
    authorize(&user, &[Permission::SelfOrAdmin(booking.user_id)])?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Update a booking.
///
/// Room existence, dates and guest capacity are checked again.
///
/// # Access Control
/// - `SelfOrAdmin(booking.user_id)`
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Updated booking", body = BookingDto),
        (status = 400, description = "Invalid booking", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner and not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found or deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn update_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    payload.validate()?;

    let service = BookingService::new(&state.db);
    let existing = service.get_by_id(id).await?;
    authorize(&user, &[Permission::SelfOrAdmin(existing.user_id)])?;

    let booking = service
        .update(id, UpdateBookingParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Soft-delete a booking.
///
/// # Access Control
/// - `SelfOrAdmin(booking.user_id)`
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner and not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found or deleted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = BookingService::new(&state.db);
    let existing = service.get_by_id(id).await?;
    authorize(&user, &[Permission::SelfOrAdmin(existing.user_id)])?;

    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Booking {} deleted", id),
        }),
    ))
}

fn to_dtos(bookings: Vec<Booking>) -> Vec<BookingDto> {
    bookings.into_iter().map(Booking::into_dto).collect()
}
