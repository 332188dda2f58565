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
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
        pagination::PageDto,
    },
    server::{
        controller::param::{PaginationParam, SearchParam},
        error::AppError,
        middleware::auth::{authorize, AuthGuard, Permission},
        model::comment::{Comment, CreateCommentParam, UpdateCommentParam},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

#[utoipa::path(
    get,
    path = "/api/comments",
    tag = COMMENT_TAG,
    responses(
        (status = 200, description = "All comments, newest first", body = Vec<CommentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn get_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let comments = CommentService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(to_dtos(comments))))
}

/// Comment on a room as the authenticated user.
///
/// # Returns
/// - `201 Created` - The new comment
/// - `400 Bad Request` - Invalid body or unknown room
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Invalid body or unknown room", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn create_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    payload.validate()?;

    let comment = CommentService::new(&state.db)
        .create(CreateCommentParam::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/comments/pagination",
    tag = COMMENT_TAG,
    params(PaginationParam),
    responses(
        (status = 200, description = "One page of comments filtered by content", body = PageDto<CommentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn get_comments_paginated(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let page = CommentService::new(&state.db)
        .get_paginated(&params.keyword, params.page_request())
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Comment::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/comments/search",
    tag = COMMENT_TAG,
    params(SearchParam),
    responses(
        (status = 200, description = "Comments containing the keyword, empty for a blank keyword", body = Vec<CommentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn search_comments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParam>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let comments = CommentService::new(&state.db)
        .search(&params.keyword)
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(comments))))
}

/// List the comments of a room, newest first.
#[utoipa::path(
    get,
    path = "/api/comments/by-room/{room_id}",
    tag = COMMENT_TAG,
    params(("room_id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Comments of the room", body = Vec<CommentDto>),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments_by_room(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db).get_by_room(room_id).await?;

    Ok((StatusCode::OK, Json(to_dtos(comments))))
}

/// Edit a comment.
///
/// # Access Control
/// - `SelfOrAdmin(comment.user_id)`
#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Updated comment", body = CommentDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author and not an admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn update_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    payload.validate()?;

    let service = CommentService::new(&state.db);
    let existing = service.get_by_id(id).await?;
    authorize(&user, &[Permission::SelfOrAdmin(existing.user_id)])?;

    let comment = service
        .update(id, UpdateCommentParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment.
///
/// # Access Control
/// - `SelfOrAdmin(comment.user_id)`
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author and not an admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("AccessToken" = []))
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = CommentService::new(&state.db);
    let existing = service.get_by_id(id).await?;
    authorize(&user, &[Permission::SelfOrAdmin(existing.user_id)])?;

    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("Comment {} deleted", id),
        }),
    ))
}

fn to_dtos(comments: Vec<Comment>) -> Vec<CommentDto> {
    comments.into_iter().map(Comment::into_dto).collect()
}
