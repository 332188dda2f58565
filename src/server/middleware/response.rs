//! Success envelope for API responses.
//!
//! Successful JSON bodies are rewritten to
//! `{"status": "success", "status_code": <u16>, "data": <original body>}`.
//! Error responses and non-JSON bodies pass through untouched.

use axum::{
    body::Body,
    extract::Request,
    http::header::{CONTENT_LENGTH, CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::server::error::InternalServerError;

pub async fn wrap_success(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    let status = response.status();
    if !status.is_success() || !is_json(&response) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => return InternalServerError(e).into_response(),
    };

    let data: serde_json::Value = match serde_json::from_slice(&bytes) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Response declared JSON but could not be parsed: {}", e);
            return Response::from_parts(parts, Body::from(bytes));
        }
    };

    parts.headers.remove(CONTENT_LENGTH);

    (
        parts,
        Json(json!({
            "status": "success",
            "status_code": status.as_u16(),
            "data": data,
        })),
    )
        .into_response()
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}
