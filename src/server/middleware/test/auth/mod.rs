use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::token::{TokenService, TokenType},
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::Role;
use test_utils::{builder::TestBuilder, factory};


fn token_service() -> TokenService {
    TokenService::from_secrets(
        "guard-access-secret",
        "guard-refresh-secret",
        Duration::minutes(15),
        Duration::days(7),
    )
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
