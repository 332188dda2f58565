//! Route table, OpenAPI document and HTTP layers.
//!
//! API handlers are registered through `utoipa_axum` so the OpenAPI document is
//! built from the same `#[utoipa::path]` annotations that define the routes.
//! The document is served by Swagger UI at `/api-docs` and uploaded images are
//! served from the public directory under `/public`.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware::from_fn,
    Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{auth, booking, comment, location, room, user},
    error::{config::ConfigError, AppError},
    middleware::response::wrap_success,
    state::AppState,
};

/// Name of the bearer security scheme referenced by protected handlers.
pub const ACCESS_TOKEN_SCHEME: &str = "AccessToken";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Staybook API",
        description = "Room booking platform: locations, rooms, bookings, comments and users"
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token refresh"),
        (name = "user", description = "User administration"),
        (name = "location", description = "Locations rooms belong to"),
        (name = "room", description = "Rooms available for booking"),
        (name = "booking", description = "Room reservations"),
        (name = "comment", description = "Room reviews")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            ACCESS_TOKEN_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the complete application.
///
/// # Returns
/// - `Ok(Router)` - Router with state applied, ready for `axum::serve`
/// - `Err(AppError::ConfigErr)` - `CORS_ORIGIN` is not a valid header value
pub fn router(config: &Config, state: AppState) -> Result<Router, AppError> {
    let cors = cors_layer(&config.cors_origin)?;
    let public_dir = state.public_dir.clone();

    let (api, openapi) = api_router().split_for_parts();

    let app = api
        .layer(from_fn(wrap_success))
        .with_state(state)
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", openapi))
        .nest_service("/public", ServeDir::new(public_dir))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        );

    Ok(app)
}

/// All `/api` routes together with their OpenAPI description.
pub fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Auth
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::refresh_token))
        .routes(routes!(auth::me))
        // Users
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_users_paginated))
        .routes(routes!(user::search_users))
        .routes(routes!(user::get_roles))
        .routes(routes!(
            user::get_user_by_id,
            user::update_user,
            user::delete_user
        ))
        // Locations
        .routes(routes!(location::get_locations, location::create_location))
        .routes(routes!(location::get_locations_paginated))
        .routes(routes!(location::search_locations))
        .routes(routes!(
            location::get_location_by_id,
            location::update_location,
            location::delete_location
        ))
        .routes(routes!(location::upload_location_image))
        // Rooms
        .routes(routes!(room::get_rooms, room::create_room))
        .routes(routes!(room::get_rooms_by_location))
        .routes(routes!(room::get_rooms_paginated))
        .routes(routes!(
            room::get_room_by_id,
            room::update_room,
            room::delete_room
        ))
        .routes(routes!(room::upload_room_image))
        // Bookings
        .routes(routes!(booking::get_bookings, booking::create_booking))
        .routes(routes!(booking::get_bookings_paginated))
        .routes(routes!(booking::get_bookings_by_user))
        .routes(routes!(
            booking::get_booking_by_id,
            booking::update_booking,
            booking::delete_booking
        ))
        // Comments
        .routes(routes!(comment::get_comments, comment::create_comment))
        .routes(routes!(comment::get_comments_paginated))
        .routes(routes!(comment::search_comments))
        .routes(routes!(comment::get_comments_by_room))
        .routes(routes!(comment::update_comment, comment::delete_comment))
}

fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar("CORS_ORIGIN".to_string(), e.to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]))
}
