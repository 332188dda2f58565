mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, router, service::token::TokenService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::prepare_public_dir(&config).await?;

    let tokens = TokenService::new(&config);
    let state = AppState::new(db, tokens, config.public_dir.clone());
    let app = router::router(&config, state)?;

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Starting server on http://{}", listener.local_addr()?);
    tracing::info!(
        "API documentation available at http://{}/api-docs",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
