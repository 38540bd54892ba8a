mod model;
mod server;

use chrono::Duration;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
    router,
    service::auth::token::TokenService,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let db = startup::connect_to_database(&config).await?;
    let tokens = TokenService::new(&config.jwt_secret, Duration::days(config.token_ttl_days));

    let app = router::router()
        .with_state(AppState::new(db, tokens))
        .layer(startup::cors_layer(&config)?)
        .layer(TraceLayer::new_for_http());

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(InternalError::from)?;

    tracing::info!("Server listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await
        .map_err(InternalError::from)?;

    tracing::info!("Server stopped");

    Ok(())
}
