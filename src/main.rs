mod model;
mod server;

use std::net::SocketAddr;

use chrono::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config, error::AppError, router, service::token::TokenService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "clubsync=debug,tower_http=info,axum=info,sea_orm=warn".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let tokens = TokenService::new(
        config.jwt_secret.clone(),
        Duration::hours(config.token_ttl_hours),
    );

    let app = router::router()
        .with_state(AppState::new(db, tokens))
        .layer(axum::middleware::from_fn(
            server::middleware::error_body::attach,
        ))
        .layer(router::cors_layer(&config.app_origin)?);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::InternalError(err.to_string()))?;

    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::InternalError(err.to_string()))?;

    Ok(())
}
