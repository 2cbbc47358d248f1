mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use axum::http::HeaderValue;

use crate::config::ServerConfig;
use crate::services::users::{MemoryUserStore, PgUserStore, UserStore};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("database init failed: {0}")]
    Db(#[from] sqlx::Error),
    #[error("invalid CORS_ORIGIN: {0:?}")]
    InvalidCorsOrigin(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;

    let users: Arc<dyn UserStore> = match &config.database_url {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections).await?;
            Arc::new(PgUserStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; users are kept in memory and lost on restart");
            Arc::new(MemoryUserStore::new())
        }
    };

    let cors_origin = config
        .cors_origin
        .as_deref()
        .map(|origin| HeaderValue::from_str(origin).map_err(|_| StartupError::InvalidCorsOrigin(origin.to_owned())))
        .transpose()?;

    let state = state::AppState::new(users, &config);
    let app = routes::app(state, &config.static_dir, cors_origin);

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, cookie_secure = config.cookie_secure, "threatdash listening");
    axum::serve(listener, app).await?;
    Ok(())
}
