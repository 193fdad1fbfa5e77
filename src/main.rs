//! Server entry point: env config, tracing, pool, table DDL, routes.

use sayhi_backend::{
    api_routes, common_routes_with_ready, ensure_database_exists, ensure_tables, AppState,
    ServerConfig,
};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sayhi_backend=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    ensure_tables(&pool).await?;

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(api_routes(state));

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
