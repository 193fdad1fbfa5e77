//! sayhi backend: photo-sharing service over axum + PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repo;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use response::{created_message, ok_message, StatusBody};
pub use routes::{api_routes, common_routes_with_ready};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
