//! Application route table. CORS is wide open, matching the clients the
//! original app serves. The default body limit is replaced by the configured
//! upload limit so multipart photo uploads are not capped at axum's default.

use crate::handlers::{auth, files, greeting, photos, transfer, users};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

pub fn api_routes(state: AppState) -> Router {
    let max_upload = state.config.max_upload_bytes;
    Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/check", get(auth::check))
        .route("/users", post(users::add_user).get(users::list_users))
        .route("/users/:username", get(users::get_user))
        .route("/files", get(files::list_files).post(files::register_file))
        .route(
            "/files/:name",
            get(files::get_file).delete(files::delete_file),
        )
        .route("/api/photos", get(photos::list_photos))
        .route("/api/photos/upload", post(photos::upload_photo))
        .route("/api/photos/:id/download", get(photos::download_photo))
        .route("/api/photos/:id", delete(photos::delete_photo))
        .route("/api/transfer/upload", post(transfer::ftp_upload))
        .route("/api/transfer/download", post(transfer::ftp_download))
        .route("/greeting", get(greeting::greeting))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
