//! File metadata directory handlers.

use crate::error::AppError;
use crate::model::FileInfoBody;
use crate::repo::FileRepo;
use crate::response::{created_message, ok_message};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list_files(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let files = FileRepo::all(&state.pool).await?;
    Ok(Json(files))
}

pub async fn get_file(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let info = FileRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("file {}", name)))?;
    Ok(Json(info))
}

pub async fn register_file(
    State(state): State<AppState>,
    Json(body): Json<FileInfoBody>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let info = FileRepo::insert(&state.pool, &body).await?;
    Ok(created_message(format!("File uploaded: {}", info.file_name)))
}

pub async fn delete_file(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let removed = FileRepo::delete_by_name(&state.pool, &name).await?;
    tracing::debug!(name = %name, removed, "file metadata deleted");
    Ok(ok_message(format!("File deleted: {}", name)))
}
