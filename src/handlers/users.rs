//! User directory handlers.

use crate::error::AppError;
use crate::model::Credentials;
use crate::repo::UserRepo;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn add_user(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if body.username.trim().is_empty() || body.password.is_empty() {
        return Err(AppError::BadRequest("username and password required".into()));
    }
    let user = UserRepo::insert(&state.pool, &body.username, &body.password).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let users = UserRepo::all(&state.pool).await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", username)))?;
    Ok(Json(user))
}
