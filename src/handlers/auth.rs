//! Auth handlers: signup, login, account-existence check.

use crate::error::AppError;
use crate::model::Credentials;
use crate::response::{created_message, ok_message};
use crate::service::AuthService;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::json;

pub async fn signup(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    AuthService::signup(&state.pool, &creds).await?;
    tracing::info!(username = %creds.username, "account created");
    Ok(created_message("Signup successful"))
}

pub async fn login(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    AuthService::login(&state.pool, &creds).await?;
    Ok(ok_message("Login successful"))
}

pub async fn check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let exists = AuthService::user_exists(&state.pool).await?;
    Ok(Json(json!({ "userExists": exists })))
}
