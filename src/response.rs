//! Standard `{success, message}` envelope for mutating endpoints.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct StatusBody {
    pub success: bool,
    pub message: String,
}

pub fn ok_message(message: impl Into<String>) -> (StatusCode, Json<StatusBody>) {
    (
        StatusCode::OK,
        Json(StatusBody {
            success: true,
            message: message.into(),
        }),
    )
}

pub fn created_message(message: impl Into<String>) -> (StatusCode, Json<StatusBody>) {
    (
        StatusCode::CREATED,
        Json(StatusBody {
            success: true,
            message: message.into(),
        }),
    )
}
