//! FTP relay handlers.

use crate::error::AppError;
use crate::model::TransferRequest;
use crate::response::ok_message;
use crate::service::TransferService;
use axum::Json;

pub async fn ftp_upload(
    Json(req): Json<TransferRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let remote = req.remote_path.clone();
    let written = TransferService::upload(req).await?;
    Ok(ok_message(format!("Uploaded {} bytes to {}", written, remote)))
}

pub async fn ftp_download(
    Json(req): Json<TransferRequest>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let local = req.local_path.clone();
    let written = TransferService::download(req).await?;
    Ok(ok_message(format!("Downloaded {} bytes to {}", written, local)))
}
