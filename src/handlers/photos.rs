//! Photo handlers: list with download URLs, multipart upload, download, delete.

use crate::error::AppError;
use crate::model::PhotoView;
use crate::repo::PhotoRepo;
use crate::response::ok_message;
use crate::service::PhotoService;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    Json,
};
use std::collections::HashMap;

pub async fn list_photos(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let base = params
        .get("serverUrl")
        .map(|s| s.trim_end_matches('/'))
        .unwrap_or(&state.config.public_base_url);
    let photos = PhotoRepo::all(&state.pool).await?;
    let views: Vec<PhotoView> = photos.iter().map(|p| PhotoView::new(p, base)).collect();
    Ok(Json(views))
}

pub async fn upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let name = field
                .file_name()
                .map(str::to_owned)
                .ok_or_else(|| AppError::BadRequest("file field must carry a filename".into()))?;
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            upload = Some((name, data.to_vec()));
            break;
        }
    }
    let (name, bytes) =
        upload.ok_or_else(|| AppError::BadRequest("missing 'file' field in multipart body".into()))?;

    let photo = PhotoService::store(&state.pool, &state.config.upload_dir, &name, &bytes).await?;

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct UploadResponse {
        success: bool,
        message: &'static str,
        photo_id: i64,
    }
    Ok((
        StatusCode::OK,
        Json(UploadResponse {
            success: true,
            message: "Photo uploaded successfully",
            photo_id: photo.id,
        }),
    ))
}

pub async fn download_photo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let (photo, bytes) = PhotoService::load(&state.pool, id).await?;
    let disposition = attachment_disposition(&photo.name);
    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

/// The stored name is client-supplied; quotes, control characters, and
/// non-ASCII would make the header value invalid, so only printable ASCII
/// survives into the quoted filename.
fn attachment_disposition(name: &str) -> String {
    let safe: String = name
        .chars()
        .filter(|c| (c.is_ascii_graphic() || *c == ' ') && *c != '"' && *c != '\\')
        .collect();
    format!("attachment; filename=\"{}\"", safe)
}

pub async fn delete_photo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !PhotoService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("photo {}", id)));
    }
    Ok(ok_message("Photo deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(
            attachment_disposition("cat.png"),
            "attachment; filename=\"cat.png\""
        );
    }

    #[test]
    fn quotes_and_control_chars_are_stripped() {
        let disposition = attachment_disposition("ca\"t\r\n.png");
        assert_eq!(disposition, "attachment; filename=\"cat.png\"");
        assert!(HeaderValue::from_str(&disposition).is_ok());
    }

    #[test]
    fn non_ascii_names_still_yield_a_valid_header() {
        let disposition = attachment_disposition("caté \u{7f}.png");
        assert_eq!(disposition, "attachment; filename=\"cat .png\"");
        assert!(HeaderValue::from_str(&disposition).is_ok());
    }
}
