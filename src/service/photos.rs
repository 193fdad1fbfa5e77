//! Photo persistence: bytes on disk under the upload dir, metadata in photos.

use crate::error::AppError;
use crate::model::Photo;
use crate::repo::PhotoRepo;
use sqlx::PgPool;
use std::path::Path;

pub struct PhotoService;

impl PhotoService {
    /// Write the uploaded bytes under a fresh uuid-based name and insert the
    /// row. The disk file is removed again if the insert fails.
    pub async fn store(
        pool: &PgPool,
        upload_dir: &Path,
        original_name: &str,
        bytes: &[u8],
    ) -> Result<Photo, AppError> {
        tokio::fs::create_dir_all(upload_dir).await?;
        let stored_name = unique_filename(original_name);
        let path = upload_dir.join(&stored_name);
        tokio::fs::write(&path, bytes).await?;

        let file_path = path.to_string_lossy().into_owned();
        match PhotoRepo::insert(pool, original_name, &file_path).await {
            Ok(photo) => {
                tracing::info!(id = photo.id, name = %photo.name, bytes = bytes.len(), "photo stored");
                Ok(photo)
            }
            Err(e) => {
                let _ = tokio::fs::remove_file(&path).await;
                Err(e)
            }
        }
    }

    /// Load the stored bytes for a photo. Unknown id or unreadable file is NotFound.
    pub async fn load(pool: &PgPool, id: i64) -> Result<(Photo, Vec<u8>), AppError> {
        let photo = PhotoRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("photo {}", id)))?;
        let bytes = tokio::fs::read(&photo.file_path)
            .await
            .map_err(|_| AppError::NotFound(format!("photo {}", id)))?;
        Ok((photo, bytes))
    }

    /// Remove the disk file (best effort) and the row. Returns false when the
    /// id does not exist. A file that is already gone does not block the row
    /// deletion.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let photo = match PhotoRepo::find_by_id(pool, id).await? {
            Some(p) => p,
            None => return Ok(false),
        };
        discard_file(&photo.file_path).await;
        PhotoRepo::delete_by_id(pool, id).await
    }
}

/// Best-effort removal of a stored photo file. Never fails: a missing or
/// unremovable file is logged and the caller proceeds to delete the row.
/// Returns true when a file was actually removed.
async fn discard_file(path: &str) -> bool {
    match tokio::fs::remove_file(path).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "photo file removal failed");
            false
        }
    }
}

/// uuid v4 plus the original extension, if any.
fn unique_filename(original_name: &str) -> String {
    match file_ext(original_name) {
        Some(ext) => format!("{}.{}", uuid::Uuid::new_v4(), ext),
        None => uuid::Uuid::new_v4().to_string(),
    }
}

fn file_ext(name: &str) -> Option<&str> {
    let dot = name.rfind('.')?;
    let ext = &name[dot + 1..];
    if dot == 0 || ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}
