//! Queries against the photos table.

use crate::error::AppError;
use crate::model::Photo;
use sqlx::PgPool;

pub struct PhotoRepo;

impl PhotoRepo {
    pub async fn insert(pool: &PgPool, name: &str, file_path: &str) -> Result<Photo, AppError> {
        let photo = sqlx::query_as::<_, Photo>(
            "INSERT INTO photos (name, file_path) VALUES ($1, $2) \
             RETURNING id, name, file_path, uploaded_at",
        )
        .bind(name)
        .bind(file_path)
        .fetch_one(pool)
        .await?;
        Ok(photo)
    }

    pub async fn all(pool: &PgPool) -> Result<Vec<Photo>, AppError> {
        let photos = sqlx::query_as::<_, Photo>(
            "SELECT id, name, file_path, uploaded_at FROM photos ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(photos)
    }

    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Photo>, AppError> {
        let photo = sqlx::query_as::<_, Photo>(
            "SELECT id, name, file_path, uploaded_at FROM photos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(photo)
    }

    /// Delete one row by id. Returns true when a row was removed.
    pub async fn delete_by_id(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
