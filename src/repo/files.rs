//! Queries against the files table.

use crate::error::AppError;
use crate::model::{FileInfo, FileInfoBody};
use sqlx::PgPool;

pub struct FileRepo;

impl FileRepo {
    pub async fn insert(pool: &PgPool, body: &FileInfoBody) -> Result<FileInfo, AppError> {
        let info = sqlx::query_as::<_, FileInfo>(
            "INSERT INTO files (file_name, file_path, size) VALUES ($1, $2, $3) \
             RETURNING id, file_name, file_path, size",
        )
        .bind(&body.file_name)
        .bind(&body.file_path)
        .bind(body.size)
        .fetch_one(pool)
        .await?;
        Ok(info)
    }

    pub async fn all(pool: &PgPool) -> Result<Vec<FileInfo>, AppError> {
        let files = sqlx::query_as::<_, FileInfo>(
            "SELECT id, file_name, file_path, size FROM files ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(files)
    }

    /// First row (lowest id) with the given file name, or None.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<FileInfo>, AppError> {
        let info = sqlx::query_as::<_, FileInfo>(
            "SELECT id, file_name, file_path, size FROM files WHERE file_name = $1 \
             ORDER BY id LIMIT 1",
        )
        .bind(name)
        .fetch_optional(pool)
        .await?;
        Ok(info)
    }

    /// Remove every row with the given file name. Returns the number removed.
    pub async fn delete_by_name(pool: &PgPool, name: &str) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM files WHERE file_name = $1")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
