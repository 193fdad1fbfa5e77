//! Queries against the users table.

use crate::error::AppError;
use crate::model::User;
use sqlx::PgPool;

pub struct UserRepo;

impl UserRepo {
    /// Insert a user. A duplicate username surfaces as a unique violation.
    pub async fn insert(pool: &PgPool, username: &str, password: &str) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password) VALUES ($1, $2) RETURNING id, username, password",
        )
        .bind(username)
        .bind(password)
        .fetch_one(pool)
        .await?;
        Ok(user)
    }

    pub async fn all(pool: &PgPool) -> Result<Vec<User>, AppError> {
        let users =
            sqlx::query_as::<_, User>("SELECT id, username, password FROM users ORDER BY id")
                .fetch_all(pool)
                .await?;
        Ok(users)
    }

    pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, AppError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
