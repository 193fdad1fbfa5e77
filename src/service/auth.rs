//! Single-account auth: one signup ever, boolean login, no sessions.

use crate::error::AppError;
use crate::model::Credentials;
use crate::repo::UserRepo;
use sqlx::PgPool;

pub struct AuthService;

impl AuthService {
    /// Create the one allowed account. The UNIQUE constraint on username
    /// backs the existence check, so a signup race ends in a conflict.
    pub async fn signup(pool: &PgPool, creds: &Credentials) -> Result<(), AppError> {
        require_credentials(creds)?;
        if UserRepo::count(pool).await? > 0 {
            return Err(AppError::Conflict(
                "user already exists, only one user allowed".into(),
            ));
        }
        UserRepo::insert(pool, &creds.username, &creds.password).await?;
        Ok(())
    }

    pub async fn login(pool: &PgPool, creds: &Credentials) -> Result<(), AppError> {
        require_credentials(creds)?;
        let matched = UserRepo::find_by_username(pool, &creds.username)
            .await?
            .map(|u| u.password == creds.password)
            .unwrap_or(false);
        if matched {
            Ok(())
        } else {
            Err(AppError::Unauthorized("invalid credentials".into()))
        }
    }

    pub async fn user_exists(pool: &PgPool) -> Result<bool, AppError> {
        Ok(UserRepo::count(pool).await? > 0)
    }
}

fn require_credentials(creds: &Credentials) -> Result<(), AppError> {
    if creds.username.trim().is_empty() || creds.password.is_empty() {
        return Err(AppError::BadRequest("username and password required".into()));
    }
    Ok(())
}
