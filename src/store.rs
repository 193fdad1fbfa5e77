//! Table DDL and database bootstrap. Tables are created at startup with
//! CREATE TABLE IF NOT EXISTS, so a fresh database is usable immediately.

use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS files (
        id SERIAL PRIMARY KEY,
        file_name TEXT NOT NULL,
        file_path TEXT NOT NULL,
        size BIGINT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS photos (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        file_path TEXT NOT NULL,
        uploaded_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

/// Create the users, files, and photos tables if they do not exist.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

/// Split DATABASE_URL into an admin URL (same server, `postgres` database)
/// and the database name. A URL without a path has no database to create;
/// the name comes back empty and the caller skips the admin step.
fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let after_scheme = url.find("://").map(|i| i + 3).unwrap_or(0);
    let rel = match url[after_scheme..].rfind('/') {
        Some(rel) => rel,
        None => return Ok((String::new(), String::new())),
    };
    let path_start = after_scheme + rel + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

/// Quote a PostgreSQL identifier. Embedded double quotes are doubled;
/// backslashes carry no special meaning inside a quoted identifier.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_name_is_parsed_from_url() {
        let (admin, name) =
            parse_db_name_from_url("postgres://localhost:5432/sayhi?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://localhost:5432/postgres");
        assert_eq!(name, "sayhi");
    }

    #[test]
    fn postgres_default_db_needs_no_admin_step() {
        let (_, name) = parse_db_name_from_url("postgres://localhost/postgres").unwrap();
        assert_eq!(name, "postgres");
    }

    #[test]
    fn url_without_path_has_no_database_to_create() {
        let (_, name) = parse_db_name_from_url("postgres://localhost").unwrap();
        assert!(name.is_empty());
    }

    #[test]
    fn quoting_doubles_embedded_quotes() {
        assert_eq!(quote_ident("say\"hi"), "\"say\"\"hi\"");
        assert_eq!(quote_ident("plain"), "\"plain\"");
    }

    #[test]
    fn backslash_is_a_literal_in_quoted_identifiers() {
        assert_eq!(quote_ident("a\\b"), "\"a\\b\"");
    }
}
