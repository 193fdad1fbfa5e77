//! Operational endpoints: liveness, readiness probes, build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

/// Readiness detail: the database and the photo upload directory are the two
/// dependencies this service cannot serve without.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Readiness {
    status: &'static str,
    database: &'static str,
    upload_dir: &'static str,
}

async fn health() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let db_ok = sqlx::query("SELECT 1")
        .fetch_optional(&state.pool)
        .await
        .is_ok();
    let upload_ok = tokio::fs::create_dir_all(&state.config.upload_dir)
        .await
        .is_ok();
    let (status, code) = readiness_status(db_ok, upload_ok);
    (
        code,
        Json(Readiness {
            status,
            database: check_word(db_ok),
            upload_dir: check_word(upload_ok),
        }),
    )
}

fn readiness_status(db_ok: bool, upload_ok: bool) -> (&'static str, StatusCode) {
    if db_ok && upload_ok {
        ("ok", StatusCode::OK)
    } else {
        ("degraded", StatusCode::SERVICE_UNAVAILABLE)
    }
}

fn check_word(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "unavailable"
    }
}

async fn build_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": env!("CARGO_PKG_DESCRIPTION"),
    }))
}

/// GET /health (liveness), GET /ready (DB + upload dir probes), GET /version.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_only_when_both_dependencies_are_up() {
        assert_eq!(readiness_status(true, true), ("ok", StatusCode::OK));
        assert_eq!(
            readiness_status(false, true),
            ("degraded", StatusCode::SERVICE_UNAVAILABLE)
        );
        assert_eq!(
            readiness_status(true, false),
            ("degraded", StatusCode::SERVICE_UNAVAILABLE)
        );
    }

    #[test]
    fn check_word_reports_each_dependency() {
        assert_eq!(check_word(true), "ok");
        assert_eq!(check_word(false), "unavailable");
    }
}
