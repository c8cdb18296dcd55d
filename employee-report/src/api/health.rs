//! Liveness plus a read probe of the employee events database
//!
//! `/health` answers 200 only when the store opens and holds every table the
//! dashboard reads. Otherwise it answers 503 with the store error, so a page
//! that would silently render empty shows up as unhealthy here.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StoreStatus {
    pub path: String,
    pub readable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok" or "unavailable"
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
    pub store: StoreStatus,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let path = state.store.path().display().to_string();
    let (code, status, store) = match state.store.check().await {
        Ok(()) => (
            StatusCode::OK,
            "ok",
            StoreStatus {
                path,
                readable: true,
                error: None,
            },
        ),
        Err(e) => {
            warn!("Health check: store at {} unreadable: {}", path, e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "unavailable",
                StoreStatus {
                    path,
                    readable: false,
                    error: Some(e.to_string()),
                },
            )
        }
    };

    (
        code,
        Json(HealthResponse {
            status,
            module: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            store,
        }),
    )
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
