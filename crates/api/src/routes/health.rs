//! Liveness probe, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Ok,
    /// The process is up but Postgres did not answer `SELECT 1`.
    Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    fn from_db_check(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy {
                ServiceStatus::Ok
            } else {
                ServiceStatus::Degraded
            },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }

    /// 200 while the database answers, 503 otherwise.
    fn status_code(&self) -> StatusCode {
        match self.status {
            ServiceStatus::Ok => StatusCode::OK,
            ServiceStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// GET /health
async fn report(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let db_healthy = crm_db::health_check(&state.pool).await.is_ok();
    let report = HealthReport::from_db_check(db_healthy);
    if !report.db_healthy {
        tracing::warn!("Health check: database unreachable");
    }
    (report.status_code(), Json(report))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
