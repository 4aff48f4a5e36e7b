//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Registry**: Reachable; reports the stored record count
/// 2. **Shortener**: Degraded only when running fail-closed without an API
///    key, in which case every shorten attempt is doomed
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let registry_check = check_registry(&state).await;
    let shortener_check = check_shortener(&state);

    let all_healthy = registry_check.status == "ok" && shortener_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            registry: registry_check,
            shortener: shortener_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_registry(state: &AppState) -> CheckStatus {
    let count = state.registry.len().await;
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{count} links stored")),
    }
}

fn check_shortener(state: &AppState) -> CheckStatus {
    if state.shortener_configured {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("ShrinkMe API key configured".to_string()),
        }
    } else if state.shortener_fail_open {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("No API key; serving fallback short URLs".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("No API key and fail-open disabled".to_string()),
        }
    }
}
