use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use crate::metrics::{CHECKS_ALLOWED, CHECKS_DENIED, CHECKS_TOTAL};
use crate::models::{CheckRequest, CheckResponse};
use crate::state::AppState;

// Decision endpoint - the backend asks whether a keyed request may proceed
pub async fn check_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, (StatusCode, String)> {
    CHECKS_TOTAL.inc();

    // keys identify a caller, an empty one identifies nobody
    if payload.key.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "key must not be empty".to_string()));
    }

    let allowed = state.limiter.check(&payload.key);
    if allowed {
        CHECKS_ALLOWED.inc();
    } else {
        CHECKS_DENIED.inc();
    }

    Ok(Json(CheckResponse {
        key: payload.key,
        allowed,
    }))
}
