//! Health check endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health
///
/// Liveness probe: reports the server clock and whether the database
/// answers a trivial query.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let db_ok = state.db.health_check().await;
    Json(json!({
        "ok": db_ok,
        "time": Utc::now(),
    }))
}
