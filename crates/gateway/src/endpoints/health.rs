//! # GET /health

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::config::GatewayState;

/// GET /health — 稼働確認。ストレージへの接続は行わない。
pub async fn handle_health(State(state): State<Arc<GatewayState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "bucket": state.storage.bucket_name(),
    }))
}
