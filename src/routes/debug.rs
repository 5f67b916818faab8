use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /health - Check that the store answers
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    match state.ports.count().await {
        Ok(count) => {
            status["checks"]["database"] = json!("ok");
            status["checks"]["port_count"] = json!(count);
        }
        Err(e) => {
            status["checks"]["database"] = json!({"error": e.to_string()});
            status["status"] = json!("error");
        }
    }

    match state.voyages.count().await {
        Ok(count) => {
            status["checks"]["voyage_count"] = json!(count);
        }
        Err(e) => {
            status["checks"]["voyage_count"] = json!({"error": e.to_string()});
            status["status"] = json!("error");
        }
    }

    Json(status)
}
