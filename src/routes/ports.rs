use crate::error::Result;
use crate::models::Port;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /ports - The full port catalog
pub async fn list_ports(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Port>>> {
    let ports = state.ports.find_all().await?;
    tracing::debug!("Port list returned {} ports", ports.len());
    Ok(Json(ports))
}
