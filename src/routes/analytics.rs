use crate::error::Result;
use crate::models::AnalyticsSummary;
use crate::services::analytics;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /analytics - Dashboard figures over every stored voyage
pub async fn get_analytics(State(state): State<Arc<AppState>>) -> Result<Json<AnalyticsSummary>> {
    let summary = analytics::compute_summary(state.voyages.as_ref()).await?;
    Ok(Json(summary))
}
