use crate::error::{AppError, Result};
use crate::models::{RouteOptimizationRequest, RouteOptimizationResponse};
use crate::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

/// POST /optimize-route
/// Compute the route between two named ports and record it as a voyage
pub async fn optimize_route(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<RouteOptimizationRequest>, JsonRejection>,
) -> Result<Json<RouteOptimizationResponse>> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        departure = %request.departure_port,
        destination = %request.destination_port,
        fuel_efficiency = request.parameters.fuel_efficiency,
        travel_time = request.parameters.travel_time,
        route_safety = request.parameters.route_safety,
        "Route optimization request"
    );

    let voyage = state.optimizer.optimize(&request).await?;

    Ok(Json(RouteOptimizationResponse::from(&voyage)))
}
