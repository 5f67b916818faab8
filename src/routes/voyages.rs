use crate::db::VoyageOrder;
use crate::error::{AppError, Result};
use crate::models::{NewVoyage, Voyage};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

/// POST /voyages - Record a voyage supplied by the client
pub async fn create_voyage(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<NewVoyage>, JsonRejection>,
) -> Result<(StatusCode, Json<Voyage>)> {
    let Json(voyage) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    voyage.validate().map_err(AppError::InvalidRequest)?;

    let voyage = state.voyages.insert(voyage).await?;
    tracing::info!(voyage_id = %voyage.id, "Voyage created: {}", voyage.route_label());

    Ok((StatusCode::CREATED, Json(voyage)))
}

/// GET /voyages - All voyages, newest first
pub async fn list_voyages(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Voyage>>> {
    let voyages = state.voyages.find_all(VoyageOrder::NewestFirst).await?;
    Ok(Json(voyages))
}

/// GET /voyages/{id}
pub async fn get_voyage(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Voyage>> {
    // A malformed id cannot name a stored voyage
    let voyage_id: Uuid = id
        .parse()
        .map_err(|_| AppError::VoyageNotFound(id.clone()))?;

    state
        .voyages
        .find_by_id(voyage_id)
        .await?
        .map(Json)
        .ok_or(AppError::VoyageNotFound(id))
}
