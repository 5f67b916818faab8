pub mod analytics;
pub mod debug;
pub mod optimize;
pub mod ports;
pub mod voyages;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/optimize-route", post(optimize::optimize_route))
        .route("/ports", get(ports::list_ports))
        .route("/analytics", get(analytics::get_analytics))
        .route(
            "/voyages",
            get(voyages::list_voyages).post(voyages::create_voyage),
        )
        .route("/voyages/{id}", get(voyages::get_voyage))
        .route("/health", get(debug::health_check))
        .with_state(state)
}
