// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use config::EstimatorConfig;
use db::{PortRepository, Store, VoyageRepository};
use services::{RouteOptimizer, VoyageEstimator};
use std::sync::Arc;

/// Shared by every request handler
pub struct AppState {
    pub ports: Arc<dyn PortRepository>,
    pub voyages: Arc<dyn VoyageRepository>,
    pub optimizer: RouteOptimizer,
}

impl AppState {
    pub fn new(store: &Store, config: &EstimatorConfig) -> Self {
        let estimator = VoyageEstimator::from_config(config);
        tracing::info!(
            scorer = estimator.scorer_name(),
            seeded = config.efficiency_seed.is_some(),
            "Voyage estimator ready"
        );
        Self::with_repositories(
            store.port_repository(),
            store.voyage_repository(),
            estimator,
            config,
        )
    }

    pub fn with_repositories(
        ports: Arc<dyn PortRepository>,
        voyages: Arc<dyn VoyageRepository>,
        estimator: VoyageEstimator,
        config: &EstimatorConfig,
    ) -> Self {
        let optimizer = RouteOptimizer::new(ports.clone(), voyages.clone(), estimator, config);
        AppState {
            ports,
            voyages,
            optimizer,
        }
    }
}
