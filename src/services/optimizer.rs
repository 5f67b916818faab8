use crate::config::{EstimatorConfig, InterpolationMode};
use crate::db::{PortRepository, VoyageRepository};
use crate::error::{AppError, Result};
use crate::models::{
    DistanceNm, NewVoyage, OptimizationParameters, Port, RouteOptimizationRequest, Voyage,
    VoyageStatus,
};
use crate::services::estimator::VoyageEstimator;
use crate::services::waypoints;
use std::sync::Arc;
use time::OffsetDateTime;

/// Turns a port pair into a persisted voyage: distance, route polyline,
/// time, fuel and the derived savings and efficiency.
pub struct RouteOptimizer {
    ports: Arc<dyn PortRepository>,
    voyages: Arc<dyn VoyageRepository>,
    estimator: VoyageEstimator,
    waypoint_resolution: usize,
    interpolation: InterpolationMode,
}

impl RouteOptimizer {
    pub fn new(
        ports: Arc<dyn PortRepository>,
        voyages: Arc<dyn VoyageRepository>,
        estimator: VoyageEstimator,
        config: &EstimatorConfig,
    ) -> Self {
        RouteOptimizer {
            ports,
            voyages,
            estimator,
            waypoint_resolution: config.waypoint_resolution,
            interpolation: config.interpolation,
        }
    }

    /// Resolve both ports, compute the voyage and store it.
    ///
    /// Nothing is written unless both ports resolve. Every call stores a new
    /// voyage, even for a port pair that was optimized before.
    pub async fn optimize(&self, request: &RouteOptimizationRequest) -> Result<Voyage> {
        let departure = self
            .ports
            .find_by_name(&request.departure_port)
            .await?
            .ok_or_else(|| AppError::PortNotFound(request.departure_port.clone()))?;
        let destination = self
            .ports
            .find_by_name(&request.destination_port)
            .await?
            .ok_or_else(|| AppError::PortNotFound(request.destination_port.clone()))?;

        let planned = self.plan_voyage(&departure, &destination, request.parameters)?;
        let voyage = self.voyages.insert(planned).await?;

        tracing::info!(
            voyage_id = %voyage.id,
            distance_nm = voyage.distance,
            efficiency = voyage.efficiency,
            "Voyage stored: {}",
            voyage.route_label()
        );

        Ok(voyage)
    }

    /// The pure part of [`optimize`](Self::optimize): no lookups, no writes.
    ///
    /// Fails with `Internal` when the stored coordinates do not yield a usable
    /// distance.
    pub fn plan_voyage(
        &self,
        departure: &Port,
        destination: &Port,
        parameters: OptimizationParameters,
    ) -> Result<NewVoyage> {
        let distance = DistanceNm::new(departure.coordinates.distance_nm(&destination.coordinates))
            .map_err(|e| {
                AppError::Internal(format!(
                    "{} → {}: {}",
                    departure.name, destination.name, e
                ))
            })?;
        let route = waypoints::interpolate(
            departure.coordinates,
            destination.coordinates,
            self.waypoint_resolution,
            self.interpolation,
        );
        let estimate = self.estimator.estimate(distance);

        tracing::debug!(
            departure = %departure.name,
            destination = %destination.name,
            "Planned {} ({:.0}km), {}h, {}t fuel, {} waypoints",
            distance,
            distance.to_km(),
            estimate.estimated_time_hours,
            estimate.fuel_consumption_tons,
            route.len()
        );

        Ok(NewVoyage {
            departure_port: departure.name.clone(),
            destination_port: destination.name.clone(),
            parameters,
            route,
            distance: distance.rounded(),
            estimated_time: estimate.estimated_time_hours,
            fuel_consumption: estimate.fuel_consumption_tons,
            created_at: OffsetDateTime::now_utc(),
            status: VoyageStatus::Completed,
            savings: estimate.savings,
            efficiency: estimate.efficiency,
        })
    }
}
