use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

/// Highest value accepted for any optimization weight.
pub const MAX_WEIGHT: i32 = 100;

/// Efficiency is a percentage.
pub const MAX_EFFICIENCY: i64 = 100;

/// User-chosen weights for a route request. They are validated, echoed back and
/// persisted with the voyage; the route computation does not read them.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationParameters {
    pub fuel_efficiency: i32,
    pub travel_time: i32,
    pub route_safety: i32,
}

impl OptimizationParameters {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("fuelEfficiency", self.fuel_efficiency),
            ("travelTime", self.travel_time),
            ("routeSafety", self.route_safety),
        ] {
            if !(0..=MAX_WEIGHT).contains(&value) {
                return Err(format!(
                    "{} must be between 0 and {} (got {})",
                    name, MAX_WEIGHT, value
                ));
            }
        }
        Ok(())
    }
}

/// One point of an interpolated route polyline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Waypoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinates> for Waypoint {
    fn from(c: Coordinates) -> Self {
        Waypoint {
            latitude: c.lat,
            longitude: c.lng,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VoyageStatus {
    #[default]
    Completed,
    InProgress,
}

impl VoyageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoyageStatus::Completed => "completed",
            VoyageStatus::InProgress => "in-progress",
        }
    }
}

impl fmt::Display for VoyageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoyageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(VoyageStatus::Completed),
            "in-progress" | "in_progress" => Ok(VoyageStatus::InProgress),
            _ => Err(format!("Invalid voyage status: '{}'", s)),
        }
    }
}

/// A voyage as it is written to the store. The store assigns `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewVoyage {
    pub departure_port: String,
    pub destination_port: String,
    #[serde(default)]
    pub parameters: OptimizationParameters,
    #[serde(default)]
    pub route: Vec<Waypoint>,
    #[serde(default)]
    pub distance: i64,
    #[serde(default)]
    pub estimated_time: i64,
    #[serde(default)]
    pub fuel_consumption: i64,
    #[serde(default = "OffsetDateTime::now_utc", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub status: VoyageStatus,
    #[serde(default)]
    pub savings: i64,
    #[serde(default)]
    pub efficiency: i64,
}

impl NewVoyage {
    pub fn validate(&self) -> Result<(), String> {
        if self.departure_port.trim().is_empty() {
            return Err("departurePort must not be empty".to_string());
        }
        if self.destination_port.trim().is_empty() {
            return Err("destinationPort must not be empty".to_string());
        }
        if self.distance < 0 || self.estimated_time < 0 || self.fuel_consumption < 0 {
            return Err(
                "distance, estimatedTime and fuelConsumption must not be negative".to_string(),
            );
        }
        if self.savings < 0 {
            return Err(format!("savings must not be negative (got {})", self.savings));
        }
        if !(0..=MAX_EFFICIENCY).contains(&self.efficiency) {
            return Err(format!(
                "efficiency must be between 0 and {} (got {})",
                MAX_EFFICIENCY, self.efficiency
            ));
        }
        for (i, waypoint) in self.route.iter().enumerate() {
            Coordinates::new(waypoint.latitude, waypoint.longitude)
                .map_err(|e| format!("route[{}]: {}", i, e))?;
        }
        self.parameters.validate()
    }
}

/// A persisted voyage record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Voyage {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub departure_port: String,
    pub destination_port: String,
    pub parameters: OptimizationParameters,
    pub route: Vec<Waypoint>,
    pub distance: i64,
    pub estimated_time: i64,
    pub fuel_consumption: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub status: VoyageStatus,
    pub savings: i64,
    pub efficiency: i64,
}

impl Voyage {
    pub fn from_new(id: Uuid, voyage: NewVoyage) -> Self {
        Voyage {
            id,
            departure_port: voyage.departure_port,
            destination_port: voyage.destination_port,
            parameters: voyage.parameters,
            route: voyage.route,
            distance: voyage.distance,
            estimated_time: voyage.estimated_time,
            fuel_consumption: voyage.fuel_consumption,
            created_at: voyage.created_at,
            status: voyage.status,
            savings: voyage.savings,
            efficiency: voyage.efficiency,
        }
    }

    /// Label shown in the analytics digest, e.g. "Port of Sydney → Port of Tokyo"
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.departure_port, self.destination_port)
    }
}

// Request/Response types for the optimize endpoint

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptimizationRequest {
    pub departure_port: String,
    pub destination_port: String,
    #[serde(default)]
    pub parameters: OptimizationParameters,
}

impl RouteOptimizationRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.departure_port.trim().is_empty() {
            return Err("departurePort must not be empty".to_string());
        }
        if self.destination_port.trim().is_empty() {
            return Err("destinationPort must not be empty".to_string());
        }
        self.parameters.validate()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptimizationResponse {
    pub departure_port: String,
    pub destination_port: String,
    pub parameters: OptimizationParameters,
    pub route: Vec<Waypoint>,
    pub distance: i64,
    pub estimated_time: i64,
    pub fuel_consumption: i64,
}

impl From<&Voyage> for RouteOptimizationResponse {
    fn from(v: &Voyage) -> Self {
        RouteOptimizationResponse {
            departure_port: v.departure_port.clone(),
            destination_port: v.destination_port.clone(),
            parameters: v.parameters,
            route: v.route.clone(),
            distance: v.distance,
            estimated_time: v.estimated_time,
            fuel_consumption: v.fuel_consumption,
        }
    }
}
