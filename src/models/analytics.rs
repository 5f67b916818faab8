use crate::models::VoyageStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dashboard summary derived from the voyage collection on each request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_savings: i64,
    pub average_fuel_efficiency: f64,
    pub on_time_deliveries: f64,
    pub routes_optimized: usize,
    pub recent_voyages: Vec<RecentVoyage>,
}

/// Compact projection of a voyage for the dashboard's recent list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentVoyage {
    pub id: Uuid,
    pub route: String,
    pub savings: i64,
    pub efficiency: i64,
    pub status: VoyageStatus,
}
