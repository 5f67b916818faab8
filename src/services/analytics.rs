use crate::constants::RECENT_VOYAGES_LIMIT;
use crate::db::{VoyageOrder, VoyageRepository};
use crate::error::Result;
use crate::models::{AnalyticsSummary, RecentVoyage, Voyage, VoyageStatus};

/// Read the whole voyage collection and summarize it. Concurrent inserts may
/// or may not be included.
pub async fn compute_summary(voyages: &dyn VoyageRepository) -> Result<AnalyticsSummary> {
    let all = voyages.find_all(VoyageOrder::Insertion).await?;
    Ok(summarize(&all))
}

/// Summarize voyages given in storage order (oldest first).
pub fn summarize(voyages: &[Voyage]) -> AnalyticsSummary {
    if voyages.is_empty() {
        return AnalyticsSummary::default();
    }

    let count = voyages.len() as f64;
    // Widened so no stored values can overflow the totals
    let savings_sum: i128 = voyages.iter().map(|v| i128::from(v.savings)).sum();
    let efficiency_sum: i128 = voyages.iter().map(|v| i128::from(v.efficiency)).sum();
    let completed = voyages
        .iter()
        .filter(|v| v.status == VoyageStatus::Completed)
        .count();

    let recent_voyages = voyages
        .iter()
        .rev()
        .take(RECENT_VOYAGES_LIMIT)
        .map(|v| RecentVoyage {
            id: v.id,
            route: v.route_label(),
            savings: v.savings,
            efficiency: v.efficiency,
            status: v.status,
        })
        .collect();

    AnalyticsSummary {
        total_savings: saturate(savings_sum),
        average_fuel_efficiency: round_to_tenth(efficiency_sum as f64 / count),
        on_time_deliveries: round_to_tenth(completed as f64 / count * 100.0),
        routes_optimized: voyages.len(),
        recent_voyages,
    }
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
