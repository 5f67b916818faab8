pub mod analytics;
pub mod estimator;
pub mod optimizer;
pub mod waypoints;

pub use estimator::{EfficiencyScorer, FixedScorer, PlaceholderScorer, VoyageEstimator};
pub use optimizer::RouteOptimizer;
