pub mod analytics;
pub mod coordinates;
pub mod distance;
pub mod port;
pub mod voyage;

pub use analytics::{AnalyticsSummary, RecentVoyage};
pub use coordinates::Coordinates;
pub use distance::DistanceNm;
pub use port::Port;
pub use voyage::{
    NewVoyage, OptimizationParameters, RouteOptimizationRequest, RouteOptimizationResponse,
    Voyage, VoyageStatus, Waypoint,
};
