//! Stable application-wide constants.
//!
//! Values here are physical constants, estimator coefficients, and default
//! fallbacks for env-var-based configuration. The estimator coefficients can be
//! overridden at runtime through [`EstimatorConfig`](crate::config::EstimatorConfig).

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server. The mobile client points at 3001.
pub const DEFAULT_PORT: &str = "3001";

// --- Geodesy ---

/// Earth's mean radius in nautical miles, used by the Haversine distance.
pub const EARTH_RADIUS_NM: f64 = 3440.065;

// --- Voyage estimator defaults ---

/// Assumed average vessel speed in knots. Overridden by `AVERAGE_SPEED_KNOTS`.
pub const DEFAULT_AVERAGE_SPEED_KNOTS: f64 = 20.0;
/// Fuel burned per nautical mile, in tons. Overridden by `FUEL_BURN_RATE_TONS_PER_NM`.
pub const DEFAULT_FUEL_BURN_RATE_TONS_PER_NM: f64 = 0.05;
/// Currency saved per nautical mile against the unoptimized baseline.
/// Overridden by `SAVINGS_PER_NM`.
pub const DEFAULT_SAVINGS_PER_NM: f64 = 2.5;
/// Number of interpolation segments between two ports; the route has one more
/// point than this. Overridden by `WAYPOINT_RESOLUTION`.
pub const DEFAULT_WAYPOINT_RESOLUTION: usize = 4;

// --- Placeholder efficiency score ---
// The score is drawn as round(BASE + U) with U uniform in [0, SPREAD).

/// Lowest efficiency the placeholder scorer can report (percent).
pub const EFFICIENCY_BASE: f64 = 80.0;
/// Width of the random band added on top of the base.
pub const EFFICIENCY_SPREAD: f64 = 15.0;

// --- Analytics ---

/// Number of voyages listed in the dashboard's recent list.
pub const RECENT_VOYAGES_LIMIT: usize = 3;
