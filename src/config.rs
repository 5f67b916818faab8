use crate::constants::*;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    #[default]
    Linear, // Independent lerp on lat and lng, matches the mobile client's polyline
    GreatCircle, // Points along the same great circle the distance is measured on
}

impl std::str::FromStr for InterpolationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(InterpolationMode::Linear),
            "great_circle" | "great-circle" | "greatcircle" => Ok(InterpolationMode::GreatCircle),
            _ => Err(format!(
                "Invalid interpolation mode: {}. Use 'linear' or 'great_circle'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub estimator: EstimatorConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    /// Vessel speed used to turn distance into hours at sea
    pub average_speed_knots: f64,

    /// Tons of fuel burned per nautical mile
    pub fuel_burn_rate_tons_per_nm: f64,

    /// Currency saved per nautical mile
    pub savings_per_nm: f64,

    /// Segments between departure and destination (route has resolution + 1 points)
    pub waypoint_resolution: usize,

    pub interpolation: InterpolationMode,

    /// Seed for the placeholder efficiency scorer. Unset means OS entropy.
    pub efficiency_seed: Option<u64>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            average_speed_knots: DEFAULT_AVERAGE_SPEED_KNOTS,
            fuel_burn_rate_tons_per_nm: DEFAULT_FUEL_BURN_RATE_TONS_PER_NM,
            savings_per_nm: DEFAULT_SAVINGS_PER_NM,
            waypoint_resolution: DEFAULT_WAYPOINT_RESOLUTION,
            interpolation: InterpolationMode::default(),
            efficiency_seed: None,
        }
    }
}

impl EstimatorConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            average_speed_knots: env::var("AVERAGE_SPEED_KNOTS")
                .unwrap_or_else(|_| defaults.average_speed_knots.to_string())
                .parse()
                .map_err(|_| "Invalid AVERAGE_SPEED_KNOTS")?,

            fuel_burn_rate_tons_per_nm: env::var("FUEL_BURN_RATE_TONS_PER_NM")
                .unwrap_or_else(|_| defaults.fuel_burn_rate_tons_per_nm.to_string())
                .parse()
                .map_err(|_| "Invalid FUEL_BURN_RATE_TONS_PER_NM")?,

            savings_per_nm: env::var("SAVINGS_PER_NM")
                .unwrap_or_else(|_| defaults.savings_per_nm.to_string())
                .parse()
                .map_err(|_| "Invalid SAVINGS_PER_NM")?,

            waypoint_resolution: env::var("WAYPOINT_RESOLUTION")
                .unwrap_or_else(|_| defaults.waypoint_resolution.to_string())
                .parse()
                .map_err(|_| "Invalid WAYPOINT_RESOLUTION")?,

            interpolation: env::var("WAYPOINT_INTERPOLATION")
                .unwrap_or_else(|_| "linear".to_string())
                .parse()?,

            efficiency_seed: match env::var("EFFICIENCY_SEED") {
                Ok(seed) => Some(seed.parse().map_err(|_| "Invalid EFFICIENCY_SEED")?),
                Err(_) => None,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.average_speed_knots.is_finite() && self.average_speed_knots > 0.0) {
            return Err("AVERAGE_SPEED_KNOTS must be greater than 0".to_string());
        }
        if !(self.fuel_burn_rate_tons_per_nm.is_finite() && self.fuel_burn_rate_tons_per_nm >= 0.0)
        {
            return Err("FUEL_BURN_RATE_TONS_PER_NM must not be negative".to_string());
        }
        if !(self.savings_per_nm.is_finite() && self.savings_per_nm >= 0.0) {
            return Err("SAVINGS_PER_NM must not be negative".to_string());
        }
        if self.waypoint_resolution == 0 {
            return Err("WAYPOINT_RESOLUTION must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            database_url: env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            estimator: EstimatorConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation_mode_from_str() {
        assert_eq!(
            "linear".parse::<InterpolationMode>().unwrap(),
            InterpolationMode::Linear
        );
        assert_eq!(
            "GREAT_CIRCLE".parse::<InterpolationMode>().unwrap(),
            InterpolationMode::GreatCircle
        );
        assert_eq!(
            "great-circle".parse::<InterpolationMode>().unwrap(),
            InterpolationMode::GreatCircle
        );
        assert!("slerpy".parse::<InterpolationMode>().is_err());
    }

    #[test]
    fn test_estimator_defaults_are_valid() {
        let config = EstimatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.average_speed_knots, 20.0);
        assert_eq!(config.fuel_burn_rate_tons_per_nm, 0.05);
        assert_eq!(config.savings_per_nm, 2.5);
        assert_eq!(config.waypoint_resolution, 4);
        assert_eq!(config.interpolation, InterpolationMode::Linear);
    }

    #[test]
    fn test_estimator_validation() {
        let mut config = EstimatorConfig {
            average_speed_knots: 0.0,
            ..EstimatorConfig::default()
        };
        assert!(config.validate().is_err());

        config.average_speed_knots = 18.0;
        config.waypoint_resolution = 0;
        assert!(config.validate().is_err());

        config.waypoint_resolution = 8;
        config.fuel_burn_rate_tons_per_nm = -0.1;
        assert!(config.validate().is_err());
    }
}
