use crate::config::EstimatorConfig;
use crate::constants::{EFFICIENCY_BASE, EFFICIENCY_SPREAD};
use crate::models::DistanceNm;
use rand::distr::{Distribution, StandardUniform};
use rand::{rngs::StdRng, SeedableRng};
use std::sync::{Arc, Mutex};

/// Produces the efficiency percentage recorded on a voyage.
pub trait EfficiencyScorer: Send + Sync {
    fn score(&self, distance: DistanceNm) -> i64;

    fn name(&self) -> &'static str;
}

/// Stand-in score until a real efficiency model exists: a value in
/// [EFFICIENCY_BASE, EFFICIENCY_BASE + EFFICIENCY_SPREAD), independent of the route.
///
/// The spread is not even. Rounding gives each end half a bucket, and the
/// draws that would round up to 95 are folded onto 94, so 80 comes up with
/// weight 0.5/15, 81..=93 with 1/15 each and 94 with 1.5/15.
pub struct PlaceholderScorer {
    // None draws from the thread-local generator
    rng: Option<Mutex<StdRng>>,
}

impl PlaceholderScorer {
    pub fn new() -> Self {
        PlaceholderScorer { rng: None }
    }

    pub fn seeded(seed: u64) -> Self {
        PlaceholderScorer {
            rng: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    fn draw(&self) -> f64 {
        match &self.rng {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|e| e.into_inner());
                StandardUniform.sample(&mut *rng)
            }
            None => StandardUniform.sample(&mut rand::rng()),
        }
    }
}

impl Default for PlaceholderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl EfficiencyScorer for PlaceholderScorer {
    fn score(&self, _distance: DistanceNm) -> i64 {
        let raw = (EFFICIENCY_BASE + self.draw() * EFFICIENCY_SPREAD).round();
        // round() alone would let the top of the band reach BASE + SPREAD
        raw.min(EFFICIENCY_BASE + EFFICIENCY_SPREAD - 1.0) as i64
    }

    fn name(&self) -> &'static str {
        "placeholder"
    }
}

/// Always reports the same score
pub struct FixedScorer(pub i64);

impl EfficiencyScorer for FixedScorer {
    fn score(&self, _distance: DistanceNm) -> i64 {
        self.0
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Derived figures for one voyage, all rounded to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoyageEstimate {
    pub estimated_time_hours: i64,
    pub fuel_consumption_tons: i64,
    pub savings: i64,
    pub efficiency: i64,
}

#[derive(Clone)]
pub struct VoyageEstimator {
    average_speed_knots: f64,
    fuel_burn_rate_tons_per_nm: f64,
    savings_per_nm: f64,
    scorer: Arc<dyn EfficiencyScorer>,
}

impl VoyageEstimator {
    pub fn new(config: &EstimatorConfig, scorer: Arc<dyn EfficiencyScorer>) -> Self {
        VoyageEstimator {
            average_speed_knots: config.average_speed_knots,
            fuel_burn_rate_tons_per_nm: config.fuel_burn_rate_tons_per_nm,
            savings_per_nm: config.savings_per_nm,
            scorer,
        }
    }

    /// Estimator with the placeholder scorer, seeded when the config asks for it.
    pub fn from_config(config: &EstimatorConfig) -> Self {
        let scorer: Arc<dyn EfficiencyScorer> = match config.efficiency_seed {
            Some(seed) => Arc::new(PlaceholderScorer::seeded(seed)),
            None => Arc::new(PlaceholderScorer::new()),
        };
        Self::new(config, scorer)
    }

    pub fn estimate(&self, distance: DistanceNm) -> VoyageEstimate {
        let nm = distance.as_nm();
        VoyageEstimate {
            estimated_time_hours: (nm / self.average_speed_knots).round() as i64,
            fuel_consumption_tons: (nm * self.fuel_burn_rate_tons_per_nm).round() as i64,
            savings: (nm * self.savings_per_nm).round() as i64,
            efficiency: self.scorer.score(distance),
        }
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }
}
