use serde::{Deserialize, Serialize};
use std::fmt;

const KM_PER_NM: f64 = 1.852;

/// Distance in nautical miles
/// Keeps voyage maths from mixing nm with km
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DistanceNm(pub f64);

impl DistanceNm {
    pub fn new(nm: f64) -> Result<Self, String> {
        if nm < 0.0 {
            return Err("Distance cannot be negative".to_string());
        }
        if !nm.is_finite() {
            return Err("Distance must be a finite number".to_string());
        }
        Ok(DistanceNm(nm))
    }

    pub fn as_nm(self) -> f64 {
        self.0
    }

    pub fn to_km(self) -> f64 {
        self.0 * KM_PER_NM
    }

    /// Whole nautical miles, as reported on a voyage
    pub fn rounded(self) -> i64 {
        self.0.round() as i64
    }
}

impl fmt::Display for DistanceNm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}nm", self.0)
    }
}
