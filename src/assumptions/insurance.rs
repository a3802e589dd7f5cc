//! Life insurance coverage and premium factors

use serde::{Deserialize, Serialize};

/// Simplified underwriting factors for the bundled life cover
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsuranceFactors {
    /// Coverage buffer applied on top of the projected final value
    pub coverage_buffer: f64,

    /// Annual premium factor when the parent is over 40
    pub age_factor_over_40: f64,

    /// Annual premium factor when the parent is over 30
    pub age_factor_over_30: f64,

    /// Annual premium factor for parents 30 and under
    pub age_factor_base: f64,
}

impl InsuranceFactors {
    pub fn default_illustrative() -> Self {
        Self {
            coverage_buffer: 1.2,
            age_factor_over_40: 0.003,
            age_factor_over_30: 0.002,
            age_factor_base: 0.0015,
        }
    }

    /// Premium factor for the parent's age band
    ///
    /// The bands are exclusive on their lower edge: age 40 still falls in the
    /// over-30 band, age 41 in the over-40 band.
    pub fn age_factor(&self, parent_age: u32) -> f64 {
        if parent_age > 40 {
            self.age_factor_over_40
        } else if parent_age > 30 {
            self.age_factor_over_30
        } else {
            self.age_factor_base
        }
    }
}
