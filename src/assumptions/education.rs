//! Education cost bases and the inflation assumption

use serde::{Deserialize, Serialize};

/// Study region for the education cost forecast, in fixed display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    /// Azerbaijan (home market)
    Local,
    Europe,
    UnitedStates,
}

impl Region {
    /// All regions in the order they are reported
    pub const ALL: [Region; 3] = [Region::Local, Region::Europe, Region::UnitedStates];
}

/// Base university costs and the inflation rate applied to them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationAssumptions {
    /// Current annual tuition per region
    pub local_annual_cost: f64,
    pub europe_annual_cost: f64,
    pub us_annual_cost: f64,

    /// Degree length the 4-year figures are built from
    pub degree_years: f64,

    /// Average annual cost inflation
    pub inflation_rate: f64,
}

impl EducationAssumptions {
    pub fn default_illustrative() -> Self {
        Self {
            local_annual_cost: 8_000.0,
            europe_annual_cost: 25_000.0,
            us_annual_cost: 45_000.0,
            degree_years: 4.0,
            inflation_rate: 0.05,
        }
    }

    /// Current annual tuition for a region
    pub fn annual_cost(&self, region: Region) -> f64 {
        match region {
            Region::Local => self.local_annual_cost,
            Region::Europe => self.europe_annual_cost,
            Region::UnitedStates => self.us_annual_cost,
        }
    }

    /// Cost multiplier after `years` of inflation
    pub fn inflation_multiplier(&self, years: u32) -> f64 {
        (1.0 + self.inflation_rate).powi(years as i32)
    }
}
