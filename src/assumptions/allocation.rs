//! Portfolio fund-split tables per risk tier

use crate::plan::RiskTier;
use serde::{Deserialize, Serialize};

/// Percentage split across the three model funds, summing to 100
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FundSplit {
    pub usa_etf: f64,
    pub global_index: f64,
    pub tech_fund: f64,
}

/// Fund-split table keyed by risk tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationTable {
    pub low: FundSplit,
    pub medium: FundSplit,
    pub high: FundSplit,
}

impl AllocationTable {
    pub fn default_illustrative() -> Self {
        Self {
            low: FundSplit {
                usa_etf: 60.0,
                global_index: 30.0,
                tech_fund: 10.0,
            },
            medium: FundSplit {
                usa_etf: 40.0,
                global_index: 35.0,
                tech_fund: 25.0,
            },
            high: FundSplit {
                usa_etf: 25.0,
                global_index: 25.0,
                tech_fund: 50.0,
            },
        }
    }

    /// Fund split for the given risk tier
    pub fn split(&self, tier: RiskTier) -> &FundSplit {
        match tier {
            RiskTier::Low => &self.low,
            RiskTier::Medium => &self.medium,
            RiskTier::High => &self.high,
        }
    }
}
