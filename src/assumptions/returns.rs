//! Expected return assumptions per risk tier and the safe-plan split

use crate::plan::RiskTier;
use serde::{Deserialize, Serialize};

/// Contribution split for the safe plan variant, in whole percent
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SafePlanSplit {
    pub savings_percent: f64,
    pub investment_percent: f64,
}

impl SafePlanSplit {
    /// Savings share as a fraction of the monthly contribution
    pub fn savings_fraction(&self) -> f64 {
        self.savings_percent / 100.0
    }

    /// Investment share as a fraction of the monthly contribution
    pub fn investment_fraction(&self) -> f64 {
        self.investment_percent / 100.0
    }
}

/// Expected annual returns and crediting rates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnAssumptions {
    /// Expected annual return per risk tier, in whole percent
    pub expected_return_pct_low: f64,
    pub expected_return_pct_medium: f64,
    pub expected_return_pct_high: f64,

    /// Contribution split for the safe variant
    pub safe_split: SafePlanSplit,

    /// Fixed annual rate credited to the safe-plan savings bucket
    pub safe_savings_annual_rate: f64,
}

impl ReturnAssumptions {
    pub fn default_illustrative() -> Self {
        Self {
            expected_return_pct_low: 6.0,
            expected_return_pct_medium: 9.0,
            expected_return_pct_high: 13.0,
            safe_split: SafePlanSplit {
                savings_percent: 60.0,
                investment_percent: 40.0,
            },
            safe_savings_annual_rate: 0.05,
        }
    }

    /// Expected annual return for a tier, in whole percent
    pub fn expected_return_pct(&self, tier: RiskTier) -> f64 {
        match tier {
            RiskTier::Low => self.expected_return_pct_low,
            RiskTier::Medium => self.expected_return_pct_medium,
            RiskTier::High => self.expected_return_pct_high,
        }
    }

    /// Expected annual return for a tier, as a rate
    pub fn annual_rate(&self, tier: RiskTier) -> f64 {
        self.expected_return_pct(tier) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_rates() {
        let returns = ReturnAssumptions::default_illustrative();
        assert_eq!(returns.annual_rate(RiskTier::Low), 0.06);
        assert_eq!(returns.annual_rate(RiskTier::Medium), 0.09);
        assert_eq!(returns.annual_rate(RiskTier::High), 0.13);
    }

    #[test]
    fn test_safe_split_fractions_sum_to_one() {
        let split = ReturnAssumptions::default_illustrative().safe_split;
        assert_eq!(split.savings_fraction() + split.investment_fraction(), 1.0);
    }
}
