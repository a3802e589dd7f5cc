//! Plan descriptor data structures matching the wizard output format

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Age at which the plan horizon ends and the funds become available
pub const PLAN_HORIZON_AGE: u32 = 18;

/// Risk tier of the investment plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Chart/badge color used by the dashboard for this tier
    pub fn display_color(&self) -> &'static str {
        match self {
            RiskTier::Low => "#10b981",
            RiskTier::Medium => "#f59e0b",
            RiskTier::High => "#ef4444",
        }
    }
}

/// Plan variant: whether contributions go to a single investment bucket
/// or are split into a guaranteed savings bucket plus an investment bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanVariant {
    /// 100% of contributions into the investment portfolio
    Standard,
    /// 60/40 split between guaranteed savings and the investment portfolio
    Safe,
}

/// Validation failure for a [`PlanDescriptor`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidPlanDescriptor {
    #[error("parent age must be positive, got {0}")]
    ParentAge(u32),

    #[error("child age must be between 0 and 10, got {0}")]
    ChildAge(u32),

    #[error("plan duration must be between 1 and {max} years for child age {child_age}, got {got}")]
    PlanDuration { child_age: u32, max: u32, got: u32 },

    #[error("monthly contribution must be a positive finite amount, got {0}")]
    MonthlyContribution(f64),
}

/// The plan created during the configuration wizard flow
///
/// The descriptor is pure input data: the engine never mutates it and
/// recomputes every derived figure from it on each call. Callers that accept
/// user input should run [`PlanDescriptor::validate`] at the boundary; the
/// calculation functions themselves stay total over any descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDescriptor {
    /// Age of the contributing parent
    pub parent_age: u32,

    /// Age of the child at plan start
    pub child_age: u32,

    /// Plan horizon in whole years
    pub plan_duration_years: u32,

    /// Level monthly contribution in whole-currency units
    pub monthly_contribution: f64,

    /// Risk tier driving the expected return and fund split
    pub risk_tier: RiskTier,

    /// Standard (single bucket) or safe (split bucket) plan
    pub plan_variant: PlanVariant,
}

impl PlanDescriptor {
    /// Total number of monthly contributions over the plan horizon
    pub fn total_months(&self) -> u32 {
        self.plan_duration_years * 12
    }

    /// Child's age at the end of the plan
    pub fn horizon_age(&self) -> u32 {
        self.child_age + self.plan_duration_years
    }

    /// Check the descriptor against the documented input ranges
    ///
    /// The wizard enforces these same ranges in its form controls; this is
    /// the fail-fast check for descriptors arriving from anywhere else
    /// (stored blobs, CLI arguments).
    pub fn validate(&self) -> Result<(), InvalidPlanDescriptor> {
        if self.parent_age == 0 {
            return Err(InvalidPlanDescriptor::ParentAge(self.parent_age));
        }
        if self.child_age > 10 {
            return Err(InvalidPlanDescriptor::ChildAge(self.child_age));
        }
        let max_duration = PLAN_HORIZON_AGE - self.child_age;
        if self.plan_duration_years == 0 || self.plan_duration_years > max_duration {
            return Err(InvalidPlanDescriptor::PlanDuration {
                child_age: self.child_age,
                max: max_duration,
                got: self.plan_duration_years,
            });
        }
        if !self.monthly_contribution.is_finite() || self.monthly_contribution <= 0.0 {
            return Err(InvalidPlanDescriptor::MonthlyContribution(
                self.monthly_contribution,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_plan() -> PlanDescriptor {
        PlanDescriptor {
            parent_age: 34,
            child_age: 2,
            plan_duration_years: 16,
            monthly_contribution: 200.0,
            risk_tier: RiskTier::Medium,
            plan_variant: PlanVariant::Standard,
        }
    }

    #[test]
    fn test_valid_plan_passes() {
        assert_eq!(base_plan().validate(), Ok(()));
    }

    #[test]
    fn test_duration_bounded_by_horizon_age() {
        let mut plan = base_plan();
        plan.child_age = 5;
        plan.plan_duration_years = 13;
        assert_eq!(plan.validate(), Ok(()));

        plan.plan_duration_years = 14;
        assert_eq!(
            plan.validate(),
            Err(InvalidPlanDescriptor::PlanDuration {
                child_age: 5,
                max: 13,
                got: 14,
            })
        );
    }

    #[test]
    fn test_rejects_non_positive_contribution() {
        let mut plan = base_plan();
        plan.monthly_contribution = 0.0;
        assert!(matches!(
            plan.validate(),
            Err(InvalidPlanDescriptor::MonthlyContribution(_))
        ));

        plan.monthly_contribution = f64::NAN;
        assert!(matches!(
            plan.validate(),
            Err(InvalidPlanDescriptor::MonthlyContribution(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_child_age() {
        let mut plan = base_plan();
        plan.child_age = 11;
        assert_eq!(plan.validate(), Err(InvalidPlanDescriptor::ChildAge(11)));
    }

    #[test]
    fn test_descriptor_json_round_trip() {
        let plan = base_plan();
        let blob = serde_json::to_string(&plan).unwrap();
        let restored: PlanDescriptor = serde_json::from_str(&blob).unwrap();
        assert_eq!(restored, plan);
    }
}
