//! Core projection engine for monthly compounding simulations

use super::points::{BucketValues, ProjectionPoint, ProjectionSeries};
use crate::assumptions::{Assumptions, ReturnAssumptions};
use crate::plan::{PlanDescriptor, PlanVariant};

/// Future value after `months` of monthly contributions and compound growth
///
/// End-of-period compounding with the contribution added before growth, so a
/// contribution earns its own period's growth immediately. The iterative loop
/// is the authoritative definition; closed-form annuity formulas produce a
/// different timing result and must not be substituted here.
pub fn compound_monthly(
    principal: f64,
    annual_rate: f64,
    months: u32,
    monthly_contribution: f64,
) -> f64 {
    let monthly_rate = annual_rate / 12.0;
    let mut value = principal;
    for _month in 0..months {
        value = (value + monthly_contribution) * (1.0 + monthly_rate);
    }
    value
}

/// Strategy producing the annual projection series for one plan variant
///
/// Both strategies emit `plan_duration_years + 1` points: the snapshot for
/// year `n` captures the state before that year's 12 monthly steps are
/// applied, then the balances advance by a year before the next snapshot.
pub trait ProjectionBuilder {
    fn build(&self, plan: &PlanDescriptor) -> ProjectionSeries;
}

/// Single-bucket projection: the full contribution compounds at the risk
/// tier's expected return
pub struct StandardBuilder<'a> {
    returns: &'a ReturnAssumptions,
}

impl<'a> StandardBuilder<'a> {
    pub fn new(returns: &'a ReturnAssumptions) -> Self {
        Self { returns }
    }
}

impl ProjectionBuilder for StandardBuilder<'_> {
    fn build(&self, plan: &PlanDescriptor) -> ProjectionSeries {
        let annual_rate = self.returns.annual_rate(plan.risk_tier);
        let mut series = ProjectionSeries::with_capacity(plan.plan_duration_years as usize + 1);

        let mut contributed = 0.0_f64;
        let mut value = 0.0_f64;

        for year in 0..=plan.plan_duration_years {
            series.push(ProjectionPoint {
                year,
                age: plan.child_age + year,
                contributed: contributed.round(),
                projected: value.round(),
                split: None,
            });

            value = compound_monthly(value, annual_rate, 12, plan.monthly_contribution);
            contributed += plan.monthly_contribution * 12.0;
        }

        series
    }
}

/// Split-bucket projection: 60% of the contribution compounds at the fixed
/// savings rate, 40% at the risk tier's expected return
pub struct SafeBuilder<'a> {
    returns: &'a ReturnAssumptions,
}

impl<'a> SafeBuilder<'a> {
    pub fn new(returns: &'a ReturnAssumptions) -> Self {
        Self { returns }
    }
}

impl ProjectionBuilder for SafeBuilder<'_> {
    fn build(&self, plan: &PlanDescriptor) -> ProjectionSeries {
        let split = self.returns.safe_split;
        let savings_contribution = plan.monthly_contribution * split.savings_fraction();
        let investment_contribution = plan.monthly_contribution * split.investment_fraction();
        let investment_rate = self.returns.annual_rate(plan.risk_tier);
        let savings_rate = self.returns.safe_savings_annual_rate;

        let mut series = ProjectionSeries::with_capacity(plan.plan_duration_years as usize + 1);

        // Contributions are tracked at the full monthly amount, not per bucket
        let mut contributed = 0.0_f64;
        let mut savings = 0.0_f64;
        let mut investment = 0.0_f64;

        for year in 0..=plan.plan_duration_years {
            series.push(ProjectionPoint {
                year,
                age: plan.child_age + year,
                contributed: contributed.round(),
                projected: (savings + investment).round(),
                split: Some(BucketValues {
                    savings: savings.round(),
                    investment: investment.round(),
                }),
            });

            savings = compound_monthly(savings, savings_rate, 12, savings_contribution);
            investment = compound_monthly(investment, investment_rate, 12, investment_contribution);
            contributed += plan.monthly_contribution * 12.0;
        }

        series
    }
}

/// Main projection engine
///
/// Stateless apart from the assumption tables: every call recomputes the
/// series from the descriptor, so results are safe to memoize and safe to
/// request from any number of threads.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given assumptions
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Get reference to the underlying assumptions
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Select the builder strategy for a plan variant
    pub fn builder_for(&self, variant: PlanVariant) -> Box<dyn ProjectionBuilder + '_> {
        match variant {
            PlanVariant::Standard => Box::new(StandardBuilder::new(&self.assumptions.returns)),
            PlanVariant::Safe => Box::new(SafeBuilder::new(&self.assumptions.returns)),
        }
    }

    /// Run the variant-appropriate projection for a plan
    pub fn project(&self, plan: &PlanDescriptor) -> ProjectionSeries {
        self.builder_for(plan.plan_variant).build(plan)
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(Assumptions::default_illustrative())
    }
}
