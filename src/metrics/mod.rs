//! Derived scalar metrics computed from a plan projection
//!
//! Every function here is a pure mapping from the descriptor and the
//! assumption tables; nothing is cached between calls. Reported amounts are
//! rounded to whole currency units, intermediate math is not.

mod gap;

pub use gap::{future_value_annuity_factor, recommended_monthly_increase};

use crate::assumptions::Region;
use crate::plan::{PlanDescriptor, PlanVariant};
use crate::projection::{FinalSplit, ProjectionEngine};
use serde::{Deserialize, Serialize};

/// One fund line of the portfolio allocation breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAllocationEntry {
    /// Display name of the fund
    pub fund_name: String,

    /// Share of the invested amount, in whole percent
    pub percentage: f64,

    /// Monthly amount routed into this fund
    pub monthly_amount: f64,

    /// Chart color for this fund
    pub color: String,
}

/// Forecast university cost for one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationCostForecast {
    pub region: Region,

    /// Current annual tuition before inflation
    pub current_annual_cost: f64,

    /// Current full-degree cost (annual tuition times degree length)
    pub current_four_year_cost: f64,

    /// Full-degree cost after inflation over the forecast horizon
    pub projected_cost: f64,
}

/// Projected balance at the end of the plan
pub fn final_value(engine: &ProjectionEngine, plan: &PlanDescriptor) -> f64 {
    engine.project(plan).final_value()
}

/// Final savings/investment bucket balances for a safe plan
///
/// Zero-filled for standard plans, which carry no split.
pub fn final_split_values(engine: &ProjectionEngine, plan: &PlanDescriptor) -> FinalSplit {
    engine.project(plan).final_split()
}

/// Total amount paid in over the plan horizon
pub fn total_contributed(plan: &PlanDescriptor) -> f64 {
    plan.monthly_contribution * plan.plan_duration_years as f64 * 12.0
}

/// Net profit of the plan: projected final balance minus contributions
pub fn profit(engine: &ProjectionEngine, plan: &PlanDescriptor) -> f64 {
    final_value(engine, plan) - total_contributed(plan)
}

/// Profit as a percentage of contributions
///
/// Defined as 0 when nothing is contributed, so the figure stays usable for
/// zero-duration descriptors.
pub fn profit_percent(engine: &ProjectionEngine, plan: &PlanDescriptor) -> f64 {
    let contributed = total_contributed(plan);
    if contributed <= 0.0 {
        return 0.0;
    }
    profit(engine, plan) / contributed * 100.0
}

/// Life insurance coverage: projected final value plus the coverage buffer
pub fn insurance_coverage(engine: &ProjectionEngine, plan: &PlanDescriptor) -> f64 {
    let buffer = engine.assumptions().insurance.coverage_buffer;
    (final_value(engine, plan) * buffer).round()
}

/// Monthly life insurance premium from coverage and the parent's age band
pub fn insurance_premium(engine: &ProjectionEngine, plan: &PlanDescriptor) -> f64 {
    let coverage = insurance_coverage(engine, plan);
    let age_factor = engine.assumptions().insurance.age_factor(plan.parent_age);
    (coverage * age_factor / 12.0).round()
}

/// Monthly amount that actually reaches the investment portfolio
///
/// The full contribution for standard plans; only the investment share of
/// the split for safe plans.
pub fn effective_investment_contribution(engine: &ProjectionEngine, plan: &PlanDescriptor) -> f64 {
    match plan.plan_variant {
        PlanVariant::Standard => plan.monthly_contribution,
        PlanVariant::Safe => {
            plan.monthly_contribution
                * engine
                    .assumptions()
                    .returns
                    .safe_split
                    .investment_fraction()
        }
    }
}

/// Fund-by-fund breakdown of the monthly investment amount
///
/// Three entries in fixed order: US ETF, global index fund, tech fund.
pub fn portfolio_allocation(
    engine: &ProjectionEngine,
    plan: &PlanDescriptor,
) -> Vec<PortfolioAllocationEntry> {
    let split = engine.assumptions().allocation.split(plan.risk_tier);
    let monthly = effective_investment_contribution(engine, plan);

    let entry = |name: &str, percentage: f64, color: &str| PortfolioAllocationEntry {
        fund_name: name.to_string(),
        percentage,
        monthly_amount: (monthly * percentage / 100.0).round(),
        color: color.to_string(),
    };

    vec![
        entry("ABŞ ETF (S&P 500)", split.usa_etf, "#7F4CFF"),
        entry("Qlobal İndeks Fondu", split.global_index, "#3EC6FF"),
        entry("Texnologiya Fondu", split.tech_fund, "#f59e0b"),
    ]
}

/// Inflated full-degree costs for each study region after `years`
pub fn education_forecast(engine: &ProjectionEngine, years: u32) -> Vec<EducationCostForecast> {
    let education = &engine.assumptions().education;
    let multiplier = education.inflation_multiplier(years);

    Region::ALL
        .iter()
        .map(|&region| {
            let annual = education.annual_cost(region);
            EducationCostForecast {
                region,
                current_annual_cost: annual,
                current_four_year_cost: annual * education.degree_years,
                projected_cost: (annual * multiplier * education.degree_years).round(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::RiskTier;

    fn standard_plan() -> PlanDescriptor {
        PlanDescriptor {
            parent_age: 32,
            child_age: 0,
            plan_duration_years: 18,
            monthly_contribution: 200.0,
            risk_tier: RiskTier::Medium,
            plan_variant: PlanVariant::Standard,
        }
    }

    #[test]
    fn test_total_contributed_exact() {
        let plan = standard_plan();
        assert_eq!(total_contributed(&plan), 200.0 * 18.0 * 12.0);
        assert_eq!(total_contributed(&plan), 43_200.0);
    }

    #[test]
    fn test_profit_positive_for_standard_scenario() {
        let engine = ProjectionEngine::default();
        let plan = standard_plan();
        assert!(profit(&engine, &plan) > 0.0);
        assert!(profit_percent(&engine, &plan) > 0.0);
    }

    #[test]
    fn test_profit_percent_zero_duration_guard() {
        let engine = ProjectionEngine::default();
        let plan = PlanDescriptor {
            plan_duration_years: 0,
            ..standard_plan()
        };
        assert_eq!(profit_percent(&engine, &plan), 0.0);
    }

    #[test]
    fn test_insurance_coverage_applies_buffer() {
        let engine = ProjectionEngine::default();
        let plan = standard_plan();
        let expected = (final_value(&engine, &plan) * 1.2).round();
        assert_eq!(insurance_coverage(&engine, &plan), expected);
    }

    #[test]
    fn test_insurance_premium_age_boundary() {
        let engine = ProjectionEngine::default();
        let at_40 = PlanDescriptor {
            parent_age: 40,
            ..standard_plan()
        };
        let at_41 = PlanDescriptor {
            parent_age: 41,
            ..standard_plan()
        };

        let coverage = insurance_coverage(&engine, &at_40);
        assert_eq!(
            insurance_premium(&engine, &at_40),
            (coverage * 0.002 / 12.0).round()
        );
        assert_eq!(
            insurance_premium(&engine, &at_41),
            (coverage * 0.003 / 12.0).round()
        );
    }

    #[test]
    fn test_allocation_order_and_amounts() {
        let engine = ProjectionEngine::default();
        let allocation = portfolio_allocation(&engine, &standard_plan());

        assert_eq!(allocation.len(), 3);
        assert_eq!(allocation[0].percentage, 40.0);
        assert_eq!(allocation[1].percentage, 35.0);
        assert_eq!(allocation[2].percentage, 25.0);
        assert_eq!(allocation[0].monthly_amount, 80.0);
        assert_eq!(allocation[1].monthly_amount, 70.0);
        assert_eq!(allocation[2].monthly_amount, 50.0);
    }

    #[test]
    fn test_safe_plan_allocates_investment_share_only() {
        let engine = ProjectionEngine::default();
        let plan = PlanDescriptor {
            plan_variant: PlanVariant::Safe,
            ..standard_plan()
        };
        // 40% of 200 = 80 reaches the portfolio
        assert_eq!(effective_investment_contribution(&engine, &plan), 80.0);
        let allocation = portfolio_allocation(&engine, &plan);
        assert_eq!(allocation[0].monthly_amount, 32.0);
    }

    #[test]
    fn test_education_forecast_scenario() {
        let engine = ProjectionEngine::default();
        let forecast = education_forecast(&engine, 18);

        assert_eq!(forecast.len(), 3);
        assert_eq!(forecast[0].region, Region::Local);
        assert_eq!(forecast[0].current_annual_cost, 8_000.0);
        assert_eq!(forecast[0].current_four_year_cost, 32_000.0);
        assert_eq!(forecast[0].projected_cost, 77_012.0);
    }

    #[test]
    fn test_education_forecast_zero_years_uninflated() {
        let engine = ProjectionEngine::default();
        let forecast = education_forecast(&engine, 0);
        for entry in &forecast {
            assert_eq!(entry.projected_cost, entry.current_four_year_cost);
        }
    }

    #[test]
    fn test_metrics_idempotent() {
        let engine = ProjectionEngine::default();
        let plan = standard_plan();
        assert_eq!(final_value(&engine, &plan), final_value(&engine, &plan));
        assert_eq!(
            insurance_premium(&engine, &plan),
            insurance_premium(&engine, &plan)
        );
        assert_eq!(
            portfolio_allocation(&engine, &plan),
            portfolio_allocation(&engine, &plan)
        );
    }
}
