//! Child Plan Engine CLI
//!
//! Command-line interface for projecting a child investment savings plan and
//! printing the derived metrics and advisory output. The plan descriptor can
//! be given as flags or loaded from the JSON blob the wizard stores.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use child_plan_engine::advisor::{
    self, format_manat, plan_variant_label, risk_label, Lang,
};
use child_plan_engine::metrics;
use child_plan_engine::{PlanDescriptor, PlanVariant, ProjectionEngine, RiskTier};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RiskArg {
    Low,
    Medium,
    High,
}

impl From<RiskArg> for RiskTier {
    fn from(arg: RiskArg) -> Self {
        match arg {
            RiskArg::Low => RiskTier::Low,
            RiskArg::Medium => RiskTier::Medium,
            RiskArg::High => RiskTier::High,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    Standard,
    Safe,
}

impl From<VariantArg> for PlanVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Standard => PlanVariant::Standard,
            VariantArg::Safe => PlanVariant::Safe,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LangArg {
    Az,
    En,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Az => Lang::Az,
            LangArg::En => Lang::En,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "child_plan_engine", version, about = "Project a child investment savings plan")]
struct Args {
    /// Load the plan descriptor from a saved JSON blob instead of flags
    #[arg(long, value_name = "FILE")]
    plan_file: Option<PathBuf>,

    /// Age of the contributing parent
    #[arg(long, default_value_t = 34)]
    parent_age: u32,

    /// Age of the child at plan start
    #[arg(long, default_value_t = 0)]
    child_age: u32,

    /// Plan horizon in years
    #[arg(long, default_value_t = 18)]
    duration: u32,

    /// Monthly contribution in manat
    #[arg(long, default_value_t = 200.0)]
    monthly: f64,

    /// Risk tier
    #[arg(long, value_enum, default_value_t = RiskArg::Medium)]
    risk: RiskArg,

    /// Plan variant
    #[arg(long, value_enum, default_value_t = VariantArg::Standard)]
    variant: VariantArg,

    /// Advisory language
    #[arg(long, value_enum, default_value_t = LangArg::Az)]
    lang: LangArg,

    /// Ask the advisor a free-text question and print only its answer
    #[arg(long, value_name = "QUESTION")]
    ask: Option<String>,

    /// Emit one JSON document instead of formatted tables
    #[arg(long)]
    json: bool,
}

fn load_plan(args: &Args) -> Result<PlanDescriptor> {
    let plan = match &args.plan_file {
        Some(path) => {
            let blob = std::fs::read_to_string(path)
                .with_context(|| format!("reading plan blob {}", path.display()))?;
            serde_json::from_str(&blob)
                .with_context(|| format!("parsing plan blob {}", path.display()))?
        }
        None => PlanDescriptor {
            parent_age: args.parent_age,
            child_age: args.child_age,
            plan_duration_years: args.duration,
            monthly_contribution: args.monthly,
            risk_tier: args.risk.into(),
            plan_variant: args.variant.into(),
        },
    };

    plan.validate().context("invalid plan descriptor")?;
    Ok(plan)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let lang: Lang = args.lang.into();
    let plan = load_plan(&args)?;

    log::info!(
        "projecting {:?}/{:?} plan over {} years at {}/month",
        plan.plan_variant,
        plan.risk_tier,
        plan.plan_duration_years,
        plan.monthly_contribution
    );

    let engine = ProjectionEngine::default();
    let series = engine.project(&plan);

    if let Some(question) = &args.ask {
        println!("{}", advisor::answer_query(&engine, &plan, lang, question));
        return Ok(());
    }

    let insights = advisor::generate_insights(&engine, &plan, lang);
    let suggestions = advisor::post_horizon_suggestions(&engine, &plan, lang);

    if args.json {
        let document = serde_json::json!({
            "plan": plan,
            "projection": series,
            "metrics": {
                "final_value": metrics::final_value(&engine, &plan),
                "final_split": metrics::final_split_values(&engine, &plan),
                "total_contributed": metrics::total_contributed(&plan),
                "profit": metrics::profit(&engine, &plan),
                "profit_percent": metrics::profit_percent(&engine, &plan),
                "insurance_coverage": metrics::insurance_coverage(&engine, &plan),
                "insurance_premium": metrics::insurance_premium(&engine, &plan),
                "portfolio_allocation": metrics::portfolio_allocation(&engine, &plan),
                "education_forecast": metrics::education_forecast(&engine, plan.plan_duration_years),
            },
            "insights": insights,
            "post_horizon_suggestions": suggestions,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    println!("Child Plan Engine v{}", env!("CARGO_PKG_VERSION"));
    println!("=======================\n");

    println!("Plan: {}", plan_variant_label(plan.plan_variant, lang));
    println!("  Risk tier: {}", risk_label(plan.risk_tier, lang));
    println!("  Parent age: {}", plan.parent_age);
    println!("  Child age: {}", plan.child_age);
    println!("  Duration: {} years", plan.plan_duration_years);
    println!("  Monthly: {}", format_manat(plan.monthly_contribution));
    println!();

    match plan.plan_variant {
        PlanVariant::Safe => {
            println!(
                "{:>4} {:>4} {:>14} {:>14} {:>14} {:>14}",
                "Year", "Age", "Contributed", "Savings", "Investment", "Projected"
            );
            println!("{}", "-".repeat(70));
            for point in &series.points {
                let split = point.split.unwrap_or_default();
                println!(
                    "{:>4} {:>4} {:>14} {:>14} {:>14} {:>14}",
                    point.year,
                    point.age,
                    format_manat(point.contributed),
                    format_manat(split.savings),
                    format_manat(split.investment),
                    format_manat(point.projected),
                );
            }
        }
        PlanVariant::Standard => {
            println!(
                "{:>4} {:>4} {:>14} {:>14}",
                "Year", "Age", "Contributed", "Projected"
            );
            println!("{}", "-".repeat(40));
            for point in &series.points {
                println!(
                    "{:>4} {:>4} {:>14} {:>14}",
                    point.year,
                    point.age,
                    format_manat(point.contributed),
                    format_manat(point.projected),
                );
            }
        }
    }

    println!();
    println!("Final value:        {}", format_manat(metrics::final_value(&engine, &plan)));
    println!("Total contributed:  {}", format_manat(metrics::total_contributed(&plan)));
    println!("Net profit:         {}", format_manat(metrics::profit(&engine, &plan)));
    println!("Insurance coverage: {}", format_manat(metrics::insurance_coverage(&engine, &plan)));
    println!("Insurance premium:  {}/month", format_manat(metrics::insurance_premium(&engine, &plan)));

    println!("\nPortfolio allocation:");
    for entry in metrics::portfolio_allocation(&engine, &plan) {
        println!(
            "  {:<24} {:>5.0}%  {:>10}/month",
            entry.fund_name,
            entry.percentage,
            format_manat(entry.monthly_amount),
        );
    }

    println!("\nInsights:");
    for insight in &insights {
        println!("  - {insight}");
    }

    println!("\nAfter the plan:");
    for suggestion in &suggestions {
        println!("  {} {}: {}", suggestion.icon, suggestion.title, suggestion.description);
    }

    Ok(())
}
