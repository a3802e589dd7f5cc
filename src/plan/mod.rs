//! Plan descriptor types and input validation

mod data;

pub use data::{InvalidPlanDescriptor, PlanDescriptor, PlanVariant, RiskTier, PLAN_HORIZON_AGE};
