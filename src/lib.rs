//! Child Plan Engine - projection and advisory engine for child investment savings plans
//!
//! This library provides:
//! - Year-by-year compounding projections for standard and split ("safe") plans
//! - Derived financial metrics (insurance coverage, portfolio allocation, education costs)
//! - Annuity-based gap solving for contribution recommendations
//! - Rule-based advisory text generation in Azerbaijani and English
//!
//! Every function is a pure mapping from a [`PlanDescriptor`] and the fixed
//! assumption tables; the engine holds no mutable state and performs no I/O.

pub mod advisor;
pub mod assumptions;
pub mod metrics;
pub mod plan;
pub mod projection;

// Re-export commonly used types
pub use advisor::Lang;
pub use assumptions::Assumptions;
pub use plan::{InvalidPlanDescriptor, PlanDescriptor, PlanVariant, RiskTier};
pub use projection::{ProjectionEngine, ProjectionPoint, ProjectionSeries};
