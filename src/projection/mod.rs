//! Year-by-year compounding projections for standard and safe plans

mod engine;
mod points;

pub use engine::{compound_monthly, ProjectionBuilder, ProjectionEngine, SafeBuilder, StandardBuilder};
pub use points::{BucketValues, FinalSplit, ProjectionPoint, ProjectionSeries};
