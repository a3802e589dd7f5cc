//! Projection output structures

use serde::{Deserialize, Serialize};

/// Bucket balances for a safe-plan projection point
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketValues {
    /// Guaranteed savings bucket balance
    pub savings: f64,
    /// Market-linked investment bucket balance
    pub investment: f64,
}

/// One annual snapshot of the projection
///
/// Values are rounded to the nearest whole currency unit when the point is
/// emitted; the running balances behind them stay unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Years since plan start (0 = at inception, before any contribution)
    pub year: u32,

    /// Child's age at this point
    pub age: u32,

    /// Cumulative contributions paid in so far
    pub contributed: f64,

    /// Projected balance at this point
    pub projected: f64,

    /// Safe-plan bucket balances; `None` for standard plans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<BucketValues>,
}

/// Final bucket balances plus their total for a safe plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalSplit {
    pub savings: f64,
    pub investment: f64,
    pub total: f64,
}

impl FinalSplit {
    pub const ZERO: FinalSplit = FinalSplit {
        savings: 0.0,
        investment: 0.0,
        total: 0.0,
    };
}

/// Complete projection output: one point per year, inception included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last annual snapshot, if any
    pub fn final_point(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// Projected balance at the end of the plan, 0 for an empty series
    pub fn final_value(&self) -> f64 {
        self.final_point().map(|p| p.projected).unwrap_or(0.0)
    }

    /// Final bucket balances for a safe plan, zero-filled when the series is
    /// empty or carries no split
    pub fn final_split(&self) -> FinalSplit {
        match self.final_point() {
            Some(point) => match point.split {
                Some(split) => FinalSplit {
                    savings: split.savings,
                    investment: split.investment,
                    total: point.projected,
                },
                None => FinalSplit::ZERO,
            },
            None => FinalSplit::ZERO,
        }
    }
}

impl Default for ProjectionSeries {
    fn default() -> Self {
        Self::new()
    }
}
