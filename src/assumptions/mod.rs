//! Plan assumptions: expected returns, fund splits, education costs, insurance factors
//!
//! All rates and costs are fixed illustrative constants. There is no market
//! data feed; the tables here are the single source for every projection.

mod allocation;
mod education;
mod insurance;
mod returns;

pub use allocation::{AllocationTable, FundSplit};
pub use education::{EducationAssumptions, Region};
pub use insurance::InsuranceFactors;
pub use returns::{ReturnAssumptions, SafePlanSplit};

/// Container for all projection assumptions
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub returns: ReturnAssumptions,
    pub allocation: AllocationTable,
    pub education: EducationAssumptions,
    pub insurance: InsuranceFactors,
}

impl Assumptions {
    /// Create assumptions with the illustrative values used across the product
    pub fn default_illustrative() -> Self {
        Self {
            returns: ReturnAssumptions::default_illustrative(),
            allocation: AllocationTable::default_illustrative(),
            education: EducationAssumptions::default_illustrative(),
            insurance: InsuranceFactors::default_illustrative(),
        }
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_illustrative()
    }
}
