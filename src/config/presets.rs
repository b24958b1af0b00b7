//! Named estimator policies.
//!
//! - **Conservative**: cautious labour rates and time savings, payback floored
//!   at one month above a savings threshold
//! - **Improved**: optimistic tiers, payback capped at 24 months
//!
//! # Example
//!
//! ```rust
//! use roi_estimator::config::PolicyPreset;
//!
//! let policy = PolicyPreset::Improved.policy();
//! assert_eq!(policy.name, "improved");
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::roi::{BaselinePolicy, EstimatorPolicy};

/// Preset estimator policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyPreset {
    /// Tiered constants favoring caution
    Conservative,
    /// Tiered constants favoring optimism, reported next to the original formula
    Improved,
}

impl PolicyPreset {
    pub fn policy(self) -> EstimatorPolicy {
        match self {
            PolicyPreset::Conservative => EstimatorPolicy::conservative(),
            PolicyPreset::Improved => EstimatorPolicy::improved(),
        }
    }

    /// Whether reports for this preset carry the original-formula column.
    pub fn baseline(self) -> Option<BaselinePolicy> {
        match self {
            PolicyPreset::Conservative => None,
            PolicyPreset::Improved => Some(BaselinePolicy::default()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyPreset::Conservative => "conservative",
            PolicyPreset::Improved => "improved",
        }
    }
}
