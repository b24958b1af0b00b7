//! Core input types shared by estimators, scenario sources and reports.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Revenue boundary between micro and small businesses.
pub const MICRO_REVENUE_LIMIT: f64 = 15_000.0;
/// Revenue boundary between small and medium businesses.
pub const SMALL_REVENUE_LIMIT: f64 = 50_000.0;

/// A hypothetical business profile evaluated by an estimator.
///
/// All monetary values are monthly and share one currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub name: String,
    pub current_revenue: f64,
    pub current_costs: f64,
    /// Carried through to reports; not used by the formula.
    pub team_size: u32,
    pub time_spent_hours: f64,
}

impl ScenarioInput {
    pub fn new(
        name: impl Into<String>,
        current_revenue: f64,
        current_costs: f64,
        team_size: u32,
        time_spent_hours: f64,
    ) -> Self {
        Self {
            name: name.into(),
            current_revenue,
            current_costs,
            team_size,
            time_spent_hours,
        }
    }

    /// Reject inputs the estimator formulas are not defined for.
    ///
    /// Zero revenue is rejected because the platform cost ratio divides by it.
    pub fn validate(&self) -> Result<()> {
        require_non_negative(&self.name, "current_revenue", self.current_revenue)?;
        if self.current_revenue == 0.0 {
            return Err(Error::invalid_input(
                &self.name,
                "current_revenue",
                "must be greater than zero",
            ));
        }
        require_non_negative(&self.name, "current_costs", self.current_costs)?;
        require_non_negative(&self.name, "time_spent_hours", self.time_spent_hours)?;
        if self.team_size == 0 {
            return Err(Error::invalid_input(
                &self.name,
                "team_size",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn size_bucket(&self) -> SizeBucket {
        SizeBucket::for_revenue(self.current_revenue)
    }
}

fn require_non_negative(scenario: &str, field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::invalid_input(
            scenario,
            field,
            format!("must be a finite number (got {value})"),
        ));
    }
    if value < 0.0 {
        return Err(Error::invalid_input(
            scenario,
            field,
            format!("must not be negative (got {value})"),
        ));
    }
    Ok(())
}

/// Revenue-based business size used to group report statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeBucket {
    Micro,
    Small,
    Medium,
}

impl SizeBucket {
    pub const ALL: [SizeBucket; 3] = [SizeBucket::Micro, SizeBucket::Small, SizeBucket::Medium];

    pub fn for_revenue(revenue: f64) -> Self {
        match revenue {
            r if r < MICRO_REVENUE_LIMIT => SizeBucket::Micro,
            r if r < SMALL_REVENUE_LIMIT => SizeBucket::Small,
            _ => SizeBucket::Medium,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeBucket::Micro => "Micro (<15K)",
            SizeBucket::Small => "Small (15K-50K)",
            SizeBucket::Medium => "Medium (50K+)",
        }
    }
}
