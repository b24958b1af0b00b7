//! The original, untiered savings formula, kept as a reference column.

use super::policy::{ToolsSavingsRate, DEFAULT_PLATFORM_COST};
use super::round_money;
use crate::core::ScenarioInput;
use crate::errors::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaselinePolicy {
    pub platform_cost: f64,
    pub hourly_rate: f64,
    pub time_savings: f64,
    pub tools_savings: ToolsSavingsRate,
}

impl Default for BaselinePolicy {
    fn default() -> Self {
        Self {
            platform_cost: DEFAULT_PLATFORM_COST,
            hourly_rate: 150.0,
            time_savings: 0.5,
            tools_savings: ToolsSavingsRate::new(0.15, 1_500.0),
        }
    }
}

impl BaselinePolicy {
    pub fn with_platform_cost(mut self, platform_cost: f64) -> Self {
        self.platform_cost = platform_cost;
        self
    }

    /// Net monthly savings under the flat formula, rounded.
    pub fn net_monthly_savings(&self, input: &ScenarioInput) -> Result<u64> {
        input.validate()?;

        let time_cost_savings = input.time_spent_hours * self.time_savings * self.hourly_rate;
        let total = time_cost_savings + self.tools_savings.apply(input.current_costs);

        Ok(round_money((total - self.platform_cost).max(0.0)))
    }
}
