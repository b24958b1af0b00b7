use serde::{Deserialize, Serialize};

/// Outcome of one ROI estimate, with every figure already rounded for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// Net monthly savings after the platform cost, never negative.
    pub monthly_savings: u64,
    pub annual_savings: u64,
    /// Hours per month freed up, one decimal.
    pub time_freed: f64,
    /// Months to recoup one month of platform cost, one decimal.
    pub payback_months: f64,
    pub time_cost_savings: u64,
    pub tools_savings: u64,
    /// Gross savings before the platform cost is subtracted.
    pub total_savings: u64,
    /// Platform cost as a percentage of revenue, two decimals.
    pub platform_cost_ratio: f64,
    pub hourly_rate: u32,
    pub time_savings_percent: u32,
    pub is_viable: bool,
}

