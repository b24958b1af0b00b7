//! Estimator policies: the tier tables and rules that distinguish one ROI
//! estimate from another.
//!
//! The formula in [`super::RoiEstimator`] is fixed; everything that varies
//! between the conservative and improved presets lives here as data.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Monthly subscription cost of the platform.
pub const DEFAULT_PLATFORM_COST: f64 = 199.0;

/// One bracket of a [`TierTable`]: applies when the looked-up value is
/// strictly below `below`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier<T> {
    pub below: f64,
    pub value: T,
}

/// Ascending threshold table. The first tier whose bound exceeds the
/// looked-up value wins; `otherwise` applies past the last bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable<T> {
    pub tiers: Vec<Tier<T>>,
    pub otherwise: T,
}

impl<T: Copy> TierTable<T> {
    pub fn new(tiers: Vec<(f64, T)>, otherwise: T) -> Self {
        Self {
            tiers: tiers
                .into_iter()
                .map(|(below, value)| Tier { below, value })
                .collect(),
            otherwise,
        }
    }

    pub fn lookup(&self, value: f64) -> T {
        self.tiers
            .iter()
            .find(|tier| value < tier.below)
            .map(|tier| tier.value)
            .unwrap_or(self.otherwise)
    }
}

/// Percentage of operating cost recovered from consolidated tooling, capped
/// at an absolute ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolsSavingsRate {
    pub rate: f64,
    pub cap: f64,
}

impl ToolsSavingsRate {
    pub const fn new(rate: f64, cap: f64) -> Self {
        Self { rate, cap }
    }

    pub fn apply(&self, costs: f64) -> f64 {
        (costs * self.rate).min(self.cap)
    }
}

/// How the payback period is derived from net monthly savings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaybackPolicy {
    /// Above `min_net_savings`, payback is `cost / net` but never shorter
    /// than `floor_months`. At or below it, payback is `fallback_months`.
    FloorAboveThreshold {
        min_net_savings: f64,
        floor_months: f64,
        fallback_months: f64,
    },
    /// Payback is `cost / net` capped at `horizon_months`; with no savings
    /// the horizon itself is reported.
    CappedAtHorizon { horizon_months: f64 },
}

impl PaybackPolicy {
    pub fn payback_months(&self, platform_cost: f64, net_monthly_savings: f64) -> f64 {
        match *self {
            PaybackPolicy::FloorAboveThreshold {
                min_net_savings,
                floor_months,
                fallback_months,
            } => {
                if net_monthly_savings > min_net_savings {
                    (platform_cost / net_monthly_savings).max(floor_months)
                } else {
                    fallback_months
                }
            }
            PaybackPolicy::CappedAtHorizon { horizon_months } => {
                if net_monthly_savings > 0.0 {
                    (platform_cost / net_monthly_savings).min(horizon_months)
                } else {
                    horizon_months
                }
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaybackPolicy::FloorAboveThreshold { .. } => "floor above threshold",
            PaybackPolicy::CappedAtHorizon { .. } => "capped at horizon",
        }
    }
}

/// Eligibility rule deciding whether a scenario is worth pursuing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViabilityRule {
    SavingsAndPayback {
        min_net_savings: f64,
        max_payback_months: f64,
    },
    SavingsAndCostRatio {
        min_net_savings: f64,
        max_cost_ratio_percent: f64,
    },
}

/// Unrounded figures a viability rule is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct ViabilityInputs {
    pub net_monthly_savings: f64,
    pub payback_months: f64,
    pub platform_cost_ratio: f64,
}

impl ViabilityRule {
    pub fn is_viable(&self, inputs: ViabilityInputs) -> bool {
        match *self {
            ViabilityRule::SavingsAndPayback {
                min_net_savings,
                max_payback_months,
            } => {
                inputs.net_monthly_savings >= min_net_savings
                    && inputs.payback_months <= max_payback_months
            }
            ViabilityRule::SavingsAndCostRatio {
                min_net_savings,
                max_cost_ratio_percent,
            } => {
                inputs.net_monthly_savings >= min_net_savings
                    && inputs.platform_cost_ratio <= max_cost_ratio_percent
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ViabilityRule::SavingsAndPayback {
                min_net_savings,
                max_payback_months,
            } => format!("net savings >= {min_net_savings} and payback <= {max_payback_months} months"),
            ViabilityRule::SavingsAndCostRatio {
                min_net_savings,
                max_cost_ratio_percent,
            } => format!(
                "net savings >= {min_net_savings} and platform cost <= {max_cost_ratio_percent}% of revenue"
            ),
        }
    }
}

/// Complete parameter set for one ROI estimate flavour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorPolicy {
    pub name: String,
    pub platform_cost: f64,
    /// Hourly labour rate, keyed by monthly revenue.
    pub hourly_rate: TierTable<u32>,
    /// Fraction of task hours the product frees up, keyed by monthly revenue.
    pub time_savings: TierTable<f64>,
    /// Tool consolidation savings, keyed by monthly operating cost.
    pub tools_savings: TierTable<ToolsSavingsRate>,
    pub payback: PaybackPolicy,
    pub viability: ViabilityRule,
}

impl EstimatorPolicy {
    /// Tiers that favour caution: lower labour rates, smaller time savings,
    /// and a payback floor of one month.
    pub fn conservative() -> Self {
        Self {
            name: "conservative".to_string(),
            platform_cost: DEFAULT_PLATFORM_COST,
            hourly_rate: TierTable::new(vec![(10_000.0, 60), (30_000.0, 80), (75_000.0, 100)], 120),
            time_savings: TierTable::new(
                vec![(15_000.0, 0.15), (50_000.0, 0.20), (100_000.0, 0.25)],
                0.30,
            ),
            tools_savings: TierTable::new(
                vec![
                    (3_000.0, ToolsSavingsRate::new(0.03, 100.0)),
                    (8_000.0, ToolsSavingsRate::new(0.05, 300.0)),
                    (15_000.0, ToolsSavingsRate::new(0.08, 600.0)),
                ],
                ToolsSavingsRate::new(0.10, 1_000.0),
            ),
            payback: PaybackPolicy::FloorAboveThreshold {
                min_net_savings: 50.0,
                floor_months: 1.0,
                fallback_months: 12.0,
            },
            viability: ViabilityRule::SavingsAndPayback {
                min_net_savings: 100.0,
                max_payback_months: 6.0,
            },
        }
    }

    /// Tiers that favour optimism, with payback capped at 24 months.
    pub fn improved() -> Self {
        Self {
            name: "improved".to_string(),
            platform_cost: DEFAULT_PLATFORM_COST,
            hourly_rate: TierTable::new(vec![(10_000.0, 80), (30_000.0, 100), (75_000.0, 120)], 140),
            time_savings: TierTable::new(
                vec![(15_000.0, 0.25), (50_000.0, 0.30), (100_000.0, 0.35)],
                0.40,
            ),
            tools_savings: TierTable::new(
                vec![
                    (3_000.0, ToolsSavingsRate::new(0.05, 200.0)),
                    (8_000.0, ToolsSavingsRate::new(0.08, 500.0)),
                    (15_000.0, ToolsSavingsRate::new(0.12, 1_000.0)),
                ],
                ToolsSavingsRate::new(0.15, 1_500.0),
            ),
            payback: PaybackPolicy::CappedAtHorizon {
                horizon_months: 24.0,
            },
            viability: ViabilityRule::SavingsAndCostRatio {
                min_net_savings: 50.0,
                max_cost_ratio_percent: 5.0,
            },
        }
    }

    pub fn with_platform_cost(mut self, platform_cost: f64) -> Self {
        self.platform_cost = platform_cost;
        self
    }
}

pub fn validate_platform_cost(platform_cost: f64) -> Result<()> {
    if platform_cost.is_finite() && platform_cost >= 0.0 {
        Ok(())
    } else {
        Err(Error::configuration(format!(
            "platform_cost must be a finite, non-negative number (got {platform_cost})"
        )))
    }
}
