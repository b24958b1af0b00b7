pub mod baseline;
pub mod models;
pub mod policy;

#[cfg(test)]
mod tests;

use crate::core::ScenarioInput;
use crate::errors::{Error, Result};

pub use baseline::BaselinePolicy;
pub use models::RoiResult;
pub use policy::{
    EstimatorPolicy, PaybackPolicy, Tier, TierTable, ToolsSavingsRate, ViabilityInputs,
    ViabilityRule, DEFAULT_PLATFORM_COST,
};

/// Upper bound on gross monthly savings; keeps the annual figure within `u64`.
pub const MAX_MONTHLY_SAVINGS: f64 = 1.0e12;

/// Evaluates scenarios against a single [`EstimatorPolicy`].
///
/// The estimator holds no mutable state; the same input always yields the
/// same [`RoiResult`].
#[derive(Clone, Debug)]
pub struct RoiEstimator {
    policy: EstimatorPolicy,
}

impl RoiEstimator {
    pub fn new(policy: EstimatorPolicy) -> Self {
        Self { policy }
    }

    pub fn conservative() -> Self {
        Self::new(EstimatorPolicy::conservative())
    }

    pub fn improved() -> Self {
        Self::new(EstimatorPolicy::improved())
    }

    pub fn policy(&self) -> &EstimatorPolicy {
        &self.policy
    }

    pub fn calculate(&self, input: &ScenarioInput) -> Result<RoiResult> {
        input.validate()?;

        let policy = &self.policy;
        let hourly_rate = policy.hourly_rate.lookup(input.current_revenue);
        let time_savings = policy.time_savings.lookup(input.current_revenue);

        let time_freed_hours = input.time_spent_hours * time_savings;
        let time_cost_savings = time_freed_hours * f64::from(hourly_rate);
        let tools_savings = policy
            .tools_savings
            .lookup(input.current_costs)
            .apply(input.current_costs);

        let total_savings = time_cost_savings + tools_savings;
        // Infinite products of huge hour counts land here too.
        if total_savings > MAX_MONTHLY_SAVINGS {
            return Err(Error::invalid_input(
                &input.name,
                "time_spent_hours",
                format!("yields savings beyond {MAX_MONTHLY_SAVINGS} per month"),
            ));
        }
        let net_monthly_savings = (total_savings - policy.platform_cost).max(0.0);
        let payback_months = policy
            .payback
            .payback_months(policy.platform_cost, net_monthly_savings);
        let platform_cost_ratio = policy.platform_cost / input.current_revenue * 100.0;

        let is_viable = policy.viability.is_viable(ViabilityInputs {
            net_monthly_savings,
            payback_months,
            platform_cost_ratio,
        });

        let monthly_savings = round_money(net_monthly_savings);

        Ok(RoiResult {
            monthly_savings,
            annual_savings: monthly_savings * 12,
            payback_months: round_to(payback_months, 1),
            time_freed: round_to(time_freed_hours, 1),
            time_cost_savings: round_money(time_cost_savings),
            tools_savings: round_money(tools_savings),
            total_savings: round_money(total_savings),
            platform_cost_ratio: round_to(platform_cost_ratio, 2),
            hourly_rate,
            time_savings_percent: (time_savings * 100.0).round() as u32,
            is_viable,
        })
    }

    /// Estimate every scenario in order, stopping at the first invalid one.
    pub fn calculate_all<'a>(
        &self,
        scenarios: &'a [ScenarioInput],
    ) -> Result<Vec<(&'a ScenarioInput, RoiResult)>> {
        scenarios
            .iter()
            .map(|input| self.calculate(input).map(|result| (input, result)))
            .collect()
    }
}

/// Round a non-negative amount to the nearest whole currency unit.
pub(crate) fn round_money(value: f64) -> u64 {
    value.max(0.0).round() as u64
}

/// Round to a fixed number of decimal places, ties away from zero.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
