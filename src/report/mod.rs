//! Report assembly: pairs each scenario with its estimate and derives the
//! summary statistics that output writers render.

pub mod statistics;

use crate::core::ScenarioInput;
use crate::errors::Result;
use crate::roi::{BaselinePolicy, RoiEstimator, RoiResult};
use serde::Serialize;

pub use statistics::{summarize, BucketSummary, PaybackStats, ReportSummary};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub scenario: ScenarioInput,
    pub result: RoiResult,
    /// Net savings under the original flat formula, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub policy: String,
    pub platform_cost: f64,
    pub payback_policy: String,
    pub viability_rule: String,
    pub rows: Vec<ReportRow>,
    pub summary: ReportSummary,
}

impl Report {
    pub fn has_baseline(&self) -> bool {
        self.rows.iter().any(|row| row.baseline.is_some())
    }
}

/// Estimate every scenario and summarise the results.
///
/// The first invalid scenario aborts the whole report.
pub fn build_report(
    estimator: &RoiEstimator,
    scenarios: &[ScenarioInput],
    baseline: Option<&BaselinePolicy>,
) -> Result<Report> {
    let rows = scenarios
        .iter()
        .map(|scenario| -> Result<ReportRow> {
            let result = estimator.calculate(scenario)?;
            let baseline = baseline
                .map(|policy| policy.net_monthly_savings(scenario))
                .transpose()?;
            Ok(ReportRow {
                scenario: scenario.clone(),
                result,
                baseline,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let policy = estimator.policy();
    log::debug!(
        "Built {} report with {} rows",
        policy.name,
        rows.len()
    );

    Ok(Report {
        policy: policy.name.clone(),
        platform_cost: policy.platform_cost,
        payback_policy: policy.payback.name().to_string(),
        viability_rule: policy.viability.describe(),
        summary: summarize(&rows),
        rows,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub name: String,
    pub current_revenue: f64,
    pub conservative: RoiResult,
    pub improved: RoiResult,
    pub baseline: u64,
}

impl ComparisonRow {
    /// Improved minus conservative net monthly savings.
    pub fn savings_delta(&self) -> i64 {
        self.improved.monthly_savings as i64 - self.conservative.monthly_savings as i64
    }
}

/// Side-by-side view of two policies and the baseline over the same table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub rows: Vec<ComparisonRow>,
    pub conservative: Report,
    pub improved: Report,
}

pub fn build_comparison(
    conservative: &RoiEstimator,
    improved: &RoiEstimator,
    baseline: &BaselinePolicy,
    scenarios: &[ScenarioInput],
) -> Result<ComparisonReport> {
    let conservative_report = build_report(conservative, scenarios, None)?;
    let improved_report = build_report(improved, scenarios, Some(baseline))?;

    let rows = conservative_report
        .rows
        .iter()
        .zip(&improved_report.rows)
        .map(|(left, right)| ComparisonRow {
            name: left.scenario.name.clone(),
            current_revenue: left.scenario.current_revenue,
            conservative: left.result.clone(),
            improved: right.result.clone(),
            baseline: right.baseline.unwrap_or_default(),
        })
        .collect();

    Ok(ComparisonReport {
        rows,
        conservative: conservative_report,
        improved: improved_report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SizeBucket;
    use crate::scenarios::default_scenarios;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_conservative_default_report_summary() {
        let report =
            build_report(&RoiEstimator::conservative(), &default_scenarios(), None).unwrap();

        assert_eq!(report.policy, "conservative");
        assert!(!report.has_baseline());
        assert_eq!(report.summary.total, 10);
        assert_eq!(report.summary.viable_count(), 8);
        assert_eq!(
            report.summary.non_viable,
            vec!["Solo Consultant".to_string(), "Neighborhood Bakery".to_string()]
        );

        let payback = report.summary.payback.clone().unwrap();
        assert_eq!(payback.count, 8);
        assert_eq!(payback.min, 1.0);
        assert_eq!(payback.max, 1.0);

        assert_eq!(
            report.summary.buckets,
            vec![
                BucketSummary { bucket: SizeBucket::Micro, viable: 1, total: 3 },
                BucketSummary { bucket: SizeBucket::Small, viable: 4, total: 4 },
                BucketSummary { bucket: SizeBucket::Medium, viable: 3, total: 3 },
            ]
        );
    }

    #[test]
    fn test_improved_report_carries_baseline() {
        let report = build_report(
            &RoiEstimator::improved(),
            &default_scenarios(),
            Some(&BaselinePolicy::default()),
        )
        .unwrap();

        assert!(report.has_baseline());
        assert_eq!(report.summary.viable_count(), 10);
        assert!(report.summary.non_viable.is_empty());
        assert_eq!(report.rows[0].baseline, Some(701));
        assert_eq!(report.rows[9].baseline, Some(8_051));

        let payback = report.summary.payback.clone().unwrap();
        assert_eq!(payback.max, 3.9);
        assert_eq!(payback.min, 0.0);
    }

    #[test]
    fn test_no_viable_scenarios_has_no_payback_stats() {
        let scenarios = vec![ScenarioInput::new("Tiny", 1_000.0, 100.0, 1, 1.0)];
        let report = build_report(&RoiEstimator::conservative(), &scenarios, None).unwrap();
        assert_eq!(report.summary.viable_count(), 0);
        assert_eq!(report.summary.payback, None);
        assert_eq!(report.summary.viable_percent(), 0.0);
    }

    #[test]
    fn test_invalid_scenario_aborts_report() {
        let scenarios = vec![ScenarioInput::new("Zero", 0.0, 100.0, 1, 1.0)];
        assert!(build_report(&RoiEstimator::improved(), &scenarios, None).is_err());
    }

    #[test]
    fn test_comparison_rows_align() {
        let comparison = build_comparison(
            &RoiEstimator::conservative(),
            &RoiEstimator::improved(),
            &BaselinePolicy::default(),
            &default_scenarios(),
        )
        .unwrap();

        assert_eq!(comparison.rows.len(), 10);
        let last = comparison.rows.last().unwrap();
        assert_eq!(last.name, "Regional Distributor");
        assert_eq!(last.conservative.monthly_savings, 4_041);
        assert_eq!(last.improved.monthly_savings, 6_341);
        assert_eq!(last.baseline, 8_051);
        assert_eq!(last.savings_delta(), 2_300);
    }

    #[test]
    fn test_report_is_deterministic() {
        let build = || build_report(&RoiEstimator::improved(), &default_scenarios(), None).unwrap();
        assert_eq!(build(), build());
    }
}
