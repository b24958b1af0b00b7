//! Aggregate statistics over estimated scenarios.

use super::ReportRow;
use crate::core::SizeBucket;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaybackStats {
    pub count: usize,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl PaybackStats {
    /// `None` when there is nothing to average.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sum: f64 = values.iter().sum();
        Some(Self {
            count: values.len(),
            average: sum / values.len() as f64,
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSummary {
    pub bucket: SizeBucket,
    pub viable: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    /// Scenario names, in table order.
    pub viable: Vec<String>,
    pub non_viable: Vec<String>,
    pub payback: Option<PaybackStats>,
    pub buckets: Vec<BucketSummary>,
}

impl ReportSummary {
    pub fn viable_count(&self) -> usize {
        self.viable.len()
    }

    pub fn viable_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.viable.len() as f64 / self.total as f64 * 100.0
        }
    }
}

pub fn summarize(rows: &[ReportRow]) -> ReportSummary {
    let (viable, non_viable): (Vec<&ReportRow>, Vec<&ReportRow>) =
        rows.iter().partition(|row| row.result.is_viable);

    let paybacks: Vec<f64> = viable.iter().map(|row| row.result.payback_months).collect();

    ReportSummary {
        total: rows.len(),
        viable: names(&viable),
        non_viable: names(&non_viable),
        payback: PaybackStats::from_values(&paybacks),
        buckets: bucket_summaries(rows),
    }
}

fn names(rows: &[&ReportRow]) -> Vec<String> {
    rows.iter().map(|row| row.scenario.name.clone()).collect()
}

fn bucket_summaries(rows: &[ReportRow]) -> Vec<BucketSummary> {
    SizeBucket::ALL
        .iter()
        .map(|&bucket| {
            let in_bucket = rows
                .iter()
                .filter(|row| row.scenario.size_bucket() == bucket);
            let (total, viable) = in_bucket.fold((0, 0), |(total, viable), row| {
                (total + 1, viable + usize::from(row.result.is_viable))
            });
            BucketSummary {
                bucket,
                viable,
                total,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payback_stats_empty() {
        assert_eq!(PaybackStats::from_values(&[]), None);
    }

    #[test]
    fn test_payback_stats_values() {
        let stats = PaybackStats::from_values(&[3.9, 0.6, 0.0, 1.5]).unwrap();
        assert_eq!(stats.count, 4);
        assert!((stats.average - 1.5).abs() < 1e-9);
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 3.9);
    }
}
