use super::{format_amount, format_delta, format_money, viable_label, OutputWriter};
use crate::report::{ComparisonReport, Report, ReportSummary};
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

/// Escape a value for use inside a table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_summary(&mut self, summary: &ReportSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Viable scenarios | {}/{} ({:.1}%) |",
            summary.viable_count(),
            summary.total,
            summary.viable_percent()
        )?;
        match &summary.payback {
            Some(payback) => {
                writeln!(
                    self.writer,
                    "| Average payback | {:.1} months |",
                    payback.average
                )?;
                writeln!(
                    self.writer,
                    "| Payback range | {:.1} - {:.1} months |",
                    payback.min, payback.max
                )?;
            }
            None => writeln!(self.writer, "| Average payback | n/a |")?,
        }
        for bucket in &summary.buckets {
            writeln!(
                self.writer,
                "| {} | {}/{} viable |",
                bucket.bucket.label(),
                bucket.viable,
                bucket.total
            )?;
        }
        writeln!(self.writer)?;

        if !summary.non_viable.is_empty() {
            writeln!(self.writer, "Not viable: {}", summary.non_viable.join(", "))?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let with_baseline = report.has_baseline();

        writeln!(self.writer, "# ROI Estimate: {} policy", report.policy)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Platform cost {}/month. Payback is {}. Viable when {}.",
            format_money(report.platform_cost),
            report.payback_policy,
            report.viability_rule
        )?;
        writeln!(self.writer)?;

        let original = if with_baseline { " Original |" } else { "" };
        let original_rule = if with_baseline { "---------:|" } else { "" };
        writeln!(
            self.writer,
            "| Scenario | Revenue | Rate | Save | Freed (h) | Monthly |{original} Annual | Payback (mo) | Cost % | Viable |"
        )?;
        writeln!(
            self.writer,
            "|----------|--------:|-----:|-----:|----------:|--------:|{original_rule}-------:|-------------:|-------:|--------|"
        )?;

        for row in &report.rows {
            let result = &row.result;
            let original = match (with_baseline, row.baseline) {
                (true, Some(value)) => format!(" {} |", format_amount(value)),
                (true, None) => " - |".to_string(),
                (false, _) => String::new(),
            };
            writeln!(
                self.writer,
                "| {} | {} | {} | {}% | {:.1} | {} |{} {} | {:.1} | {:.2} | {} |",
                escape_cell(&row.scenario.name),
                format_money(row.scenario.current_revenue),
                result.hourly_rate,
                result.time_savings_percent,
                result.time_freed,
                format_amount(result.monthly_savings),
                original,
                format_amount(result.annual_savings),
                result.payback_months,
                result.platform_cost_ratio,
                viable_label(result.is_viable)
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        self.write_summary(&report.summary)?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_comparison(&mut self, comparison: &ComparisonReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# ROI Comparison")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Scenario | Revenue | Conservative | Improved | Original | Delta | Conservative viable | Improved viable |"
        )?;
        writeln!(
            self.writer,
            "|----------|--------:|-------------:|---------:|---------:|------:|---------------------|-----------------|"
        )?;
        for row in &comparison.rows {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} | {} | {} | {} |",
                escape_cell(&row.name),
                format_money(row.current_revenue),
                format_amount(row.conservative.monthly_savings),
                format_amount(row.improved.monthly_savings),
                format_amount(row.baseline),
                format_delta(row.savings_delta()),
                viable_label(row.conservative.is_viable),
                viable_label(row.improved.is_viable)
            )?;
        }
        writeln!(self.writer)?;

        for report in [&comparison.conservative, &comparison.improved] {
            writeln!(self.writer, "## {} policy", report.policy)?;
            writeln!(self.writer)?;
            self.write_summary(&report.summary)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
