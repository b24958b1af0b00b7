use super::{format_amount, format_delta, format_money, viable_label, OutputWriter};
use crate::formatting::{create_style, FormattingConfig, ReportStyle};
use crate::report::{ComparisonReport, ComparisonRow, Report, ReportRow, ReportSummary};
use std::io::Write;

const NAME_WIDTH: usize = 24;

pub struct TerminalWriter<W: Write> {
    writer: W,
    style: Box<dyn ReportStyle>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            style: create_style(config),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let output = format_report(report, self.style.as_ref());
        self.writer.write_all(output.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_comparison(&mut self, comparison: &ComparisonReport) -> anyhow::Result<()> {
        let output = format_comparison(comparison, self.style.as_ref());
        self.writer.write_all(output.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn format_report(report: &Report, style: &dyn ReportStyle) -> String {
    let with_baseline = report.has_baseline();
    let mut out = String::new();

    out.push_str(&style.title(&format!("ROI Estimate ({} policy)", report.policy)));
    out.push('\n');
    out.push_str(&style.note(&format!(
        "Platform cost: {}/month | Payback: {} | Viable when {}",
        format_money(report.platform_cost),
        report.payback_policy,
        report.viability_rule
    )));
    out.push_str("\n\n");

    let header = report_header(with_baseline);
    out.push_str(&style.column_header(&header));
    out.push('\n');
    out.push_str(&"-".repeat(header.len()));
    out.push('\n');

    for row in &report.rows {
        out.push_str(&format_row(row, with_baseline, style));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&format_summary(&report.summary, style));
    out
}

fn report_header(with_baseline: bool) -> String {
    let original = if with_baseline {
        format!(" {:>9}", "Original")
    } else {
        String::new()
    };
    format!(
        "{:<NAME_WIDTH$} {:>9} {:>8} {:>6} {:>5} {:>5} {:>6} {:>9}{} {:>9} {:>7} {:>6}  {}",
        "Scenario",
        "Revenue",
        "Costs",
        "Hours",
        "Rate",
        "Save",
        "Freed",
        "Monthly",
        original,
        "Annual",
        "Payback",
        "Cost%",
        "Viable"
    )
}

/// One fixed-width row per scenario.
pub fn format_row(row: &ReportRow, with_baseline: bool, style: &dyn ReportStyle) -> String {
    let scenario = &row.scenario;
    let result = &row.result;
    let original = if with_baseline {
        format!(
            " {:>9}",
            row.baseline.map(format_amount).unwrap_or_else(|| "-".to_string())
        )
    } else {
        String::new()
    };
    let viable = viable_label(result.is_viable);
    let viable = if result.is_viable {
        style.viable(viable)
    } else {
        style.not_viable(viable)
    };

    format!(
        "{:<NAME_WIDTH$} {:>9} {:>8} {:>6.1} {:>5} {:>5} {:>6.1} {:>9}{} {:>9} {:>7.1} {:>6.2}  {}",
        fit(&scenario.name, NAME_WIDTH),
        format_money(scenario.current_revenue),
        format_money(scenario.current_costs),
        scenario.time_spent_hours,
        result.hourly_rate,
        format!("{}%", result.time_savings_percent),
        result.time_freed,
        format_amount(result.monthly_savings),
        original,
        format_amount(result.annual_savings),
        result.payback_months,
        result.platform_cost_ratio,
        viable
    )
}

pub fn format_summary(summary: &ReportSummary, style: &dyn ReportStyle) -> String {
    let mut out = String::new();
    out.push_str(&style.title("Summary"));
    out.push('\n');
    out.push_str(&format!(
        "  Viable scenarios: {}/{} ({:.1}%)\n",
        summary.viable_count(),
        summary.total,
        summary.viable_percent()
    ));

    match &summary.payback {
        Some(payback) => out.push_str(&format!(
            "  Average payback: {:.1} months (min {:.1}, max {:.1})\n",
            payback.average, payback.min, payback.max
        )),
        None => out.push_str(&format!(
            "  Average payback: {}\n",
            style.caution("n/a (no viable scenarios)")
        )),
    }

    for bucket in &summary.buckets {
        out.push_str(&format!(
            "  {:<17} {}/{} viable\n",
            format!("{}:", bucket.bucket.label()),
            bucket.viable,
            bucket.total
        ));
    }

    if !summary.non_viable.is_empty() {
        out.push_str(&format!(
            "  Not viable: {}\n",
            style.caution(&summary.non_viable.join(", "))
        ));
    }
    out
}

pub fn format_comparison(comparison: &ComparisonReport, style: &dyn ReportStyle) -> String {
    let mut out = String::new();
    out.push_str(&style.title("ROI Comparison (conservative vs improved vs original)"));
    out.push_str("\n\n");

    let header = format!(
        "{:<NAME_WIDTH$} {:>9} {:>12} {:>9} {:>9} {:>8} {:>7} {:>7}",
        "Scenario", "Revenue", "Conservative", "Improved", "Original", "Delta", "Cons.", "Impr."
    );
    out.push_str(&style.column_header(&header));
    out.push('\n');
    out.push_str(&"-".repeat(header.len()));
    out.push('\n');

    for row in &comparison.rows {
        out.push_str(&format_comparison_row(row));
        out.push('\n');
    }

    for report in [&comparison.conservative, &comparison.improved] {
        out.push('\n');
        out.push_str(&style.column_header(&format!("{} policy", report.policy)));
        out.push('\n');
        out.push_str(&format_summary(&report.summary, style));
    }
    out
}

fn format_comparison_row(row: &ComparisonRow) -> String {
    format!(
        "{:<NAME_WIDTH$} {:>9} {:>12} {:>9} {:>9} {:>8} {:>7} {:>7}",
        fit(&row.name, NAME_WIDTH),
        format_money(row.current_revenue),
        format_amount(row.conservative.monthly_savings),
        format_amount(row.improved.monthly_savings),
        format_amount(row.baseline),
        format_delta(row.savings_delta()),
        viable_label(row.conservative.is_viable),
        viable_label(row.improved.is_viable),
    )
}

fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut truncated: String = text.chars().take(width - 1).collect();
        truncated.push('~');
        truncated
    }
}
