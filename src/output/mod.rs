pub mod json;
pub mod markdown;
pub mod terminal;

use crate::cli::OutputFormat;
use crate::formatting::FormattingConfig;
use crate::report::{ComparisonReport, Report};
use std::io::Write;

pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
    fn write_comparison(&mut self, comparison: &ComparisonReport) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
    }
}

/// Format a whole-unit amount with thousands separators.
pub fn format_amount(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}

pub(crate) fn format_money(value: f64) -> String {
    format_amount(value.max(0.0).round() as u64)
}

pub(crate) fn format_delta(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "+" };
    format!("{sign}{}", format_amount(value.unsigned_abs()))
}

pub(crate) fn viable_label(is_viable: bool) -> &'static str {
    if is_viable {
        "yes"
    } else {
        "no"
    }
}
