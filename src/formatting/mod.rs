//! Terminal styling for reports.
//!
//! Color is decided once from the environment (`NO_COLOR`, `CLICOLOR`,
//! `CLICOLOR_FORCE`, `TERM`) and whether stdout is a terminal. Writers then
//! ask a [`ReportStyle`] to dress each piece of text by its role in the
//! report rather than by color name.

use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stdout_supports_color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        Self::from_env_values(
            env::var("NO_COLOR").ok(),
            env::var("CLICOLOR").ok(),
            env::var("CLICOLOR_FORCE").ok(),
        )
    }

    /// `CLICOLOR_FORCE=1` beats everything; `NO_COLOR` (any value) and
    /// `CLICOLOR=0` switch color off.
    pub fn from_env_values(
        no_color: Option<String>,
        clicolor: Option<String>,
        clicolor_force: Option<String>,
    ) -> Self {
        let color = if clicolor_force.as_deref() == Some("1") {
            ColorMode::Always
        } else if no_color.is_some() || clicolor.as_deref() == Some("0") {
            ColorMode::Never
        } else {
            ColorMode::Auto
        };
        Self { color }
    }

    /// No escape codes, for files and `--plain`.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

/// Styles report text by role.
pub trait ReportStyle {
    /// A scenario that passes its viability rule.
    fn viable(&self, text: &str) -> String;
    fn not_viable(&self, text: &str) -> String;
    /// Figures that deserve a second look, such as missing statistics.
    fn caution(&self, text: &str) -> String;
    fn title(&self, text: &str) -> String;
    fn column_header(&self, text: &str) -> String;
    fn note(&self, text: &str) -> String;
}

pub struct ColoredStyle;

impl ReportStyle for ColoredStyle {
    fn viable(&self, text: &str) -> String {
        text.green().to_string()
    }

    fn not_viable(&self, text: &str) -> String {
        text.red().to_string()
    }

    fn caution(&self, text: &str) -> String {
        text.yellow().to_string()
    }

    fn title(&self, text: &str) -> String {
        text.blue().bold().to_string()
    }

    fn column_header(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn note(&self, text: &str) -> String {
        text.dimmed().to_string()
    }
}

pub struct PlainStyle;

impl ReportStyle for PlainStyle {
    fn viable(&self, text: &str) -> String {
        text.to_string()
    }

    fn not_viable(&self, text: &str) -> String {
        text.to_string()
    }

    fn caution(&self, text: &str) -> String {
        text.to_string()
    }

    fn title(&self, text: &str) -> String {
        text.to_string()
    }

    fn column_header(&self, text: &str) -> String {
        text.to_string()
    }

    fn note(&self, text: &str) -> String {
        text.to_string()
    }
}

pub fn create_style(config: FormattingConfig) -> Box<dyn ReportStyle> {
    if config.color.should_use_color() {
        // colored otherwise re-checks the tty itself and may disagree.
        colored::control::set_override(true);
        Box::new(ColoredStyle)
    } else {
        Box::new(PlainStyle)
    }
}

fn stdout_supports_color() -> bool {
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }
    std::io::stdout().is_terminal()
}
