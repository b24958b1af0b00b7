// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod output;
pub mod report;
pub mod roi;
pub mod scenarios;

// Re-export commonly used types
pub use crate::core::{ScenarioInput, SizeBucket};

pub use crate::errors::{Error, Result};

pub use crate::roi::{
    BaselinePolicy, EstimatorPolicy, PaybackPolicy, RoiEstimator, RoiResult, TierTable,
    ToolsSavingsRate, ViabilityRule,
};

pub use crate::report::{
    build_comparison, build_report, ComparisonReport, Report, ReportRow, ReportSummary,
};

pub use crate::config::{PolicyPreset, RoiConfig};

pub use crate::output::{create_writer, OutputWriter};

pub use crate::scenarios::default_scenarios;
