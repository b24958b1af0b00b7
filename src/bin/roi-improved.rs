//! Runs the built-in scenario table through the improved policy, with the
//! original formula alongside for reference.

use anyhow::Result;
use roi_estimator::commands::report::run_demo;
use roi_estimator::config::PolicyPreset;

fn main() -> Result<()> {
    roi_estimator::logging::init_logging(0);
    run_demo(PolicyPreset::Improved)
}
