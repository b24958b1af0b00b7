//! Runs the built-in scenario table through the conservative policy.

use anyhow::Result;
use roi_estimator::commands::report::run_demo;
use roi_estimator::config::PolicyPreset;

fn main() -> Result<()> {
    roi_estimator::logging::init_logging(0);
    run_demo(PolicyPreset::Conservative)
}
