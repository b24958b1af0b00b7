use super::{with_output_writer, RunContext};
use crate::cli::ReportArgs;
use crate::config::PolicyPreset;
use crate::report::{build_report, Report};
use crate::roi::RoiEstimator;
use anyhow::Result;
use std::path::PathBuf;

pub struct ReportConfig {
    pub policy: Option<PolicyPreset>,
    pub args: ReportArgs,
}

pub fn handle_report(config: ReportConfig) -> Result<()> {
    let context = RunContext::from_args(&config.args)?;
    let preset = config
        .policy
        .or(context.config.default_policy)
        .unwrap_or(PolicyPreset::Conservative);

    run_report(&context, preset, config.args.output)
}

/// Print the built-in scenario table through `preset` to stdout.
pub fn run_demo(preset: PolicyPreset) -> Result<()> {
    run_report(&RunContext::demo(), preset, None)
}

pub fn compute_report(context: &RunContext, preset: PolicyPreset) -> Result<Report> {
    let policy = context.config.policy_for(preset);
    let baseline = context.config.baseline_for(preset);
    log::info!(
        "Estimating {} scenarios with the {} policy",
        context.scenarios.len(),
        preset.as_str()
    );

    let estimator = RoiEstimator::new(policy);
    Ok(build_report(&estimator, &context.scenarios, baseline.as_ref())?)
}

fn run_report(context: &RunContext, preset: PolicyPreset, output: Option<PathBuf>) -> Result<()> {
    let report = compute_report(context, preset)?;
    with_output_writer(
        output.as_deref(),
        context.format,
        context.formatting,
        |writer| writer.write_report(&report),
    )
}
