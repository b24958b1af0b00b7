use super::{with_output_writer, RunContext};
use crate::cli::ReportArgs;
use crate::config::PolicyPreset;
use crate::report::{build_comparison, ComparisonReport};
use crate::roi::RoiEstimator;
use anyhow::Result;

pub fn handle_compare(args: ReportArgs) -> Result<()> {
    let context = RunContext::from_args(&args)?;
    let comparison = compute_comparison(&context)?;
    with_output_writer(
        args.output.as_deref(),
        context.format,
        context.formatting,
        |writer| writer.write_comparison(&comparison),
    )
}

pub fn compute_comparison(context: &RunContext) -> Result<ComparisonReport> {
    let conservative = RoiEstimator::new(context.config.policy_for(PolicyPreset::Conservative));
    let improved = RoiEstimator::new(context.config.policy_for(PolicyPreset::Improved));
    let baseline = context.config.baseline();

    log::info!(
        "Comparing policies across {} scenarios",
        context.scenarios.len()
    );
    Ok(build_comparison(
        &conservative,
        &improved,
        &baseline,
        &context.scenarios,
    )?)
}
