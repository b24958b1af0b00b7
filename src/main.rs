use anyhow::Result;
use clap::Parser;
use roi_estimator::cli::{Cli, Commands};
use roi_estimator::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    roi_estimator::logging::init_logging(cli.command.verbosity());

    match cli.command {
        Commands::Report { policy, args } => {
            commands::report::handle_report(commands::report::ReportConfig { policy, args })
        }
        Commands::Compare { args } => commands::compare::handle_compare(args),
        Commands::Init { force } => commands::init::init_config(force),
    }
}
