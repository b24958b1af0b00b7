use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::PolicyPreset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width text tables
    Terminal,
    /// Pretty-printed JSON
    Json,
    /// Markdown tables
    Markdown,
}

#[derive(Parser, Debug)]
#[command(name = "roi-estimator")]
#[command(about = "Estimate return on investment of an AI subscription for small businesses", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every reporting command
#[derive(clap::Args, Debug, Clone)]
pub struct ReportArgs {
    /// TOML file with [[scenarios]] entries (defaults to the built-in table)
    #[arg(long)]
    pub scenarios: Option<PathBuf>,

    /// Configuration file (defaults to the nearest .roi-estimator.toml)
    #[arg(short, long, env = "ROI_ESTIMATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the config file's choice, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the scenario table through one estimator policy
    Report {
        /// Estimator policy (defaults to the config file's choice, then conservative)
        #[arg(short, long, value_enum)]
        policy: Option<PolicyPreset>,

        #[command(flatten)]
        args: ReportArgs,
    },

    /// Compare conservative, improved and original estimates side by side
    Compare {
        #[command(flatten)]
        args: ReportArgs,
    },

    /// Write a default .roi-estimator.toml to the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Commands::Report { args, .. } | Commands::Compare { args } => args.verbosity,
            Commands::Init { .. } => 0,
        }
    }
}
