pub mod compare;
pub mod init;
pub mod report;

use crate::cli::{OutputFormat, ReportArgs};
use crate::config::{self, RoiConfig};
use crate::core::ScenarioInput;
use crate::formatting::FormattingConfig;
use crate::output::{create_writer, OutputWriter};
use crate::scenarios;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Everything a reporting command needs once CLI flags and config are merged.
pub struct RunContext {
    pub config: RoiConfig,
    pub scenarios: Vec<ScenarioInput>,
    pub format: OutputFormat,
    pub formatting: FormattingConfig,
}

impl RunContext {
    pub fn from_args(args: &ReportArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => config::load_config_from(path)?,
            None => config::load_config(),
        };

        let scenarios = resolve_scenarios(args.scenarios.as_deref(), &config)?;
        let format = args
            .format
            .or_else(|| config.default_format())
            .unwrap_or(OutputFormat::Terminal);
        let formatting = resolve_formatting(args.plain, args.output.is_some());

        Ok(Self {
            config,
            scenarios,
            format,
            formatting,
        })
    }

    /// Context for the argument-free demonstration binaries.
    pub fn demo() -> Self {
        Self {
            config: RoiConfig::default(),
            scenarios: scenarios::default_scenarios(),
            format: OutputFormat::Terminal,
            formatting: FormattingConfig::from_env(),
        }
    }
}

/// Scenario file, then config scenarios, then the built-in table.
pub fn resolve_scenarios(path: Option<&Path>, config: &RoiConfig) -> Result<Vec<ScenarioInput>> {
    if let Some(path) = path {
        return scenarios::load_scenarios(path)
            .with_context(|| format!("Failed to load scenarios from {}", path.display()));
    }
    if let Some(configured) = &config.scenarios {
        log::debug!("Using {} scenarios from config", configured.len());
        return Ok(configured.clone());
    }
    Ok(scenarios::default_scenarios())
}

/// Files never receive escape codes.
pub fn resolve_formatting(plain: bool, to_file: bool) -> FormattingConfig {
    if plain || to_file {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

/// Run `emit` against a writer for `output` (a file) or stdout.
pub fn with_output_writer<F>(
    output: Option<&Path>,
    format: OutputFormat,
    formatting: FormattingConfig,
    emit: F,
) -> Result<()>
where
    F: FnOnce(&mut dyn OutputWriter) -> Result<()>,
{
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = create_writer(format, io::BufWriter::new(file), formatting);
            emit(writer.as_mut())?;
            log::info!("Report written to {}", path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut writer = create_writer(format, stdout.lock(), formatting);
            emit(writer.as_mut())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_scenarios_default_table() {
        let scenarios = resolve_scenarios(None, &RoiConfig::default()).unwrap();
        assert_eq!(scenarios.len(), 10);
    }

    #[test]
    fn test_scenarios_from_config() {
        let config = RoiConfig {
            scenarios: Some(vec![ScenarioInput::new("Kiosk", 3_000.0, 500.0, 1, 4.0)]),
            ..Default::default()
        };
        let scenarios = resolve_scenarios(None, &config).unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].name, "Kiosk");
    }

    #[test]
    fn test_scenario_file_beats_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("scenarios.toml");
        fs::write(
            &path,
            indoc! {r#"
                [[scenarios]]
                name = "Print Shop"
                current_revenue = 22000
                current_costs = 7000
                team_size = 6
                time_spent_hours = 30
            "#},
        )
        .unwrap();
        let config = RoiConfig {
            scenarios: Some(vec![ScenarioInput::new("Kiosk", 3_000.0, 500.0, 1, 4.0)]),
            ..Default::default()
        };

        let scenarios = resolve_scenarios(Some(&path), &config).unwrap();
        assert_eq!(scenarios[0].name, "Print Shop");
    }

    #[test]
    fn test_file_output_is_plain() {
        assert_eq!(resolve_formatting(false, true), FormattingConfig::plain());
        assert_eq!(resolve_formatting(true, false), FormattingConfig::plain());
    }
}
