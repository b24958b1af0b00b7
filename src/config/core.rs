use serde::{Deserialize, Serialize};

use super::presets::PolicyPreset;
use crate::cli::OutputFormat;
use crate::core::ScenarioInput;
use crate::errors::Result;
use crate::roi::policy::validate_platform_cost;
use crate::roi::{BaselinePolicy, EstimatorPolicy};

/// Root configuration structure, read from `.roi-estimator.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RoiConfig {
    /// Monthly platform subscription cost applied to every policy
    #[serde(default)]
    pub platform_cost: Option<f64>,

    /// Policy used by `report` when none is given on the command line
    #[serde(default)]
    pub default_policy: Option<PolicyPreset>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Replaces the built-in scenario table when present
    #[serde(default)]
    pub scenarios: Option<Vec<ScenarioInput>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    pub default_format: Option<OutputFormat>,
}

impl RoiConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(cost) = self.platform_cost {
            validate_platform_cost(cost)?;
        }
        Ok(())
    }

    /// Preset policy with any configured overrides applied.
    pub fn policy_for(&self, preset: PolicyPreset) -> EstimatorPolicy {
        let policy = preset.policy();
        match self.platform_cost {
            Some(cost) => policy.with_platform_cost(cost),
            None => policy,
        }
    }

    pub fn baseline(&self) -> BaselinePolicy {
        let baseline = BaselinePolicy::default();
        match self.platform_cost {
            Some(cost) => baseline.with_platform_cost(cost),
            None => baseline,
        }
    }

    pub fn baseline_for(&self, preset: PolicyPreset) -> Option<BaselinePolicy> {
        preset.baseline().map(|_| self.baseline())
    }

    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|output| output.default_format)
    }
}
