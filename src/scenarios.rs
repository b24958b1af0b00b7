//! Scenario tables: the built-in demonstration set and TOML scenario files.

use crate::core::ScenarioInput;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Ten business profiles spanning 5K to 200K monthly revenue, in report order.
pub fn default_scenarios() -> Vec<ScenarioInput> {
    vec![
        ScenarioInput::new("Solo Consultant", 5_000.0, 1_000.0, 1, 10.0),
        ScenarioInput::new("Neighborhood Bakery", 8_000.0, 2_500.0, 3, 20.0),
        ScenarioInput::new("Hair Salon", 12_000.0, 4_000.0, 4, 25.0),
        ScenarioInput::new("Boutique Design Agency", 18_000.0, 6_000.0, 5, 35.0),
        ScenarioInput::new("Dental Practice", 25_000.0, 9_000.0, 8, 40.0),
        ScenarioInput::new("Online Retail Store", 35_000.0, 12_000.0, 10, 50.0),
        ScenarioInput::new("Accounting Firm", 45_000.0, 14_000.0, 12, 60.0),
        ScenarioInput::new("Restaurant Group", 60_000.0, 20_000.0, 20, 70.0),
        ScenarioInput::new("Software Studio", 100_000.0, 25_000.0, 25, 80.0),
        ScenarioInput::new("Regional Distributor", 200_000.0, 30_000.0, 40, 90.0),
    ]
}

/// On-disk layout of a scenario file.
///
/// ```toml
/// [[scenarios]]
/// name = "Solo Consultant"
/// current_revenue = 5000
/// current_costs = 1000
/// team_size = 1
/// time_spent_hours = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub scenarios: Vec<ScenarioInput>,
}

pub fn parse_scenarios(contents: &str) -> Result<Vec<ScenarioInput>> {
    let file: ScenarioFile = toml::from_str(contents)?;
    if file.scenarios.is_empty() {
        return Err(Error::configuration(
            "scenario file must contain at least one [[scenarios]] entry",
        ));
    }
    warn_on_duplicate_names(&file.scenarios);
    Ok(file.scenarios)
}

pub fn load_scenarios(path: &Path) -> Result<Vec<ScenarioInput>> {
    let contents = std::fs::read_to_string(path)?;
    let scenarios = parse_scenarios(&contents)?;
    log::debug!(
        "Loaded {} scenarios from {}",
        scenarios.len(),
        path.display()
    );
    Ok(scenarios)
}

/// Names label report rows; duplicates are allowed but make output ambiguous.
pub fn duplicate_names(scenarios: &[ScenarioInput]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for scenario in scenarios {
        let name = scenario.name.as_str();
        if !seen.insert(name) && !duplicates.contains(&name) {
            duplicates.push(name);
        }
    }
    duplicates
}

pub fn warn_on_duplicate_names(scenarios: &[ScenarioInput]) {
    for name in duplicate_names(scenarios) {
        log::warn!("Scenario name '{}' appears more than once", name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_default_table_spans_revenue_range() {
        let scenarios = default_scenarios();
        assert_eq!(scenarios.len(), 10);
        assert_eq!(scenarios.first().unwrap().current_revenue, 5_000.0);
        assert_eq!(scenarios.last().unwrap().current_revenue, 200_000.0);
        assert!(duplicate_names(&scenarios).is_empty());
        assert!(scenarios.iter().all(|s| s.validate().is_ok()));
    }

    #[test]
    fn test_parse_scenarios() {
        let contents = indoc! {r#"
            [[scenarios]]
            name = "Food Truck"
            current_revenue = 9000
            current_costs = 3500.5
            team_size = 2
            time_spent_hours = 12

            [[scenarios]]
            name = "Law Office"
            current_revenue = 80000.0
            current_costs = 16000.0
            team_size = 9
            time_spent_hours = 55.5
        "#};

        let scenarios = parse_scenarios(contents).unwrap();
        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].name, "Food Truck");
        assert_eq!(scenarios[0].current_costs, 3_500.5);
        assert_eq!(scenarios[1].time_spent_hours, 55.5);
    }

    #[test]
    fn test_empty_scenario_file_rejected() {
        assert!(parse_scenarios("").is_err());
    }

    #[test]
    fn test_missing_field_rejected() {
        let contents = indoc! {r#"
            [[scenarios]]
            name = "Incomplete"
            current_revenue = 9000
        "#};
        assert!(parse_scenarios(contents).is_err());
    }

    #[test]
    fn test_duplicate_names_reported_once() {
        let scenarios = vec![
            ScenarioInput::new("Cafe", 5_000.0, 1_000.0, 1, 5.0),
            ScenarioInput::new("Cafe", 6_000.0, 1_000.0, 1, 5.0),
            ScenarioInput::new("Cafe", 7_000.0, 1_000.0, 1, 5.0),
            ScenarioInput::new("Gym", 7_000.0, 1_000.0, 1, 5.0),
        ];
        assert_eq!(duplicate_names(&scenarios), vec!["Cafe"]);
    }
}
