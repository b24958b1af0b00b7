use crate::config::CONFIG_FILE_NAME;
use anyhow::Result;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# roi-estimator configuration

# Monthly platform subscription cost applied to every policy
platform_cost = 199

# Policy used by `roi-estimator report` without --policy
# (conservative or improved)
default_policy = "conservative"

[output]
default_format = "terminal"

# Uncomment to replace the built-in scenario table
# [[scenarios]]
# name = "Solo Consultant"
# current_revenue = 5000
# current_costs = 1000
# team_size = 1
# time_spent_hours = 10
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    log::debug!("Wrote {}", config_path.display());
    Ok(())
}
