//! Configuration for roi-estimator.
//!
//! - [`core`]: the `.roi-estimator.toml` schema
//! - [`loader`]: file discovery and parsing
//! - [`presets`]: the named estimator policies

pub mod core;
pub mod loader;
pub mod presets;

pub use self::core::{OutputConfig, RoiConfig};
pub use loader::{
    discover_config, load_config, load_config_from, parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use presets::PolicyPreset;
