//! Project-file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// Loads and validates a `basalt.toml` project file from a directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join("basalt.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `basalt.toml` project file from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and variant flags are
/// consistent.
///
/// The daughterboard/test exclusivity is enforced here as well as in the
/// board registry, so an invalid file is rejected before any board object
/// exists.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.board.name.is_empty() {
        return Err(ConfigError::MissingField("board.name".to_string()));
    }
    if config.board.daughterboard && config.board.test {
        return Err(ConfigError::ValidationError(
            "board.daughterboard and board.test cannot both be enabled".to_string(),
        ));
    }
    for r in &config.resources {
        if r.pins.split_whitespace().next().is_none() {
            return Err(ConfigError::ValidationError(format!(
                "resource ({}, {}) has no pins",
                r.kind, r.index
            )));
        }
    }
    Ok(())
}
