//! YAML configuration loading.

use std::fs;
use std::io;
use std::path::Path;

use keyrun_types::{CommandsConfig, ConfigLoader, LaunchError, Result};

/// Configuration path used when the embedding application supplies none.
/// The core itself always requires an explicit path.
pub const DEFAULT_CONFIG_PATH: &str = "commands.yaml";

/// Loads `CommandsConfig` from a YAML file.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlConfigLoader;

impl YamlConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigLoader for YamlConfigLoader {
    fn load(&self, path: &Path) -> Result<CommandsConfig> {
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                LaunchError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LaunchError::Io(e)
            }
        })?;

        let config: CommandsConfig =
            serde_yaml::from_str(&text).map_err(|e| LaunchError::ConfigParse {
                path: path.to_path_buf(),
                message: parse_message(&e),
            })?;

        log::debug!(
            "loaded {} command entries from {}",
            config.commands.len(),
            path.display()
        );
        Ok(config)
    }
}

/// Format a parse error with line/column context when the parser provides it.
fn parse_message(err: &serde_yaml::Error) -> String {
    match err.location() {
        Some(loc) => format!("{} (line {}, column {})", err, loc.line(), loc.column()),
        None => err.to_string(),
    }
}
