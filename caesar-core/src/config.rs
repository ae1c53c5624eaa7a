//! Global caesar configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{CaesarError, CaesarResult};
use crate::event::{DEFAULT_END_HOUR, DEFAULT_START_HOUR};
use crate::store::FileStore;

static DEFAULT_DATA_DIR: &str = "~/.local/share/caesar";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_start_hour() -> String {
    DEFAULT_START_HOUR.to_string()
}

fn default_end_hour() -> String {
    DEFAULT_END_HOUR.to_string()
}

/// Configuration at ~/.config/caesar/config.toml
///
/// Every key can be overridden from the environment with a `CAESAR_`
/// prefix, e.g. `CAESAR_PRESENTER="Ada Lovelace"`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CaesarConfig {
    /// Where events, sessions and rooms are stored.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Name recorded as presenter on sessions you create.
    #[serde(default)]
    pub presenter: String,

    #[serde(default = "default_start_hour")]
    pub default_start_hour: String,

    #[serde(default = "default_end_hour")]
    pub default_end_hour: String,
}

impl Default for CaesarConfig {
    fn default() -> Self {
        CaesarConfig {
            data_dir: default_data_dir(),
            presenter: String::new(),
            default_start_hour: default_start_hour(),
            default_end_hour: default_end_hour(),
        }
    }
}

impl CaesarConfig {
    pub fn config_path() -> CaesarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CaesarError::Config("Could not determine config directory".into()))?
            .join("caesar");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (creating a commented default on first run)
    /// and apply `CAESAR_*` environment overrides.
    pub fn load() -> CaesarResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> CaesarResult<Self> {
        Self::load_with_env(path, Environment::with_prefix("CAESAR"))
    }

    fn load_with_env(path: &Path, env: Environment) -> CaesarResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| CaesarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CaesarError::Config(e.to_string()))
    }

    /// `data_dir` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(self.data_path())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CaesarResult<()> {
        let contents = format!(
            "\
# caesar configuration

# Where events, sessions and rooms are stored:
# data_dir = \"{}\"

# Your name, recorded as presenter on the sessions you create:
# presenter = \"Ada Lovelace\"

# Default hours for new events:
# default_start_hour = \"{}\"
# default_end_hour = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_START_HOUR, DEFAULT_END_HOUR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CaesarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CaesarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("caesar/config.toml");
        CaesarConfig::create_default_config(&path).unwrap();

        let config = CaesarConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.default_start_hour, "18:00");
        assert_eq!(config.default_end_hour, "21:00");
    }

    #[test]
    fn values_from_file_are_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "presenter = \"Grace\"\ndata_dir = \"/tmp/caesar-data\"\n").unwrap();

        let config = CaesarConfig::load_from(&path).unwrap();
        assert_eq!(config.presenter, "Grace");
        assert_eq!(config.data_path(), PathBuf::from("/tmp/caesar-data"));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = CaesarConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.default_end_hour, "21:00");
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "presenter = \"Grace\"\n").unwrap();

        let env = Environment::with_prefix("CAESAR").source(Some(config::Map::from([
            ("CAESAR_PRESENTER".to_string(), "Env Ada".to_string()),
            ("CAESAR_DATA_DIR".to_string(), "/x/y".to_string()),
        ])));
        let config = CaesarConfig::load_with_env(&path, env).unwrap();
        assert_eq!(config.presenter, "Env Ada");
        assert_eq!(config.data_path(), PathBuf::from("/x/y"));
        assert_eq!(config.default_start_hour, "18:00");
    }
}
