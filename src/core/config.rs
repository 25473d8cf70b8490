//! User configuration - default region and unit
//!
//! Stored as YAML at `<config dir>/config.yaml` unless an explicit path is
//! given. A missing file means defaults; a malformed one is an error.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::measurement::Unit;
use crate::core::region::Region;

const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine a configuration directory for this platform")]
    NoConfigDir,

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persisted user defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sizing system used when no `--region` is given
    pub region: Region,

    /// Unit for inputs and outputs when no `--unit` is given
    pub unit: Unit,
}

/// Fields to change in a stored config; `None` keeps the current value
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigPatch {
    pub region: Option<Region>,
    pub unit: Option<Unit>,
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from("", "", "cup-holder")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Explicit path if given, otherwise the default location
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let yaml = serde_yml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, yaml).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Apply the set fields of `patch`
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(region) = patch.region {
            self.region = region;
        }
        if let Some(unit) = patch.unit {
            self.unit = unit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.region, Region::Cn);
        assert_eq!(config.unit, Unit::Cm);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(&tmp.path().join("absent.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/config.yaml");
        let config = Config {
            region: Region::UsClassic,
            unit: Unit::Inch,
        };
        config.save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("region: US_CLASSIC"));
        assert!(content.contains("unit: inch"));
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse("unit: inch\n", Path::new("c.yaml")).unwrap();
        assert_eq!(config.region, Region::Cn);
        assert_eq!(config.unit, Unit::Inch);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::parse("  \n", Path::new("c.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let err = Config::parse("region: MARS\n", Path::new("c.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        let err = Config::parse("colour: blue\n", Path::new("c.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_apply_patch() {
        let mut config = Config::default();
        config.apply(ConfigPatch {
            region: Some(Region::Jp),
            unit: None,
        });
        assert_eq!(config.region, Region::Jp);
        assert_eq!(config.unit, Unit::Cm);
    }
}
