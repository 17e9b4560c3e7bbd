//! CLI configuration.
//!
//! Built in layers, later ones winning: built-in defaults, an optional YAML
//! file passed with `--config`, environment variables, then command-line
//! flags.
//!
//! Variables:
//! - `ONBOARD_CATALOG` (default: `fixtures/consent_templates.json`)
//! - `ONBOARD_FIELDS` (default: none)
//! - `ONBOARD_OUTPUT_DIR` (default: `.`)
//! - `ONBOARD_REGULATOR` (default: `All`)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Resolved settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardConfig {
    /// Consent-template catalog (JSON or YAML).
    pub catalog_path: PathBuf,
    /// Field-requiredness catalog. Without one, no field is required.
    pub fields_path: Option<PathBuf>,
    /// Where `export` writes when no `--out` is given.
    pub output_dir: PathBuf,
    /// Regulator used when a subcommand is not given `--regulator`.
    pub default_regulator: String,
}

impl Default for OnboardConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("fixtures/consent_templates.json"),
            fields_path: None,
            output_dir: PathBuf::from("."),
            default_regulator: onboard_consent::ALL_REGULATORS.to_string(),
        }
    }
}

/// Command-line values that override the configuration when present.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub catalog_path: Option<PathBuf>,
    pub fields_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl OnboardConfig {
    /// Defaults, then `config_file` if given, then the process environment.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env(|var| std::env::var(var).ok())
    }

    /// Read a YAML config file. Keys it omits keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Overlay environment variables read through `lookup`.
    pub fn with_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let get = |var: &str| -> Result<Option<String>, ConfigError> {
            match lookup(var) {
                Some(v) if v.trim().is_empty() => Err(ConfigError::EmptyVariable(var.to_string())),
                other => Ok(other),
            }
        };
        if let Some(v) = get("ONBOARD_CATALOG")? {
            self.catalog_path = PathBuf::from(v);
        }
        if let Some(v) = get("ONBOARD_FIELDS")? {
            self.fields_path = Some(PathBuf::from(v));
        }
        if let Some(v) = get("ONBOARD_OUTPUT_DIR")? {
            self.output_dir = PathBuf::from(v);
        }
        if let Some(v) = get("ONBOARD_REGULATOR")? {
            self.default_regulator = v;
        }
        Ok(self)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(p) = overrides.catalog_path {
            self.catalog_path = p;
        }
        if overrides.fields_path.is_some() {
            self.fields_path = overrides.fields_path;
        }
        if let Some(p) = overrides.output_dir {
            self.output_dir = p;
        }
        self
    }

    /// The explicit regulator if given, otherwise the configured default.
    pub fn regulator<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit.unwrap_or(&self.default_regulator)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("environment variable {0} is set but empty")]
    EmptyVariable(String),
}
