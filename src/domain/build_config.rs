//! Build configuration: where templates are read from and where output goes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

pub const DEFAULT_TEMPLATE_DIR: &str = "./templates";
pub const DEFAULT_DESTINATION_DIR: &str = "./_build";

/// Paths used by a build, loaded from an optional TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Directory holding the shared templates.
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,
    /// Root of the generated tree; must not exist before the build.
    #[serde(default = "default_destination_dir")]
    pub destination_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { template_dir: default_template_dir(), destination_dir: default_destination_dir() }
    }
}

impl BuildConfig {
    pub fn new(template_dir: impl Into<PathBuf>, destination_dir: impl Into<PathBuf>) -> Self {
        Self { template_dir: template_dir.into(), destination_dir: destination_dir.into() }
    }

    /// Parse configuration from string content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let config: BuildConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file that must exist.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.is_file() {
            return Err(AppError::ConfigNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Apply command-line overrides on top of loaded values.
    pub fn with_overrides(
        mut self,
        template_dir: Option<PathBuf>,
        destination_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = template_dir {
            self.template_dir = dir;
        }
        if let Some(dir) = destination_dir {
            self.destination_dir = dir;
        }
        self
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.template_dir.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("template_dir must not be empty".to_string()));
        }
        if self.destination_dir.as_os_str().is_empty() {
            return Err(AppError::InvalidConfig("destination_dir must not be empty".to_string()));
        }
        if self.template_dir == self.destination_dir {
            return Err(AppError::InvalidConfig(
                "destination_dir must differ from template_dir".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_template_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_DIR)
}

fn default_destination_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DESTINATION_DIR)
}
