//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::app::{
    AppContext,
    commands::{build, show},
};
use crate::services::FilesystemConfigTree;

pub use crate::app::commands::build::{BuildOutcome, TopologyOutput};
pub use crate::domain::{AppError, BuildConfig, Topology, TopologySettings};

/// Where a build reads its configuration from, as given by a caller.
///
/// Explicit directories override values from `config_file`, which override
/// the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub config_file: Option<PathBuf>,
    pub template_dir: Option<PathBuf>,
    pub destination_dir: Option<PathBuf>,
}

impl BuildOptions {
    /// Resolve defaults, the optional config file and overrides into a `BuildConfig`.
    pub fn resolve(self) -> Result<BuildConfig, AppError> {
        let config = match &self.config_file {
            Some(path) => BuildConfig::load(path)?,
            None => BuildConfig::default(),
        };
        Ok(config.with_overrides(self.template_dir, self.destination_dir))
    }
}

/// Create an `AppContext` for the given configuration.
fn create_context(config: &BuildConfig) -> AppContext<FilesystemConfigTree> {
    AppContext::new(FilesystemConfigTree::from_config(config))
}

/// Build every topology using the directories in `config`.
pub fn build(config: &BuildConfig) -> Result<BuildOutcome, AppError> {
    config.validate()?;
    let ctx = create_context(config);
    build::execute(&ctx)
}

/// Resolve `options` and build every topology.
pub fn build_with_options(options: BuildOptions) -> Result<BuildOutcome, AppError> {
    build(&options.resolve()?)
}

/// Render topology settings as TOML.
pub fn show(topology: Option<Topology>) -> Result<String, AppError> {
    show::execute(topology)
}
