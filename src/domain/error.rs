use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for nodecfg operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure not covered by a more specific variant.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Destination root is already present.
    #[error("Destination '{}' already exists", .0.display())]
    DestinationExists(PathBuf),

    /// Template file is absent or unreadable.
    #[error("Template '{name}' not found at {}", .path.display())]
    TemplateMissing { name: String, path: PathBuf },

    /// Output path cannot be written (missing directory, permissions).
    #[error("Cannot write output {}: {source}", .path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Topology name is not one of the fixed topologies.
    #[error("Invalid topology '{name}': must be one of peer, api, dual")]
    InvalidTopology { name: String },

    /// Configuration file given explicitly but not present.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Configuration values are invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML rendering error.
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AppError {
    pub fn template_missing(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        AppError::TemplateMissing { name: name.into(), path: path.into() }
    }

    pub fn destination_unwritable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::DestinationUnwritable { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::DestinationExists(_) => io::ErrorKind::AlreadyExists,
            AppError::TemplateMissing { .. } | AppError::ConfigNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::DestinationUnwritable { source, .. } => match source.kind() {
                io::ErrorKind::PermissionDenied => io::ErrorKind::PermissionDenied,
                _ => io::ErrorKind::Other,
            },
            AppError::InvalidTopology { .. }
            | AppError::InvalidConfig(_)
            | AppError::TomlParse(_)
            | AppError::TomlSerialize(_) => io::ErrorKind::InvalidInput,
        }
    }
}
