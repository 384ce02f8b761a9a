//! Error types for rig construction and configuration loading.

use std::path::PathBuf;

/// Errors raised while assembling a character rig.
///
/// These are initialisation failures. Once a controller is built, ticking it
/// never fails: bad per-frame input is sanitised instead of reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RigError {
    /// A required collaborator (mover, health sink) was not supplied.
    MissingCollaborator(&'static str),
    /// Configuration values are out of range or inconsistent.
    InvalidConfig(String),
}

impl std::fmt::Display for RigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RigError::MissingCollaborator(name) => {
                write!(f, "missing required collaborator: {name}")
            }
            RigError::InvalidConfig(reason) => write!(f, "invalid rig configuration: {reason}"),
        }
    }
}

impl std::error::Error for RigError {}

/// Errors that can occur while loading a [`RigConfig`](crate::config::RigConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the config file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid JSON for the config schema.
    Json(serde_json::Error),
    /// The config parsed but failed validation.
    Invalid(RigError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "IO error reading {}: {source}", path.display())
            }
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl From<RigError> for ConfigError {
    fn from(e: RigError) -> Self {
        ConfigError::Invalid(e)
    }
}
