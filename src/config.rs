//! Configuration file handling
//!
//! The file is optional. A missing file means defaults; any field left out
//! of the file keeps its default.

use crate::form::FormDefaults;
use crate::reflection::Intensity;
use crate::sink::{LogSink, NdjsonSink, SinkError, SubmissionSink};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine the configuration directory")]
    NoConfigDir,
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where submissions go
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Log the record through the application log
    #[default]
    Log,
    /// Write one JSON line per submission
    Ndjson,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub initial_intensity: Intensity,
    pub action_valid_by_default: bool,
    pub sink: SinkKind,
    /// Output file for the ndjson sink, stdout when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_intensity: Intensity::default(),
            action_valid_by_default: true,
            sink: SinkKind::Log,
            output: None,
        }
    }
}

impl Config {
    /// Default location: `<config_dir>/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let project_dirs = ProjectDirs::from("com", "emotion-logger", "emotion-logger")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Load from `path`, falling back to defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn form_defaults(&self) -> FormDefaults {
        FormDefaults {
            intensity: self.initial_intensity,
            is_action_valid: self.action_valid_by_default,
        }
    }

    /// Build the configured submission sink
    pub fn open_sink(&self) -> Result<Box<dyn SubmissionSink>, SinkError> {
        match (self.sink, &self.output) {
            (SinkKind::Log, _) => Ok(Box::new(LogSink)),
            (SinkKind::Ndjson, None) => Ok(Box::new(NdjsonSink::stdout())),
            (SinkKind::Ndjson, Some(path)) => Ok(Box::new(NdjsonSink::append(path)?)),
        }
    }
}
