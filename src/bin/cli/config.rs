use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Persistent CLI settings: default resource paths and the log filter.
#[derive(Debug, Default)]
pub struct CliConfig {
    path: Option<PathBuf>,
    data: RawConfig,
}

impl CliConfig {
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = explicit.or_else(default_config_path);
        let data = if let Some(config_path) = path.as_ref() {
            if config_path.exists() {
                read_file(config_path)?
            } else {
                RawConfig::default()
            }
        } else {
            RawConfig::default()
        };
        Ok(Self { path, data })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn default_resource(&self) -> Option<&PathBuf> {
        self.data.resource.default_path.as_ref()
    }

    pub fn exceptions(&self) -> Option<&PathBuf> {
        self.data.resource.exceptions.as_ref()
    }

    pub fn information_content(&self) -> Option<&PathBuf> {
        self.data.resource.information_content.as_ref()
    }

    pub fn log_filter(&self) -> Option<&str> {
        self.data.log_filter.as_deref()
    }

    pub fn set_default_resource(&mut self, path: Option<PathBuf>) {
        self.data.resource.default_path = path;
    }

    pub fn render(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(&self.data).map_err(|source| ConfigError::Serialize { source })
    }

    pub fn persist(&self) -> Result<PathBuf, ConfigError> {
        let target = if let Some(path) = &self.path {
            path.clone()
        } else if let Some(default) = default_config_path() {
            default
        } else {
            return Err(ConfigError::NoConfigPath);
        };
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let serialized = self.render()?;
        fs::write(&target, serialized).map_err(|source| ConfigError::Write {
            path: target.clone(),
            source,
        })?;
        Ok(target)
    }
}

fn read_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct RawConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    log_filter: Option<String>,
    #[serde(default)]
    resource: ResourceSection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct ResourceSection {
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    default_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exceptions: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    information_content: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read CLI config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse CLI config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize CLI config: {source}")]
    Serialize { source: toml::ser::Error },
    #[error("failed to write CLI config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no config directory found; pass --config or set LEXIGRAPH_CONFIG")]
    NoConfigPath,
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("lexigraph").join("cli.toml"))
}
