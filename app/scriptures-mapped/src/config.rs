use std::{fmt::Display, io::ErrorKind, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::{
    APP_NAME,
    errors::{ScripError, ScripResult},
};

const CONFIG_FILE_NAME: &str = "config.toml";
pub(crate) const DEFAULT_BASE_URL: &str = "https://scriptures.byu.edu/";

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LogLevel {
    Error,
    Warn,
    Debug,
    Trace,
    #[default]
    #[serde(other)]
    Info,
}

impl LogLevel {
    pub(crate) fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub(crate) struct ScripturesConfig {
    #[serde(rename = "baseUrl", default = "default_base_url")]
    pub base_url: String,
    #[serde(rename = "logLevel", default)]
    pub log_level: LogLevel,
}

impl Default for ScripturesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            log_level: Default::default(),
        }
    }
}

impl ScripturesConfig {
    pub(crate) fn path() -> ScripResult<PathBuf> {
        let dir = dirs_next::config_dir()
            .ok_or(ScripError::ConfigDir)?
            .join(APP_NAME);
        if !dir.exists() {
            std::fs::create_dir_all(&dir)?;
        }
        Ok(dir.join(CONFIG_FILE_NAME))
    }

    pub(crate) fn save(&self) -> ScripResult<()> {
        let config_str = toml::to_string_pretty(&self)?;
        std::fs::write(Self::path()?, config_str)?;
        Ok(())
    }

    /// Reads the config file, writing the default back when it is missing
    /// or unreadable.
    pub(crate) fn get() -> ScripResult<Self> {
        let config_path = Self::path()?;
        match std::fs::read_to_string(&config_path) {
            Ok(file) => match Self::parse(&file) {
                Ok(config) => Ok(config),
                Err(_) => Self::write_default(),
            },
            Err(e) if e.kind() == ErrorKind::NotFound => Self::write_default(),
            Err(e) => Err(e.into()),
        }
    }

    fn parse(file: &str) -> ScripResult<Self> {
        Ok(toml::from_str(file)?)
    }

    fn write_default() -> ScripResult<Self> {
        let config = Self::default();
        config.save()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() -> anyhow::Result<()> {
        assert_eq!(ScripturesConfig::parse("")?, ScripturesConfig::default());
        Ok(())
    }

    #[test]
    fn partial_file_keeps_defaults() -> anyhow::Result<()> {
        let config = ScripturesConfig::parse("logLevel = \"debug\"")?;
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_level.filter(), LevelFilter::DEBUG);
        Ok(())
    }

    #[test]
    fn unknown_level_reads_as_info() -> anyhow::Result<()> {
        let config = ScripturesConfig::parse("logLevel = \"loud\"")?;
        assert_eq!(config.log_level, LogLevel::Info);
        Ok(())
    }

    #[test]
    fn saved_form_parses_back() -> anyhow::Result<()> {
        let config = ScripturesConfig {
            base_url: "http://localhost:8080/".to_string(),
            log_level: LogLevel::Warn,
        };
        let text = toml::to_string_pretty(&config)?;
        assert!(text.contains("baseUrl"));
        assert_eq!(ScripturesConfig::parse(&text)?, config);
        Ok(())
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(ScripturesConfig::parse("baseUrl = [").is_err());
    }
}
