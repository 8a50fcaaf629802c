pub mod theme;

use crate::hue::{self, Hue};
pub use theme::Theme;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Default for LogLevel {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Read-only startup settings. Nothing here is ever written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed seed for a reproducible dataset, fresh entropy otherwise.
    pub seed: Option<u64>,
    pub window: WindowSpec,
    pub log_level: LogLevel,
    pub export_dir: Option<PathBuf>,
    pub highlight: Hue,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            window: WindowSpec::default(),
            log_level: LogLevel::default(),
            export_dir: None,
            highlight: hue::HIGHLIGHT,
            theme: Theme::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `config.json` from the data directory. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = crate::data_path(Some(CONFIG_FILE));

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Where exports land: configured dir, else downloads, else the data dir.
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs_next::download_dir)
            .unwrap_or_else(|| crate::data_path(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.window, WindowSpec::default());
        assert_eq!(config.highlight, Hue::White);
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = std::env::temp_dir().join("periscope-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        std::fs::write(&path, "{ seed: ").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn explicit_export_dir_wins() {
        let config = Config {
            export_dir: Some(PathBuf::from("/tmp/exports")),
            ..Config::default()
        };
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/exports"));
    }
}
