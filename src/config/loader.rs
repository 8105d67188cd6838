use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::{Config, MapConfig};

const LATITUDES: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDES: RangeInclusive<f64> = -180.0..=180.0;

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in config '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {message}")]
    ValidationError { message: String },
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }
}

impl Config {
    /// `water/config.toml` under the platform config directory, or under
    /// the working directory when there is none.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("water")
            .join("config.toml")
    }

    /// Load from [`Config::config_path`].
    ///
    /// A missing file yields `Config::default()`. A present file must
    /// parse as TOML and pass [`Config::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Read, parse and validate `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the map viewport.
    ///
    /// - latitude within -90..=90
    /// - longitude within -180..=180
    /// - both span deltas strictly positive
    ///
    /// The first violation is returned as [`ConfigError::ValidationError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_map(&self.map)
    }
}

fn validate_map(map: &MapConfig) -> Result<(), ConfigError> {
    if !LATITUDES.contains(&map.latitude) {
        return Err(ConfigError::invalid(format!(
            "map latitude {} is outside -90..=90",
            map.latitude
        )));
    }
    if !LONGITUDES.contains(&map.longitude) {
        return Err(ConfigError::invalid(format!(
            "map longitude {} is outside -180..=180",
            map.longitude
        )));
    }
    // Negated so NaN fails too.
    if !(map.latitude_delta > 0.0 && map.longitude_delta > 0.0) {
        return Err(ConfigError::invalid("map span must be positive"));
    }
    Ok(())
}
