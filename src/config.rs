/// TOML configuration: API access, logging and the station list.
///
/// ```toml
/// [wunderground]
/// timeout_secs = 30
///
/// [logging]
/// level = "info"
///
/// [[stations]]
/// pws = "KCOLITTL12"
/// name = "Littleton backyard"
/// canopy_reflection_coefficient = 0.23
/// ```
///
/// The API key may be given in the file or through `WUNDERGROUND_API_KEY`
/// (the binary loads a `.env` file from the working directory at startup).

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::ingest::wunderground::WUNDERGROUND_BASE_URL;
use crate::logging::LogLevel;
use crate::model::{CalculationParameters, GRASS_REFERENCE_ALBEDO};

pub const API_KEY_ENV: &str = "WUNDERGROUND_API_KEY";

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub wunderground: WundergroundConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    pub stations: Vec<StationConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WundergroundConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    WUNDERGROUND_BASE_URL.to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WundergroundConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: LogLevel,

    /// Append log entries to this file as well as the console.
    #[serde(default)]
    pub file: Option<String>,

    #[serde(default)]
    pub console_timestamps: bool,
}

const fn default_level() -> LogLevel {
    LogLevel::Info
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
            console_timestamps: false,
        }
    }
}

/// One personal weather station to compute ET0 for.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StationConfig {
    /// Weather Underground PWS identifier.
    pub pws: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default = "default_albedo")]
    pub canopy_reflection_coefficient: f64,
}

const fn default_albedo() -> f64 {
    GRASS_REFERENCE_ALBEDO
}

impl StationConfig {
    pub fn parameters(&self) -> CalculationParameters {
        CalculationParameters::new(self.canopy_reflection_coefficient)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Config read error: {}", e),
            ConfigError::Parse(e) => write!(f, "Config parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Reads and validates the configuration at `path`.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    parse_config(&text)
}

/// Parses and validates configuration text.
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.stations.is_empty() {
            return Err(ConfigError::Invalid("at least one [[stations]] entry is required".into()));
        }
        let mut seen = HashSet::new();
        for station in &self.stations {
            if station.pws.trim().is_empty() {
                return Err(ConfigError::Invalid("station pws must not be empty".into()));
            }
            if !seen.insert(station.pws.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate station '{}'", station.pws)));
            }
            let albedo = station.canopy_reflection_coefficient;
            if !(0.0..=1.0).contains(&albedo) {
                return Err(ConfigError::Invalid(format!(
                    "station '{}': canopy_reflection_coefficient {} is outside [0, 1]",
                    station.pws, albedo
                )));
            }
        }
        if self.wunderground.timeout_secs == 0 {
            return Err(ConfigError::Invalid("wunderground.timeout_secs must be positive".into()));
        }
        Ok(())
    }

    /// Looks up a station by PWS id. Returns `None` if not configured.
    pub fn find_station(&self, pws: &str) -> Option<&StationConfig> {
        self.stations.iter().find(|s| s.pws == pws)
    }

    /// The API key from the file, falling back to the environment.
    ///
    /// Only reads the environment; `.env` loading happens once in `main`.
    pub fn api_key(&self) -> Option<String> {
        if let Some(key) = self.wunderground.api_key.as_ref().filter(|k| !k.is_empty()) {
            return Some(key.clone());
        }
        std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [[stations]]
        pws = "KCOLITTL12"
    "#;

    #[test]
    fn test_defaults_applied() {
        let config = parse_config(MINIMAL).unwrap();
        assert_eq!(config.wunderground.base_url, WUNDERGROUND_BASE_URL);
        assert_eq!(config.wunderground.timeout_secs, 30);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(!config.logging.console_timestamps);
        assert_eq!(config.stations[0].canopy_reflection_coefficient, GRASS_REFERENCE_ALBEDO);
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r#"
            [wunderground]
            base_url = "http://localhost:8080"
            api_key = "secret"
            timeout_secs = 5

            [logging]
            level = "debug"
            file = "et0.log"
            console_timestamps = true

            [[stations]]
            pws = "KCOLITTL12"
            name = "Backyard"
            canopy_reflection_coefficient = 1.0

            [[stations]]
            pws = "KCASANFR70"
        "#,
        )
        .unwrap();
        assert_eq!(config.api_key().as_deref(), Some("secret"));
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.stations.len(), 2);
        let station = config.find_station("KCOLITTL12").unwrap();
        assert_eq!(station.parameters().canopy_reflection_coefficient, 1.0);
        assert!(config.find_station("NOPE").is_none());
    }

    #[test]
    fn test_no_stations_is_invalid() {
        let err = parse_config("stations = []").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_duplicate_station_is_invalid() {
        let err = parse_config(
            r#"
            [[stations]]
            pws = "A"
            [[stations]]
            pws = "A"
        "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_out_of_range_albedo_is_invalid() {
        let err = parse_config(
            r#"
            [[stations]]
            pws = "A"
            canopy_reflection_coefficient = 1.5
        "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = parse_config(
            r#"
            colour = "blue"
            [[stations]]
            pws = "A"
        "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_blank_file_key_falls_back_to_environment() {
        let config = parse_config(
            r#"
            [wunderground]
            api_key = ""
            [[stations]]
            pws = "A"
        "#,
        )
        .unwrap();
        let from_env = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        assert_eq!(config.api_key(), from_env);
        // A second read sees the same environment.
        assert_eq!(config.api_key(), from_env);
    }
}
