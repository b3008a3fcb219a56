//! Configuration models and loaders for sunside.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Airport record parsed from catalog files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AirportConfig {
    pub iata: String,
    #[serde(default)]
    pub icao: Option<String>,
    pub name: String,
    #[serde(default)]
    pub municipality: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub elevation_ft: Option<f64>,
    pub lat: f64,
    pub lon: f64,
}

/// Obliquity model selector as written in settings files.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ObliquityConfig {
    #[default]
    Reference,
    Standard,
}

/// Tunables for the recommendation engine.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub step_minutes: i64,
    pub event_padding_minutes: i64,
    pub obliquity: ObliquityConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            step_minutes: 1,
            event_padding_minutes: 5,
            obliquity: ObliquityConfig::Reference,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load airport records from a YAML list, a single TOML record, or a directory of TOML records.
pub fn load_airports<P: AsRef<Path>>(path: P) -> Result<Vec<AirportConfig>, ConfigError> {
    let mut airports: Vec<AirportConfig> = load_records(path)?;
    for airport in &mut airports {
        airport.iata = airport.iata.trim().to_ascii_uppercase();
        if let Some(icao) = airport.icao.as_mut() {
            *icao = icao.trim().to_ascii_uppercase();
        }
    }
    Ok(airports)
}

/// Load engine settings from a TOML or YAML file.
pub fn load_engine_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig, ConfigError> {
    let path = path.as_ref();
    if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
