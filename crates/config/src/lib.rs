//! Configuration models and loaders for the Flight Route Calculator.

pub mod defaults;

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Airport record parsed from catalog files.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AirportConfig {
    pub code: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Aircraft category record parsed from catalog files.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AircraftConfig {
    pub name: String,
    pub seats: u32,
    pub max_range_km: f64,
    pub fuel_model: FuelModelConfig,
    #[serde(default)]
    pub description: String,
}

/// Fuel model section of an aircraft record.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum FuelModelConfig {
    #[serde(rename = "affine")]
    Affine { base_kg: f64, rate_kg_per_km: f64 },
    #[serde(other)]
    Unsupported,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load airport records from a YAML list, a single TOML record, or a directory of TOML records.
pub fn load_airports<P: AsRef<Path>>(path: P) -> Result<Vec<AirportConfig>, ConfigError> {
    load_records(path)
}

/// Load aircraft category records. Same file layouts as [`load_airports`].
pub fn load_aircraft<P: AsRef<Path>>(path: P) -> Result<Vec<AircraftConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
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
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
