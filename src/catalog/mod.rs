//! Runtime airport and aircraft catalogs built from configuration records.

use std::collections::BTreeMap;
use std::path::Path;

use flight_aircraft::{AircraftCategory, CategoryError, CategoryTable, FuelModel};
use flight_config::defaults::{default_aircraft, default_airports};
use flight_config::{
    AircraftConfig, AirportConfig, ConfigError, FuelModelConfig, load_aircraft, load_airports,
};
use flight_core::geo::{CoordinateError, GeoCoordinate};
use thiserror::Error;

/// An airport keyed by its IATA code.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    pub code: String,
    pub coordinate: GeoCoordinate,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("airport catalog is empty")]
    NoAirports,
    #[error("airport code must not be empty")]
    EmptyCode,
    #[error("duplicate airport code '{0}'")]
    DuplicateAirport(String),
    #[error("airport '{code}' has an invalid coordinate: {source}")]
    InvalidCoordinate {
        code: String,
        source: CoordinateError,
    },
    #[error("aircraft '{0}' uses an unsupported fuel model")]
    UnsupportedFuelModel(String),
    #[error("invalid aircraft table: {0}")]
    Aircraft(#[from] CategoryError),
}

/// Read-only mapping from airport code to airport.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportCatalog {
    airports: BTreeMap<String, Airport>,
}

impl AirportCatalog {
    /// Build a catalog, validating coordinates and rejecting duplicate codes.
    pub fn from_configs(configs: &[AirportConfig]) -> Result<Self, CatalogError> {
        if configs.is_empty() {
            return Err(CatalogError::NoAirports);
        }
        let mut airports = BTreeMap::new();
        for config in configs {
            let airport = Airport::try_from(config)?;
            if airports.contains_key(&airport.code) {
                return Err(CatalogError::DuplicateAirport(airport.code));
            }
            airports.insert(airport.code.clone(), airport);
        }
        Ok(Self { airports })
    }

    /// The built-in ten-airport catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_configs(&default_airports())
    }

    /// Load from a YAML/TOML file or TOML directory (see [`flight_config::load_airports`]).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        Self::from_configs(&load_airports(path)?)
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn get(&self, code: &str) -> Option<&Airport> {
        self.airports.get(&normalize_code(code))
    }

    /// Airports in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.values()
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

impl TryFrom<&AirportConfig> for Airport {
    type Error = CatalogError;

    fn try_from(value: &AirportConfig) -> Result<Self, Self::Error> {
        let code = normalize_code(&value.code);
        if code.is_empty() {
            return Err(CatalogError::EmptyCode);
        }
        let coordinate = GeoCoordinate::new_checked(value.latitude, value.longitude)
            .map_err(|source| CatalogError::InvalidCoordinate {
                code: code.clone(),
                source,
            })?;
        Ok(Airport { code, coordinate })
    }
}

fn aircraft_category(value: &AircraftConfig) -> Result<AircraftCategory, CatalogError> {
    let fuel_model = match value.fuel_model {
        FuelModelConfig::Affine {
            base_kg,
            rate_kg_per_km,
        } => FuelModel::Affine {
            base_kg,
            rate_kg_per_km,
        },
        FuelModelConfig::Unsupported => {
            return Err(CatalogError::UnsupportedFuelModel(value.name.clone()));
        }
    };

    Ok(AircraftCategory {
        name: value.name.clone(),
        seat_count: value.seats,
        max_range_km: value.max_range_km,
        fuel_model,
        description: value.description.clone(),
    })
}

/// Convert aircraft records into a range-ordered table.
pub fn category_table(configs: &[AircraftConfig]) -> Result<CategoryTable, CatalogError> {
    let categories = configs
        .iter()
        .map(aircraft_category)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CategoryTable::new(categories)?)
}

/// The built-in five-category table.
pub fn builtin_categories() -> Result<CategoryTable, CatalogError> {
    category_table(&default_aircraft())
}

/// Load aircraft categories from a YAML/TOML file or TOML directory.
pub fn load_categories<P: AsRef<Path>>(path: P) -> Result<CategoryTable, CatalogError> {
    category_table(&load_aircraft(path)?)
}

/// Airports from `path`, or the built-in catalog when no path is given.
pub fn airports_or_builtin(path: Option<&Path>) -> Result<AirportCatalog, CatalogError> {
    match path {
        Some(path) => AirportCatalog::load(path),
        None => AirportCatalog::builtin(),
    }
}

/// Aircraft categories from `path`, or the built-in table when no path is given.
pub fn categories_or_builtin(path: Option<&Path>) -> Result<CategoryTable, CatalogError> {
    match path {
        Some(path) => load_categories(path),
        None => builtin_categories(),
    }
}

pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
