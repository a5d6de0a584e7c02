//! Aircraft categories, the "smallest aircraft that fits" selection rule, and
//! fuel burn / CO2 estimates derived from a category's affine fuel model.

use std::collections::HashSet;

use flight_core::constants::CO2_KG_PER_KG_FUEL;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fuel burn model for a category. Coefficients are kept as data so tables stay serializable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FuelModel {
    /// `base_kg + rate_kg_per_km * distance_km`.
    Affine { base_kg: f64, rate_kg_per_km: f64 },
}

impl FuelModel {
    /// Fuel burned over `distance_km` (kg).
    pub fn fuel_burn_kg(&self, distance_km: f64) -> f64 {
        match *self {
            FuelModel::Affine {
                base_kg,
                rate_kg_per_km,
            } => base_kg + rate_kg_per_km * distance_km,
        }
    }
}

/// A class of aircraft with its capacity, range, and fuel model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftCategory {
    pub name: String,
    pub seat_count: u32,
    pub max_range_km: f64,
    pub fuel_model: FuelModel,
    pub description: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum CategoryError {
    #[error("aircraft category table is empty")]
    Empty,
    #[error("duplicate aircraft category '{0}'")]
    DuplicateName(String),
    #[error("aircraft category '{0}' must have at least one seat")]
    NoSeats(String),
    #[error("aircraft category '{name}' has invalid maximum range {range_km} km")]
    InvalidRange { name: String, range_km: f64 },
    #[error("aircraft category '{0}' has a negative or non-finite fuel model coefficient")]
    InvalidFuelModel(String),
}

/// Categories ordered by ascending maximum range.
///
/// The order is established on construction and is what the selection rule relies on;
/// the table cannot be built unsorted.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    categories: Vec<AircraftCategory>,
}

impl CategoryTable {
    /// Validate the categories and sort them by ascending `max_range_km`.
    ///
    /// Categories sharing a range keep their input order.
    pub fn new(mut categories: Vec<AircraftCategory>) -> Result<Self, CategoryError> {
        if categories.is_empty() {
            return Err(CategoryError::Empty);
        }

        let mut names = HashSet::new();
        for category in &categories {
            validate(category)?;
            if !names.insert(category.name.to_uppercase()) {
                return Err(CategoryError::DuplicateName(category.name.clone()));
            }
        }

        categories.sort_by(|a, b| a.max_range_km.total_cmp(&b.max_range_km));
        Ok(Self { categories })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AircraftCategory> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false; an empty table is rejected on construction.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Longest range covered by any category (km).
    pub fn max_range_km(&self) -> f64 {
        self.categories
            .last()
            .map(|c| c.max_range_km)
            .unwrap_or_default()
    }

    /// Case-insensitive lookup by category name.
    pub fn find(&self, name: &str) -> Option<&AircraftCategory> {
        let upper = name.to_uppercase();
        self.categories
            .iter()
            .find(|c| c.name.to_uppercase() == upper)
    }
}

impl<'a> IntoIterator for &'a CategoryTable {
    type Item = &'a AircraftCategory;
    type IntoIter = std::slice::Iter<'a, AircraftCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate(category: &AircraftCategory) -> Result<(), CategoryError> {
    if category.seat_count == 0 {
        return Err(CategoryError::NoSeats(category.name.clone()));
    }
    if !category.max_range_km.is_finite() || category.max_range_km <= 0.0 {
        return Err(CategoryError::InvalidRange {
            name: category.name.clone(),
            range_km: category.max_range_km,
        });
    }
    let FuelModel::Affine {
        base_kg,
        rate_kg_per_km,
    } = category.fuel_model;
    if !(base_kg.is_finite() && rate_kg_per_km.is_finite()) || base_kg < 0.0 || rate_kg_per_km < 0.0
    {
        return Err(CategoryError::InvalidFuelModel(category.name.clone()));
    }
    Ok(())
}

/// Outcome of matching a distance against the category table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    Selected(&'a AircraftCategory),
    /// No category's range covers the distance. A valid result, not an error.
    Infeasible,
}

impl<'a> Selection<'a> {
    pub fn category(&self) -> Option<&'a AircraftCategory> {
        match *self {
            Selection::Selected(category) => Some(category),
            Selection::Infeasible => None,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

/// Pick the smallest aircraft that can fly `distance_km` directly.
///
/// Scans in ascending range order and returns the first category with
/// `max_range_km >= distance_km`. The boundary is inclusive: a route exactly as
/// long as a category's range selects that category.
pub fn select_aircraft(distance_km: f64, table: &CategoryTable) -> Selection<'_> {
    table
        .iter()
        .find(|category| category.max_range_km >= distance_km)
        .map_or(Selection::Infeasible, Selection::Selected)
}

/// Fuel and CO2 totals for one flight, plus per-seat shares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionsResult {
    pub fuel_burn_kg: f64,
    pub co2_emissions_kg: f64,
    pub fuel_burn_per_passenger_kg: f64,
    pub co2_per_passenger_kg: f64,
}

/// Estimate fuel burn and CO2 for `category` flying `distance_km`.
///
/// Per-passenger figures assume every seat is occupied.
pub fn compute_emissions(category: &AircraftCategory, distance_km: f64) -> EmissionsResult {
    let fuel_burn_kg = category.fuel_model.fuel_burn_kg(distance_km);
    let co2_emissions_kg = fuel_burn_kg * CO2_KG_PER_KG_FUEL;
    let seats = f64::from(category.seat_count);
    EmissionsResult {
        fuel_burn_kg,
        co2_emissions_kg,
        fuel_burn_per_passenger_kg: fuel_burn_kg / seats,
        co2_per_passenger_kg: co2_emissions_kg / seats,
    }
}
