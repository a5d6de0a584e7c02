//! Route analysis: validate a departure/arrival selection, measure the great-circle
//! distance, and match it against the aircraft table.

use flight_aircraft::{
    AircraftCategory, CategoryTable, EmissionsResult, compute_emissions, select_aircraft,
};
use flight_core::units::{km_to_nm, round_to};
use flight_export::{AircraftSummary, AirportSummary, RouteSummary};
use flight_geodesy::distance_km;
use log::debug;

use crate::catalog::{Airport, AirportCatalog, normalize_code};

/// Validation failures surfaced to the user. None of these are fatal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    #[error("Please select both departure and arrival airports.")]
    MissingSelection,
    #[error("Departure and arrival airports cannot be the same.")]
    IdenticalAirports,
    #[error("Unknown airport code: {0}.")]
    UnknownAirport(String),
}

/// Category chosen for a route and its fuel/CO2 estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftAssessment {
    pub category: AircraftCategory,
    pub emissions: EmissionsResult,
}

/// Result of one calculation. `assessment` is `None` when no category has the range.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteAnalysis {
    pub departure: Airport,
    pub arrival: Airport,
    pub distance_km: f64,
    pub longest_range_km: f64,
    pub assessment: Option<AircraftAssessment>,
}

impl RouteAnalysis {
    pub fn is_feasible(&self) -> bool {
        self.assessment.is_some()
    }

    pub fn selected_category(&self) -> Option<&AircraftCategory> {
        self.assessment.as_ref().map(|a| &a.category)
    }

    /// Rounded, display-ready view of the analysis.
    pub fn summary(&self) -> RouteSummary {
        let emissions = self.assessment.as_ref().map(|a| a.emissions);
        RouteSummary {
            departure: airport_summary(&self.departure),
            arrival: airport_summary(&self.arrival),
            distance_km: self.distance_km.round(),
            distance_nm: km_to_nm(self.distance_km).round(),
            feasible: self.is_feasible(),
            longest_range_km: self.longest_range_km,
            aircraft: self.selected_category().map(|c| AircraftSummary {
                name: c.name.clone(),
                description: c.description.clone(),
                seats: c.seat_count,
                max_range_km: c.max_range_km,
            }),
            fuel_burn_kg: emissions.map(|e| e.fuel_burn_kg.round()),
            co2_emissions_kg: emissions.map(|e| e.co2_emissions_kg.round()),
            fuel_burn_per_passenger_kg: emissions
                .map(|e| round_to(e.fuel_burn_per_passenger_kg, 1)),
            co2_per_passenger_kg: emissions.map(|e| round_to(e.co2_per_passenger_kg, 1)),
        }
    }
}

fn airport_summary(airport: &Airport) -> AirportSummary {
    AirportSummary {
        code: airport.code.clone(),
        latitude: airport.coordinate.latitude,
        longitude: airport.coordinate.longitude,
    }
}

/// Analyse the route between two airport codes.
///
/// Checks run in order: both codes present, codes distinct, codes known. Only then
/// is the distance computed. Codes compare case-insensitively.
pub fn analyze_route(
    catalog: &AirportCatalog,
    categories: &CategoryTable,
    departure_code: &str,
    arrival_code: &str,
) -> Result<RouteAnalysis, RouteError> {
    let departure_code = normalize_code(departure_code);
    let arrival_code = normalize_code(arrival_code);
    if departure_code.is_empty() || arrival_code.is_empty() {
        return Err(RouteError::MissingSelection);
    }
    if departure_code == arrival_code {
        return Err(RouteError::IdenticalAirports);
    }

    let departure = lookup(catalog, &departure_code)?;
    let arrival = lookup(catalog, &arrival_code)?;

    let distance_km = distance_km(&departure.coordinate, &arrival.coordinate);
    let assessment = select_aircraft(distance_km, categories)
        .category()
        .map(|category| AircraftAssessment {
            category: category.clone(),
            emissions: compute_emissions(category, distance_km),
        });
    debug!(
        "{} -> {}: {:.1} km, aircraft {}",
        departure.code,
        arrival.code,
        distance_km,
        assessment
            .as_ref()
            .map(|a| a.category.name.as_str())
            .unwrap_or("none")
    );

    Ok(RouteAnalysis {
        departure: departure.clone(),
        arrival: arrival.clone(),
        distance_km,
        longest_range_km: categories.max_range_km(),
        assessment,
    })
}

fn lookup<'a>(catalog: &'a AirportCatalog, code: &str) -> Result<&'a Airport, RouteError> {
    catalog
        .get(code)
        .ok_or_else(|| RouteError::UnknownAirport(code.to_string()))
}
