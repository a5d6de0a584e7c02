//! Display-ready route result with values already rounded for presentation.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportSummary {
    pub code: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftSummary {
    pub name: String,
    pub description: String,
    pub seats: u32,
    pub max_range_km: f64,
}

/// Rounded route analysis.
///
/// Distance, fuel, and CO2 totals are whole kilograms/kilometres; per-passenger
/// values carry one decimal. Derived fields are `None` when no aircraft can fly
/// the route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub departure: AirportSummary,
    pub arrival: AirportSummary,
    pub distance_km: f64,
    pub distance_nm: f64,
    pub feasible: bool,
    pub longest_range_km: f64,
    pub aircraft: Option<AircraftSummary>,
    pub fuel_burn_kg: Option<f64>,
    pub co2_emissions_kg: Option<f64>,
    pub fuel_burn_per_passenger_kg: Option<f64>,
    pub co2_per_passenger_kg: Option<f64>,
}

impl RouteSummary {
    /// `"LAX → SYD"`.
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.departure.code, self.arrival.code)
    }

    /// Informational notice shown when no aircraft category covers the distance.
    pub fn infeasible_notice(&self) -> String {
        format!(
            "No single aircraft category can fly this route directly ({:.0} km exceeds the longest range of {:.0} km).",
            self.distance_km, self.longest_range_km
        )
    }
}
