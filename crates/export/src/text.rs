//! Plain-text rendering of a route summary for terminal output.

use crate::summary::RouteSummary;

/// Multi-line results block.
pub fn results_block(summary: &RouteSummary) -> String {
    let mut out = format!(
        "=== Route Analysis: {} ===\nDistance: {:.0} km ({:.0} nm)\n",
        summary.route_label(),
        summary.distance_km,
        summary.distance_nm
    );

    let Some(aircraft) = &summary.aircraft else {
        out.push_str(&summary.infeasible_notice());
        out.push('\n');
        return out;
    };

    out.push_str(&format!(
        "Aircraft: {} ({}, {} seats, range {:.0} km)\n",
        aircraft.name, aircraft.description, aircraft.seats, aircraft.max_range_km
    ));
    if let Some(fuel) = summary.fuel_burn_kg {
        out.push_str(&format!("Fuel burn: {fuel:.0} kg\n"));
    }
    if let Some(co2) = summary.co2_emissions_kg {
        out.push_str(&format!("CO2 emissions: {co2:.0} kg\n"));
    }
    if let Some(fuel_pp) = summary.fuel_burn_per_passenger_kg {
        out.push_str(&format!("Fuel per passenger: {fuel_pp:.1} kg\n"));
    }
    if let Some(co2_pp) = summary.co2_per_passenger_kg {
        out.push_str(&format!("CO2 per passenger: {co2_pp:.1} kg\n"));
    }
    out
}
