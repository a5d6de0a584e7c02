//! CSV table of airport pairs.

use std::io::Write;

use serde::Serialize;

/// One row per ordered airport pair. Aircraft columns are blank for infeasible routes.
#[derive(Debug, Clone, Serialize)]
pub struct RouteRow {
    pub departure: String,
    pub arrival: String,
    pub distance_km: f64,
    pub aircraft: Option<String>,
    pub fuel_burn_kg: Option<f64>,
    pub co2_emissions_kg: Option<f64>,
    pub co2_per_passenger_kg: Option<f64>,
}

/// Write the header and all rows.
pub fn write_route_table<W: Write>(writer: W, rows: &[RouteRow]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
