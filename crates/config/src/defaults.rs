//! Built-in airport and aircraft tables.
//!
//! Values must stay bit-exact with `configs/airports.yaml` and `configs/aircraft.yaml`.

use crate::{AircraftConfig, AirportConfig, FuelModelConfig};

const AIRPORTS: [(&str, f64, f64); 10] = [
    ("ATL", 33.6407, -84.4277),
    ("GRU", -23.4356, -46.4731),
    ("DEN", 39.8561, -104.6737),
    ("JNB", -26.1369, 28.246),
    ("LAX", 33.9416, -118.4085),
    ("PEK", 40.0799, 116.6031),
    ("DXB", 25.2532, 55.3657),
    ("LHR", 51.4700, -0.4543),
    ("SYD", -33.9399, 151.1753),
    ("CDG", 49.0097, 2.5479),
];

// name, seats, max range (km), fuel base (kg), fuel rate (kg/km), description
const AIRCRAFT: [(&str, u32, f64, f64, f64, &str); 5] = [
    ("Piston", 9, 1_000.0, 40.0, 0.16, "Small private aircraft"),
    ("Turboprop", 70, 2_000.0, 300.0, 0.85, "Regional aircraft for short routes"),
    ("Regional Jet", 100, 3_500.0, 1_000.0, 0.8, "Small commercial jets"),
    ("Narrow-body Jet", 180, 6_000.0, 4_500.0, 8.52, "Standard commercial aircraft"),
    ("Wide-body Jet", 250, 17_000.0, 6_000.0, 9.00, "Long-haul aircraft"),
];

/// The ten built-in airports, in catalog order.
pub fn default_airports() -> Vec<AirportConfig> {
    AIRPORTS
        .iter()
        .map(|&(code, latitude, longitude)| AirportConfig {
            code: code.to_string(),
            latitude,
            longitude,
        })
        .collect()
}

/// The five built-in aircraft categories, in ascending range order.
pub fn default_aircraft() -> Vec<AircraftConfig> {
    AIRCRAFT
        .iter()
        .map(
            |&(name, seats, max_range_km, base_kg, rate_kg_per_km, description)| AircraftConfig {
                name: name.to_string(),
                seats,
                max_range_km,
                fuel_model: FuelModelConfig::Affine {
                    base_kg,
                    rate_kg_per_km,
                },
                description: description.to_string(),
            },
        )
        .collect()
}
