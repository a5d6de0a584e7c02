//! Great-circle flight distances, route maps, and aircraft fuel/CO2 estimates.
//!
//! The numeric core lives in small crates (geodesy, projection, aircraft); this
//! library builds the catalogs, validates selections, renders the route, and
//! hands the results to whichever front-end drives it.

pub mod app;
pub mod catalog;
pub mod logging;
pub mod render;
pub mod route;

pub use flight_aircraft as aircraft;
pub use flight_config as config;
pub use flight_core as base;
pub use flight_export as export;
pub use flight_geodesy as geodesy;
pub use flight_projection as projection;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
