//! Core units, constants, and shared primitives for the Flight Route Calculator workspace.

/// Physical and emission constants.
pub mod constants {
    /// Mean Earth radius used for great-circle distances (km).
    pub const EARTH_RADIUS_KM: f64 = 6_371.2;
    /// Kilograms of CO2 released per kilogram of jet fuel burned.
    pub const CO2_KG_PER_KG_FUEL: f64 = 3.16;
}

/// Basic unit conversion and rounding helpers.
pub mod units {
    /// Kilometres per nautical mile.
    pub const KM_PER_NM: f64 = 1.852;

    /// Convert kilometres to nautical miles.
    #[inline]
    pub fn km_to_nm(v: f64) -> f64 {
        v / KM_PER_NM
    }

    /// Round to a fixed number of decimal places (half away from zero).
    #[inline]
    pub fn round_to(v: f64, decimals: u32) -> f64 {
        let factor = 10_f64.powi(decimals as i32);
        (v * factor).round() / factor
    }
}

/// Geographic primitives.
pub mod geo {
    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    /// Latitude/longitude pair in decimal degrees.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct GeoCoordinate {
        pub latitude: f64,
        pub longitude: f64,
    }

    /// Raised when a coordinate falls outside the valid degree ranges.
    #[derive(Debug, Error, PartialEq)]
    pub enum CoordinateError {
        #[error("latitude {0} outside [-90, 90]")]
        Latitude(f64),
        #[error("longitude {0} outside [-180, 180]")]
        Longitude(f64),
    }

    impl GeoCoordinate {
        /// Build a coordinate without range checks.
        pub const fn new(latitude: f64, longitude: f64) -> Self {
            Self {
                latitude,
                longitude,
            }
        }

        /// Build a coordinate, rejecting values outside the degree ranges (and NaN).
        pub fn new_checked(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
            if !(-90.0..=90.0).contains(&latitude) {
                return Err(CoordinateError::Latitude(latitude));
            }
            if !(-180.0..=180.0).contains(&longitude) {
                return Err(CoordinateError::Longitude(longitude));
            }
            Ok(Self::new(latitude, longitude))
        }
    }
}
