//! Great-circle distance on a spherical Earth.
use flight_core::constants::EARTH_RADIUS_KM;
use flight_core::geo::GeoCoordinate;

/// Haversine distance between two coordinates on a sphere of the given radius.
///
/// The result carries the unit of `radius_km`. Coordinates are not range-checked here.
pub fn haversine_distance(a: &GeoCoordinate, b: &GeoCoordinate, radius_km: f64) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair outside [0, 1] for antipodal points.
    let h = h.clamp(0.0, 1.0);
    2.0 * radius_km * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great-circle distance in kilometres using the Earth radius of 6371.2 km.
pub fn distance_km(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    haversine_distance(a, b, EARTH_RADIUS_KM)
}
