use flight_route_calculator::base::geo::GeoCoordinate;
use flight_route_calculator::catalog::AirportCatalog;
use flight_route_calculator::geodesy::{distance_km, haversine_distance};

fn coord(catalog: &AirportCatalog, code: &str) -> GeoCoordinate {
    catalog.get(code).expect("airport in catalog").coordinate
}

#[test]
fn distance_is_symmetric_for_every_airport_pair() {
    let catalog = AirportCatalog::builtin().expect("builtin airports");
    for a in catalog.iter() {
        for b in catalog.iter() {
            let ab = distance_km(&a.coordinate, &b.coordinate);
            let ba = distance_km(&b.coordinate, &a.coordinate);
            assert!((ab - ba).abs() < 1e-9, "{} / {}: {ab} vs {ba}", a.code, b.code);
            assert!(ab >= 0.0);
        }
    }
}

#[test]
fn distance_to_self_is_zero() {
    let catalog = AirportCatalog::builtin().expect("builtin airports");
    for airport in catalog.iter() {
        assert_eq!(distance_km(&airport.coordinate, &airport.coordinate), 0.0);
    }
    let pole = GeoCoordinate::new(90.0, 0.0);
    assert_eq!(distance_km(&pole, &pole), 0.0);
}

#[test]
fn london_heathrow_to_paris_cdg_is_about_344_km() {
    let catalog = AirportCatalog::builtin().expect("builtin airports");
    let d = distance_km(&coord(&catalog, "LHR"), &coord(&catalog, "CDG"));
    assert!((d - 344.0).abs() <= 5.0, "LHR-CDG = {d}");
}

#[test]
fn los_angeles_to_sydney_is_about_12074_km() {
    let catalog = AirportCatalog::builtin().expect("builtin airports");
    let d = distance_km(&coord(&catalog, "LAX"), &coord(&catalog, "SYD"));
    assert!((d - 12_074.0).abs() <= 20.0, "LAX-SYD = {d}");
}

#[test]
fn quarter_meridian_matches_sphere_geometry() {
    let equator = GeoCoordinate::new(0.0, 0.0);
    let pole = GeoCoordinate::new(90.0, 0.0);
    let expected = std::f64::consts::FRAC_PI_2 * 6_371.2;
    assert!((distance_km(&equator, &pole) - expected).abs() < 1e-6);

    // Antipodal points give half the circumference without NaN.
    let antipode = GeoCoordinate::new(0.0, 180.0);
    let half = std::f64::consts::PI * 6_371.2;
    assert!((distance_km(&equator, &antipode) - half).abs() < 1e-6);
}

#[test]
fn haversine_scales_with_radius() {
    let a = GeoCoordinate::new(10.0, 20.0);
    let b = GeoCoordinate::new(-15.0, 75.0);
    let unit = haversine_distance(&a, &b, 1.0);
    assert!((haversine_distance(&a, &b, 6_371.2) - unit * 6_371.2).abs() < 1e-6);
    assert!((distance_km(&a, &b) - unit * 6_371.2).abs() < 1e-6);
}
