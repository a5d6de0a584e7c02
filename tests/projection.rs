use flight_route_calculator::base::geo::GeoCoordinate;
use flight_route_calculator::projection::{Equirectangular, PixelPoint, project};

fn assert_close(actual: PixelPoint, x: f64, y: f64) {
    assert!(
        (actual.x - x).abs() < 1e-9 && (actual.y - y).abs() < 1e-9,
        "expected ({x}, {y}), got {actual:?}"
    );
}

#[test]
fn corners_and_centre_map_to_surface_bounds() {
    let p = Equirectangular::new(1280.0, 640.0);
    assert_close(p.project(&GeoCoordinate::new(90.0, -180.0)), 0.0, 0.0);
    assert_close(p.project(&GeoCoordinate::new(-90.0, 180.0)), 1280.0, 640.0);
    assert_close(p.project(&GeoCoordinate::new(0.0, 0.0)), 640.0, 320.0);
}

#[test]
fn free_function_matches_projection_struct() {
    let c = GeoCoordinate::new(51.47, -0.4543);
    let a = project(&c, 800.0, 400.0);
    let b = Equirectangular::new(800.0, 400.0).project(&c);
    assert_eq!(a, b);
    assert!((a.x - (179.5457 * 800.0 / 360.0)).abs() < 1e-9);
    assert!((a.y - (38.53 * 400.0 / 180.0)).abs() < 1e-9);
}

#[test]
fn unproject_inverts_project() {
    let p = Equirectangular::new(1000.0, 500.0);
    let points = [
        (33.9416, -118.4085),
        (-33.9399, 151.1753),
        (0.0, 0.0),
        (-89.5, 179.9),
    ];
    for (lat, lon) in points {
        let back = p.unproject(&p.project(&GeoCoordinate::new(lat, lon)));
        assert!((back.latitude - lat).abs() < 1e-9);
        assert!((back.longitude - lon).abs() < 1e-9);
    }
}

#[test]
fn midpoint_is_halfway_in_pixel_space() {
    let a = PixelPoint { x: 10.0, y: 20.0 };
    let b = PixelPoint { x: 30.0, y: 60.0 };
    assert_eq!(a.midpoint(&b), PixelPoint { x: 20.0, y: 40.0 });
    assert_eq!(a.midpoint(&b), b.midpoint(&a));
}
