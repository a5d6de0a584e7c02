//! Equirectangular projection between geographic coordinates and surface pixels.
//!
//! The mapping is a fixed linear transform: longitude spans the full width and
//! latitude the full height, with north at the top. It is reversible up to
//! floating point rounding.
use flight_core::geo::GeoCoordinate;

/// Point on a rendering surface, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    /// Midpoint of the straight segment between two pixel points.
    pub fn midpoint(&self, other: &PixelPoint) -> PixelPoint {
        PixelPoint {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Equirectangular projection onto a surface of known dimensions (pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equirectangular {
    pub width: f64,
    pub height: f64,
}

impl Equirectangular {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Map a coordinate onto the surface.
    pub fn project(&self, c: &GeoCoordinate) -> PixelPoint {
        PixelPoint {
            x: (c.longitude + 180.0) * (self.width / 360.0),
            y: (90.0 - c.latitude) * (self.height / 180.0),
        }
    }

    /// Inverse of [`Equirectangular::project`].
    pub fn unproject(&self, p: &PixelPoint) -> GeoCoordinate {
        GeoCoordinate {
            latitude: 90.0 - p.y * (180.0 / self.height),
            longitude: p.x * (360.0 / self.width) - 180.0,
        }
    }
}

/// Project a coordinate onto a `surface_width` x `surface_height` surface.
pub fn project(c: &GeoCoordinate, surface_width: f64, surface_height: f64) -> PixelPoint {
    Equirectangular::new(surface_width, surface_height).project(c)
}
