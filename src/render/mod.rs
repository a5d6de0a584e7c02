//! Route overlay rendering onto an abstract drawing surface.
//!
//! [`Surface`] is the drawing capability; [`RouteRenderer`] decides what goes on it.
//! [`bitmap::BitmapSurface`] writes PNG files through plotters, and [`NullSurface`]
//! discards everything for front-ends that only want the numbers.

pub mod bitmap;

use std::path::Path;

use flight_core::geo::GeoCoordinate;
use flight_projection::{Equirectangular, PixelPoint};
use image::RgbImage;
use thiserror::Error;

use crate::route::RouteAnalysis;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing backend error: {0}")]
    Backend(String),
    #[error("failed to load map image: {0}")]
    Image(#[from] image::ImageError),
}

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const LIGHT_GREY: Rgb = Rgb(200, 210, 215);
    /// Pale blue used behind the map.
    pub const SEA: Rgb = Rgb(0xe8, 0xf4, 0xf8);
}

/// Equirectangular world map raster, scaled to the surface when drawn.
#[derive(Debug, Clone)]
pub struct MapImage {
    pixels: RgbImage,
}

impl MapImage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RenderError> {
        Ok(Self {
            pixels: image::open(path)?.to_rgb8(),
        })
    }

    pub fn from_rgb(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }
}

/// Drawing capability. Coordinates are pixels from the top-left corner.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    /// Erase everything previously drawn.
    fn clear_area(&mut self) -> Result<(), RenderError>;
    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb,
    ) -> Result<(), RenderError>;
    /// Draw `image` stretched over the whole surface.
    fn draw_image(&mut self, image: &MapImage) -> Result<(), RenderError>;
    fn draw_line(
        &mut self,
        from: PixelPoint,
        to: PixelPoint,
        color: Rgb,
        stroke_width: u32,
    ) -> Result<(), RenderError>;
    fn draw_dot(&mut self, center: PixelPoint, radius: f64, color: Rgb) -> Result<(), RenderError>;
    /// Draw `text` with its baseline starting at `origin`.
    fn draw_text(
        &mut self,
        text: &str,
        origin: PixelPoint,
        font_px: f64,
        color: Rgb,
    ) -> Result<(), RenderError>;
    /// Rendered width of `text` in pixels.
    fn measure_text(&self, text: &str, font_px: f64) -> f64;
}

/// Colours and sizes of the route overlay.
#[derive(Debug, Clone)]
pub struct RouteStyle {
    pub background: Rgb,
    pub graticule: Rgb,
    pub graticule_step_deg: f64,
    pub route: Rgb,
    pub route_width: u32,
    pub departure: Rgb,
    pub arrival: Rgb,
    pub dot_radius: f64,
    pub font_px: f64,
    pub label_offset: f64,
    pub distance_fill: Rgb,
    pub distance_text: Rgb,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            background: Rgb::SEA,
            graticule: Rgb::LIGHT_GREY,
            graticule_step_deg: 30.0,
            route: Rgb::BLUE,
            route_width: 2,
            departure: Rgb::GREEN,
            arrival: Rgb::RED,
            dot_radius: 5.0,
            font_px: 14.0,
            label_offset: 8.0,
            distance_fill: Rgb::YELLOW,
            distance_text: Rgb::BLACK,
        }
    }
}

/// Draws the map background and route overlays.
#[derive(Debug, Clone, Default)]
pub struct RouteRenderer {
    pub style: RouteStyle,
    pub map: Option<MapImage>,
}

impl RouteRenderer {
    pub fn new(style: RouteStyle, map: Option<MapImage>) -> Self {
        Self { style, map }
    }

    /// Clear the surface and paint the background: the map image if one is set,
    /// otherwise a plain graticule.
    pub fn draw_base(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        let (width, height) = (surface.width(), surface.height());
        surface.clear_area()?;
        surface.fill_rect(0.0, 0.0, width, height, self.style.background)?;
        match &self.map {
            Some(map) => surface.draw_image(map),
            None => self.draw_graticule(surface),
        }
    }

    fn draw_graticule(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        let step = self.style.graticule_step_deg;
        if step <= 0.0 {
            return Ok(());
        }
        let (width, height) = (surface.width(), surface.height());
        let projection = Equirectangular::new(width, height);

        let mut lon = -180.0 + step;
        while lon < 180.0 {
            let x = projection.project(&GeoCoordinate::new(0.0, lon)).x;
            surface.draw_line(
                PixelPoint { x, y: 0.0 },
                PixelPoint { x, y: height },
                self.style.graticule,
                1,
            )?;
            lon += step;
        }
        let mut lat = -90.0 + step;
        while lat < 90.0 {
            let y = projection.project(&GeoCoordinate::new(lat, 0.0)).y;
            surface.draw_line(
                PixelPoint { x: 0.0, y },
                PixelPoint { x: width, y },
                self.style.graticule,
                1,
            )?;
            lat += step;
        }
        Ok(())
    }

    /// Draw the route line, endpoint dots and labels, and the distance label.
    pub fn draw_route(
        &self,
        surface: &mut dyn Surface,
        analysis: &RouteAnalysis,
    ) -> Result<(), RenderError> {
        let style = &self.style;
        let projection = Equirectangular::new(surface.width(), surface.height());
        let from = projection.project(&analysis.departure.coordinate);
        let to = projection.project(&analysis.arrival.coordinate);

        surface.draw_line(from, to, style.route, style.route_width)?;
        self.draw_endpoint(surface, from, &analysis.departure.code, style.departure)?;
        self.draw_endpoint(surface, to, &analysis.arrival.code, style.arrival)?;

        let text = format!("{:.0} km", analysis.distance_km.round());
        let mid = from.midpoint(&to);
        let text_width = surface.measure_text(&text, style.font_px);
        surface.fill_rect(
            mid.x - text_width / 2.0 - 5.0,
            mid.y - 10.0,
            text_width + 10.0,
            20.0,
            style.distance_fill,
        )?;
        surface.draw_text(
            &text,
            PixelPoint {
                x: mid.x - text_width / 2.0,
                y: mid.y + 5.0,
            },
            style.font_px,
            style.distance_text,
        )
    }

    fn draw_endpoint(
        &self,
        surface: &mut dyn Surface,
        at: PixelPoint,
        label: &str,
        color: Rgb,
    ) -> Result<(), RenderError> {
        surface.draw_dot(at, self.style.dot_radius, color)?;
        surface.draw_text(
            label,
            PixelPoint {
                x: at.x + self.style.label_offset,
                y: at.y - self.style.label_offset,
            },
            self.style.font_px,
            color,
        )
    }
}

/// Surface of fixed size that draws nothing.
#[derive(Debug, Clone, Copy)]
pub struct NullSurface {
    pub width: f64,
    pub height: f64,
}

impl Surface for NullSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_area(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn fill_rect(&mut self, _: f64, _: f64, _: f64, _: f64, _: Rgb) -> Result<(), RenderError> {
        Ok(())
    }

    fn draw_image(&mut self, _: &MapImage) -> Result<(), RenderError> {
        Ok(())
    }

    fn draw_line(
        &mut self,
        _: PixelPoint,
        _: PixelPoint,
        _: Rgb,
        _: u32,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    fn draw_dot(&mut self, _: PixelPoint, _: f64, _: Rgb) -> Result<(), RenderError> {
        Ok(())
    }

    fn draw_text(&mut self, _: &str, _: PixelPoint, _: f64, _: Rgb) -> Result<(), RenderError> {
        Ok(())
    }

    fn measure_text(&self, text: &str, font_px: f64) -> f64 {
        estimate_text_width(text, font_px)
    }
}

/// Width estimate used when no font metrics are available.
pub fn estimate_text_width(text: &str, font_px: f64) -> f64 {
    text.chars().count() as f64 * font_px * 0.6
}
