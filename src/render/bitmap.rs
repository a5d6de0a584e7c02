//! PNG surface backed by plotters' bitmap backend.

use std::path::Path;

use flight_projection::PixelPoint;
use image::imageops::{self, FilterType};
use log::warn;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{MapImage, RenderError, Rgb, Surface, estimate_text_width};

/// Surface that renders into a bitmap file, written on [`BitmapSurface::present`].
pub struct BitmapSurface<'a> {
    area: DrawingArea<BitMapBackend<'a>, Shift>,
    width: u32,
    height: u32,
    font_family: &'static str,
}

impl<'a> BitmapSurface<'a> {
    pub fn new(output: &'a Path, width: u32, height: u32) -> Self {
        let area = BitMapBackend::new(output, (width, height)).into_drawing_area();
        Self {
            area,
            width,
            height,
            font_family: select_font_family(),
        }
    }

    /// Flush the image to disk.
    pub fn present(self) -> Result<(), RenderError> {
        self.area.present().map_err(backend_error)
    }

    fn text_style(&self, font_px: f64, color: Rgb) -> TextStyle<'static> {
        (self.font_family, font_px)
            .into_font()
            .color(&rgb(color))
            .pos(Pos::new(HPos::Left, VPos::Bottom))
    }
}

impl Surface for BitmapSurface<'_> {
    fn width(&self) -> f64 {
        f64::from(self.width)
    }

    fn height(&self) -> f64 {
        f64::from(self.height)
    }

    fn clear_area(&mut self) -> Result<(), RenderError> {
        self.area.fill(&WHITE).map_err(backend_error)
    }

    fn fill_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgb,
    ) -> Result<(), RenderError> {
        let corners = [pixel(x, y), pixel(x + width, y + height)];
        self.area
            .draw(&Rectangle::new(corners, rgb(color).filled()))
            .map_err(backend_error)
    }

    fn draw_image(&mut self, image: &MapImage) -> Result<(), RenderError> {
        let scaled = imageops::resize(
            image.pixels(),
            self.width,
            self.height,
            FilterType::Triangle,
        );
        for (x, y, p) in scaled.enumerate_pixels() {
            self.area
                .draw_pixel((x as i32, y as i32), &RGBColor(p[0], p[1], p[2]))
                .map_err(backend_error)?;
        }
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: PixelPoint,
        to: PixelPoint,
        color: Rgb,
        stroke_width: u32,
    ) -> Result<(), RenderError> {
        let path = vec![pixel(from.x, from.y), pixel(to.x, to.y)];
        self.area
            .draw(&PathElement::new(
                path,
                ShapeStyle::from(&rgb(color)).stroke_width(stroke_width),
            ))
            .map_err(backend_error)
    }

    fn draw_dot(&mut self, center: PixelPoint, radius: f64, color: Rgb) -> Result<(), RenderError> {
        self.area
            .draw(&Circle::new(
                pixel(center.x, center.y),
                radius.round() as i32,
                rgb(color).filled(),
            ))
            .map_err(backend_error)
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: PixelPoint,
        font_px: f64,
        color: Rgb,
    ) -> Result<(), RenderError> {
        let style = self.text_style(font_px, color);
        let element = Text::new(text.to_string(), pixel(origin.x, origin.y), style);
        // A missing system font should not cost the whole map.
        if let Err(err) = self.area.draw(&element) {
            warn!("skipping label '{text}': {err}");
        }
        Ok(())
    }

    fn measure_text(&self, text: &str, font_px: f64) -> f64 {
        let style = self.text_style(font_px, Rgb::BLACK);
        match self.area.estimate_text_size(text, &style) {
            Ok((width, _)) => f64::from(width),
            Err(_) => estimate_text_width(text, font_px),
        }
    }
}

fn select_font_family() -> &'static str {
    if cfg!(target_os = "macos") {
        "Helvetica"
    } else if cfg!(target_os = "windows") {
        "Arial"
    } else {
        "DejaVu Sans"
    }
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn pixel(x: f64, y: f64) -> (i32, i32) {
    (x.round() as i32, y.round() as i32)
}

fn backend_error<E: std::error::Error>(err: E) -> RenderError {
    RenderError::Backend(err.to_string())
}
