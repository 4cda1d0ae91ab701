// File: crates/graph-core/src/raster.rs
// Summary: DrawingSurface backed by a Skia CPU raster surface, with PNG/RGBA snapshots.

use anyhow::{anyhow, Result};
use skia_safe as skia;

use crate::geometry::Point;
use crate::surface::{DrawingSurface, FontSpec, PathData, PathSegment, TextAlign};
use crate::text::TextShaper;

pub struct SkiaSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
    background: skia::Color,
    shaper: Option<TextShaper>,
}

fn finite(vals: &[f64]) -> bool {
    vals.iter().all(|v| v.is_finite())
}

fn sk_point(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke_paint(color: skia::Color, width: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width as f32);
    paint.set_color(color);
    paint
}

impl SkiaSurface {
    /// White raster surface of `width` x `height` pixels with text enabled.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;
        Ok(Self {
            surface,
            width,
            height,
            background: skia::Color::WHITE,
            shaper: Some(TextShaper::new()),
        })
    }

    pub fn with_background(mut self, color: skia::Color) -> Self {
        self.background = color;
        self
    }

    /// Disable text to get output that does not depend on installed fonts.
    pub fn with_text(mut self, enabled: bool) -> Self {
        self.shaper = if enabled { self.shaper.take().or_else(|| Some(TextShaper::new())) } else { None };
        self
    }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA8 pixels, row-major, `width * 4` bytes per row.
    pub fn rgba8(&mut self) -> Result<Vec<u8>> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(anyhow!("reading raster pixels failed"));
        }
        Ok(pixels)
    }
}

impl DrawingSurface for SkiaSurface {
    fn width(&self) -> f64 { self.width as f64 }
    fn height(&self) -> f64 { self.height as f64 }

    fn clear(&mut self, _width: f64, _height: f64) {
        self.surface.canvas().clear(self.background);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: skia::Color) {
        if !finite(&[x, y, w, h]) { return; }
        let rect = skia::Rect::from_xywh(x as f32, y as f32, w as f32, h as f32);
        self.surface.canvas().draw_rect(rect, &fill_paint(color));
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, width: f64, color: skia::Color) {
        if !finite(&[x0, y0, x1, y1]) { return; }
        self.surface.canvas().draw_line(
            (x0 as f32, y0 as f32),
            (x1 as f32, y1 as f32),
            &stroke_paint(color, width),
        );
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: skia::Color) {
        if !finite(&[x, y, radius]) { return; }
        self.surface.canvas().draw_circle((x as f32, y as f32), radius as f32, &fill_paint(color));
    }

    fn fill_polygon(&mut self, points: &[Point], color: skia::Color) {
        if points.len() < 3 || points.iter().any(|p| !finite(&[p.x, p.y])) { return; }
        let mut path = skia::PathBuilder::new();
        path.move_to(sk_point(points[0]));
        for p in &points[1..] {
            path.line_to(sk_point(*p));
        }
        path.close();
        self.surface.canvas().draw_path(&path.detach(), &fill_paint(color));
    }

    fn stroke_path(&mut self, data: &PathData, width: f64, color: skia::Color) {
        let mut path = skia::PathBuilder::new();
        for seg in &data.segments {
            match *seg {
                PathSegment::MoveTo(p) => {
                    if !finite(&[p.x, p.y]) { return; }
                    path.move_to(sk_point(p));
                }
                PathSegment::LineTo(p) => {
                    if !finite(&[p.x, p.y]) { return; }
                    path.line_to(sk_point(p));
                }
                PathSegment::QuadTo { ctrl, to } => {
                    if !finite(&[ctrl.x, ctrl.y, to.x, to.y]) { return; }
                    path.quad_to(sk_point(ctrl), sk_point(to));
                }
            }
        }
        self.surface.canvas().draw_path(&path.detach(), &stroke_paint(color, width));
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, align: TextAlign, font: &FontSpec, color: skia::Color) {
        if !finite(&[x, y]) || text.is_empty() { return; }
        if let Some(shaper) = &self.shaper {
            shaper.draw(self.surface.canvas(), text, x as f32, y as f32, align, font, color);
        }
    }
}
