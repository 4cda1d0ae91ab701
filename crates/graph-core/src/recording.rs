// File: crates/graph-core/src/recording.rs
// Summary: Headless surface that records every primitive; used by tests and by callers
//          that want to post-process the command stream.

use skia_safe::Color;

use crate::geometry::Point;
use crate::surface::{DrawingSurface, FontSpec, PathData, TextAlign};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    FillRect { x: f64, y: f64, w: f64, h: f64, color: Color },
    StrokeLine { x0: f64, y0: f64, x1: f64, y1: f64, width: f64, color: Color },
    FillCircle { x: f64, y: f64, radius: f64, color: Color },
    FillPolygon { points: Vec<Point>, color: Color },
    StrokePath { path: PathData, width: f64, color: Color },
    Text { text: String, x: f64, y: f64, align: TextAlign, font: FontSpec, color: Color },
}

#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    /// Commands issued since the most recent `clear`.
    pub fn frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> f64 { self.width }
    fn height(&self) -> f64 { self.height }

    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }
    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, width: f64, color: Color) {
        self.commands.push(DrawCommand::StrokeLine { x0, y0, x1, y1, width, color });
    }
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle { x, y, radius, color });
    }
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::FillPolygon { points: points.to_vec(), color });
    }
    fn stroke_path(&mut self, path: &PathData, width: f64, color: Color) {
        self.commands.push(DrawCommand::StrokePath { path: path.clone(), width, color });
    }
    fn draw_text(&mut self, text: &str, x: f64, y: f64, align: TextAlign, font: &FontSpec, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            align,
            font: font.clone(),
            color,
        });
    }
}
