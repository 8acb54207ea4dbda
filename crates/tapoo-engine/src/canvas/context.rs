use crate::coords::Vec2;
use crate::paint::Color;

use super::path::{PathContext, Segment};

/// Segments painted by a single `stroke` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub segments: Vec<Segment>,
    pub color: Color,
    pub width: f32,
}

/// 2D drawing context bound to a [`Canvas`](super::Canvas).
///
/// Stroke and fill styles start as opaque black. `line_width` starts at 1.
#[derive(Debug, Clone)]
pub struct Context2d {
    path: Vec<Segment>,
    current: Option<Vec2>,

    stroke_style: Color,
    fill_style: Color,
    line_width: f32,

    painted: Vec<Stroke>,
}

impl Default for Context2d {
    fn default() -> Self {
        Self {
            path: Vec::new(),
            current: None,
            stroke_style: Color::black(),
            fill_style: Color::black(),
            line_width: 1.0,
            painted: Vec::new(),
        }
    }
}

impl Context2d {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards the pending path. Painted content is kept.
    pub fn begin_path(&mut self) {
        self.path.clear();
        self.current = None;
    }

    /// Segments accumulated since the last `begin_path` (or reset).
    pub fn pending_path(&self) -> &[Segment] {
        &self.path
    }

    /// Everything stroked onto the surface, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.painted
    }

    pub fn stroke_style(&self) -> Color {
        self.stroke_style
    }

    pub fn fill_style(&self) -> Color {
        self.fill_style
    }

    pub fn set_fill_style(&mut self, color: Color) {
        self.fill_style = color;
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Non-positive and non-finite widths are ignored.
    pub fn set_line_width(&mut self, width: f32) {
        if width > 0.0 && width.is_finite() {
            self.line_width = width;
        }
    }

    /// Returns the context to its initial state: no path, no painted content,
    /// default styles.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

impl PathContext for Context2d {
    fn move_to(&mut self, x: f32, y: f32) {
        self.current = Some(Vec2::new(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let to = Vec2::new(x, y);
        // Without a current point, line_to behaves like move_to.
        if let Some(from) = self.current {
            self.path.push(Segment::new(from, to));
        }
        self.current = Some(to);
    }

    fn stroke(&mut self) {
        self.painted.push(Stroke {
            segments: self.path.clone(),
            color: self.stroke_style,
            width: self.line_width,
        });
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.stroke_style = color;
    }
}
