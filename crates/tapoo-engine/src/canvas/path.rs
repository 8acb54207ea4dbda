use crate::coords::Vec2;
use crate::paint::Color;

/// One straight piece of a path, in surface coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

impl Segment {
    #[inline]
    pub const fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }
}

/// The path-building subset of a 2D drawing context.
///
/// Code that only needs to build and stroke paths (the grid painter, for one)
/// should take this trait instead of a concrete context, so tests can record
/// the calls.
pub trait PathContext {
    /// Starts a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f32, y: f32);

    /// Adds a segment from the current point to `(x, y)`.
    fn line_to(&mut self, x: f32, y: f32);

    /// Paints all pending segments with the current stroke style.
    fn stroke(&mut self);

    /// Sets the color used by subsequent `stroke` calls.
    fn set_stroke_style(&mut self, color: Color);
}
