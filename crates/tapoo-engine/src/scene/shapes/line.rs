use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Straight line segment draw payload.
///
/// The segment is stroked with butt caps: the quad spans exactly `from..to`
/// along the segment and `width / 2` on either side of it.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, width: f32, color: Color) -> Self {
        Self { from, to, width, color }
    }
}

impl DrawList {
    /// Records a line segment draw command.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(DrawCmd::Line(LineCmd::new(from, to, width, color)));
    }
}
