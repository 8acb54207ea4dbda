use crate::coords::{Rect, Vec2};
use crate::scene::DrawList;

use super::context::Context2d;

/// A drawing surface with integer backing dimensions and a 2D context.
///
/// Assigning either dimension, even to its current value, clears the surface:
/// painted strokes, the pending path and context styles are all reset.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    width: u32,
    height: u32,
    ctx: Context2d,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ctx: Context2d::new() }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
        self.ctx.reset();
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height;
        self.ctx.reset();
    }

    /// Sets both backing dimensions, clearing the surface once.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ctx.reset();
    }

    pub fn context(&self) -> &Context2d {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut Context2d {
        &mut self.ctx
    }

    /// Records the painted content as line commands.
    ///
    /// `origin` is where the surface's top-left corner sits in the target's
    /// logical space. Everything is clipped to the surface bounds.
    pub fn present(&self, draw_list: &mut DrawList, origin: Vec2) {
        let bounds = Rect::from_origin_size(
            origin,
            Vec2::new(self.width as f32, self.height as f32),
        );
        if bounds.is_empty() {
            return;
        }

        draw_list.push_clip(bounds);
        for stroke in self.ctx.strokes() {
            for seg in &stroke.segments {
                draw_list.push_line(seg.from + origin, seg.to + origin, stroke.width, stroke.color);
            }
        }
        draw_list.pop_clip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PathContext;
    use crate::paint::Color;
    use crate::scene::DrawCmd;

    fn painted() -> Canvas {
        let mut canvas = Canvas::new(100, 50);
        let ctx = canvas.context_mut();
        ctx.move_to(0.5, 0.0);
        ctx.line_to(0.5, 50.0);
        ctx.set_stroke_style(Color::from_srgb_u8(255, 0, 0, 255));
        ctx.stroke();
        canvas
    }

    #[test]
    fn resize_clears_content_and_styles() {
        let mut canvas = painted();
        canvas.resize(200, 80);

        assert_eq!((canvas.width(), canvas.height()), (200, 80));
        assert!(canvas.context().strokes().is_empty());
        assert!(canvas.context().pending_path().is_empty());
        assert_eq!(canvas.context().stroke_style(), Color::black());
    }

    #[test]
    fn setting_same_width_still_clears() {
        let mut canvas = painted();
        canvas.set_width(100);
        assert!(canvas.context().strokes().is_empty());
    }

    #[test]
    fn present_translates_and_clips_to_bounds() {
        let canvas = painted();
        let mut list = DrawList::new();
        canvas.present(&mut list, Vec2::new(0.0, 30.0));

        assert_eq!(list.items().len(), 1);
        let item = &list.items()[0];
        assert_eq!(item.clip_rect, Some(Rect::new(0.0, 30.0, 100.0, 50.0)));
        let DrawCmd::Line(line) = &item.cmd;
        assert_eq!(line.from, Vec2::new(0.5, 30.0));
        assert_eq!(line.to, Vec2::new(0.5, 80.0));
        assert_eq!(line.width, 1.0);
    }

    #[test]
    fn zero_sized_surface_presents_nothing() {
        let mut canvas = painted();
        canvas.set_height(0);
        let ctx = canvas.context_mut();
        ctx.move_to(0.0, 0.0);
        ctx.line_to(10.0, 0.0);
        ctx.stroke();

        let mut list = DrawList::new();
        canvas.present(&mut list, Vec2::zero());
        assert!(list.is_empty());
    }
}
