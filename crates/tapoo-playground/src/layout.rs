use tapoo_engine::coords::{Rect, Vec2, Viewport};

/// Where the canvas sits in the window: a header band, the surface, a footer band.
///
/// Computed from a fresh viewport reading each time; nothing here is cached.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceLayout {
    pub viewport: Viewport,
    pub header: f32,
    pub footer: f32,
}

impl SurfaceLayout {
    /// Reserves `margin_fraction` of the viewport height for the header and the
    /// same again for the footer.
    pub fn compute(viewport: Viewport, margin_fraction: f32) -> Self {
        Self {
            viewport,
            header: viewport.height * margin_fraction,
            footer: viewport.height * margin_fraction,
        }
    }

    /// Height left for the surface, in logical pixels. May be negative or NaN
    /// for nonsensical inputs; the backing size below saturates to zero.
    pub fn usable_height(&self) -> f32 {
        self.viewport.height - (self.header + self.footer)
    }

    /// Backing width: the viewport width, truncated to whole pixels.
    pub fn surface_width(&self) -> u32 {
        self.viewport.width as u32
    }

    /// Backing height: the usable height, truncated to whole pixels.
    pub fn surface_height(&self) -> u32 {
        self.usable_height() as u32
    }

    /// Top-left corner of the surface in window coordinates.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(0.0, self.header)
    }

    pub fn surface_rect(&self) -> Rect {
        Rect::from_origin_size(
            self.origin(),
            Vec2::new(self.surface_width() as f32, self.surface_height() as f32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MARGIN_FRACTION;

    #[test]
    fn viewport_800x600() {
        let layout = SurfaceLayout::compute(Viewport::new(800.0, 600.0), MARGIN_FRACTION);

        assert_eq!(layout.header, 30.0);
        assert_eq!(layout.footer, 30.0);
        assert_eq!((layout.surface_width(), layout.surface_height()), (800, 540));
        assert_eq!(layout.surface_rect(), Rect::new(0.0, 30.0, 800.0, 540.0));
    }

    #[test]
    fn fractional_sizes_truncate() {
        let layout = SurfaceLayout::compute(Viewport::new(1023.7, 777.0), MARGIN_FRACTION);
        assert_eq!(layout.surface_width(), 1023);
        // 777 - 2 * 38.85 = 699.3
        assert_eq!(layout.surface_height(), 699);
    }

    #[test]
    fn degenerate_viewport_gives_empty_surface() {
        let layout = SurfaceLayout::compute(Viewport::new(f32::NAN, -10.0), MARGIN_FRACTION);
        assert_eq!((layout.surface_width(), layout.surface_height()), (0, 0));
        assert!(layout.surface_rect().is_empty());
    }
}
