use tapoo_engine::paint::Color;

/// Identifier the playground canvas is registered under.
pub const PLAYGROUND_ID: &str = "data-playground";

/// Share of the viewport height reserved for the header, and again for the footer.
pub const MARGIN_FRACTION: f32 = 0.05;

/// Spacing between adjacent grid lines.
pub const GRID_PITCH: f32 = 20.0;

/// Offset of the first line. Half a pixel keeps 1px strokes on one pixel column.
pub const GRID_ORIGIN: f32 = 0.5;

/// Default draw extent on both axes, independent of the surface size.
pub const GRID_EXTENT: f32 = 1000.0;

/// Grid stroke color as straight sRGB bytes, `#53d80f`.
pub const GRID_COLOR: [u8; 3] = [0x53, 0xd8, 0x0f];

/// How far the grid reaches.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GridExtent {
    /// Same extent on both axes whatever the surface size.
    Fixed(f32),
    /// Follow the surface's backing width and height.
    Surface,
}

impl GridExtent {
    /// Returns `(x, y)` extents for a surface of the given size.
    pub fn resolve(self, surface_width: f32, surface_height: f32) -> (f32, f32) {
        match self {
            GridExtent::Fixed(e) => (e, e),
            GridExtent::Surface => (surface_width, surface_height),
        }
    }
}

impl Default for GridExtent {
    fn default() -> Self {
        GridExtent::Fixed(GRID_EXTENT)
    }
}

/// Grid geometry and stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStyle {
    pub pitch: f32,
    pub origin: f32,
    pub extent: GridExtent,
    pub color: Color,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            pitch: GRID_PITCH,
            origin: GRID_ORIGIN,
            extent: GridExtent::default(),
            color: Color::from_srgb_u8(GRID_COLOR[0], GRID_COLOR[1], GRID_COLOR[2], 0xff),
        }
    }
}

/// Playground configuration.
#[derive(Debug, Clone)]
pub struct PlaygroundConfig {
    /// Id of the canvas the sizer looks up.
    pub surface_id: String,
    pub margin_fraction: f32,
    pub grid: GridStyle,
    /// Window clear color, visible in the header and footer bands.
    pub background: Color,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            surface_id: PLAYGROUND_ID.to_string(),
            margin_fraction: MARGIN_FRACTION,
            grid: GridStyle::default(),
            background: Color::black(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_color_is_53d80f() {
        let color = GridStyle::default().color;
        assert_eq!(color.to_srgb_u8(), [0x53, 0xd8, 0x0f, 0xff]);
        assert_eq!(color.to_hex(), "#53d80f");
    }

    #[test]
    fn default_grid_color_shows_as_53d80f_on_srgb_surface() {
        use tapoo_engine::paint::linear_to_srgb;

        // An Srgb swapchain encodes the linear components on write.
        let [r, g, b, _] = GridStyle::default().color.to_array();
        let shown = [r, g, b].map(|v| (linear_to_srgb(v) * 255.0).round() as u8);
        assert_eq!(shown, GRID_COLOR);
    }

    #[test]
    fn fixed_extent_ignores_surface() {
        assert_eq!(GridExtent::default().resolve(1920.0, 1080.0), (1000.0, 1000.0));
    }

    #[test]
    fn surface_extent_follows_surface() {
        assert_eq!(GridExtent::Surface.resolve(800.0, 540.0), (800.0, 540.0));
    }
}
