//! Surface sizer: fits the playground canvas to the viewport and repaints it.

use tapoo_engine::coords::Viewport;

use crate::config::PlaygroundConfig;
use crate::document::Document;
use crate::error::{PlaygroundError, Result};
use crate::grid::draw_grid;
use crate::layout::SurfaceLayout;

/// Looks up the configured canvas, sizes it to the viewport minus header and
/// footer, and paints the grid offset by the header height.
///
/// Resizing the canvas clears what was painted before, so each call leaves
/// exactly one fresh grid. A missing canvas is an error and nothing else
/// happens.
pub fn init_surface(
    document: &mut Document,
    viewport: Viewport,
    config: &PlaygroundConfig,
) -> Result<SurfaceLayout> {
    let canvas = document
        .canvas_mut(&config.surface_id)
        .ok_or_else(|| PlaygroundError::MissingSurface { id: config.surface_id.clone() })?;

    let layout = SurfaceLayout::compute(viewport, config.margin_fraction);
    canvas.resize(layout.surface_width(), layout.surface_height());

    let extent = config
        .grid
        .extent
        .resolve(canvas.width() as f32, canvas.height() as f32);
    let lines = draw_grid(canvas.context_mut(), layout.header, layout.header, &config.grid, extent);

    log::debug!(
        "surface {}x{} (header {}, footer {}); {} vertical + {} horizontal lines in {}",
        canvas.width(),
        canvas.height(),
        layout.header,
        layout.footer,
        lines.vertical,
        lines.horizontal,
        config.grid.color.to_hex(),
    );

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapoo_engine::canvas::Canvas;

    use crate::config::{GridExtent, PLAYGROUND_ID};

    fn document() -> Document {
        let mut doc = Document::new();
        doc.insert_canvas(PLAYGROUND_ID, Canvas::default());
        doc
    }

    fn canvas(doc: &Document) -> &Canvas {
        doc.canvas(PLAYGROUND_ID).expect("playground canvas")
    }

    #[test]
    fn sizes_800x600_viewport() {
        let mut doc = document();
        let layout = init_surface(&mut doc, Viewport::new(800.0, 600.0), &PlaygroundConfig::default())
            .expect("init");

        assert_eq!(layout.header, 30.0);
        let canvas = canvas(&doc);
        assert_eq!((canvas.width(), canvas.height()), (800, 540));

        let strokes = canvas.context().strokes();
        assert_eq!(strokes.len(), 1);
        let segs = &strokes[0].segments;
        assert_eq!(segs.len(), 102);
        // Both offsets are the header height.
        assert_eq!(segs[0].from.y, 30.0);
        assert_eq!(segs[51].from.x, 30.0);
    }

    #[test]
    fn leaves_grid_stroke_style_on_context() {
        let mut doc = document();
        init_surface(&mut doc, Viewport::new(800.0, 600.0), &PlaygroundConfig::default()).expect("init");

        let ctx = canvas(&doc).context();
        assert_eq!(ctx.stroke_style().to_hex(), "#53d80f");
        // The fill style is never assigned.
        assert_eq!(ctx.fill_style(), tapoo_engine::paint::Color::black());
    }

    #[test]
    fn resize_replaces_previous_grid() {
        let mut doc = document();
        let config = PlaygroundConfig::default();
        init_surface(&mut doc, Viewport::new(800.0, 600.0), &config).expect("load");
        init_surface(&mut doc, Viewport::new(1200.0, 900.0), &config).expect("resize");

        let canvas = canvas(&doc);
        assert_eq!((canvas.width(), canvas.height()), (1200, 810));

        let strokes = canvas.context().strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].segments[0].from.y, 45.0);
        assert!(strokes[0].segments.iter().all(|s| s.from.y != 30.0 || s.is_horizontal()));
    }

    #[test]
    fn missing_canvas_is_an_error() {
        let mut doc = Document::new();
        let err = init_surface(&mut doc, Viewport::new(800.0, 600.0), &PlaygroundConfig::default())
            .unwrap_err();
        assert_eq!(err, PlaygroundError::MissingSurface { id: PLAYGROUND_ID.to_string() });
        assert_eq!(err.to_string(), "no canvas registered under id `data-playground`");
    }

    #[test]
    fn surface_extent_is_opt_in() {
        let mut doc = document();
        let mut config = PlaygroundConfig::default();
        config.grid.extent = GridExtent::Surface;
        init_surface(&mut doc, Viewport::new(800.0, 600.0), &config).expect("init");

        let segs = &canvas(&doc).context().strokes()[0].segments;
        assert_eq!(segs[0].to.y, 540.0);
        assert!(segs.iter().all(|s| s.to.x <= 800.5));
    }
}
