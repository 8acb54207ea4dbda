use winit::dpi::LogicalSize;

use tapoo_engine::canvas::Canvas;
use tapoo_engine::coords::Viewport;
use tapoo_engine::core::{App as EngineApp, AppControl, FrameCtx, WindowCtx};
use tapoo_engine::device::GpuInit;
use tapoo_engine::paint::Color;
use tapoo_engine::render::shapes::line::LineRenderer;
use tapoo_engine::scene::DrawList;
use tapoo_engine::window::{Runtime, RuntimeConfig};

use crate::config::{GridExtent, GridStyle, PlaygroundConfig};
use crate::document::Document;
use crate::layout::SurfaceLayout;
use crate::sizer::init_surface;

// ── Playground ────────────────────────────────────────────────────────────

/// Top-level builder: configure the window and grid, then start the event loop.
///
/// ```rust,ignore
/// Playground::new()
///     .title("tapoo")
///     .size(1024.0, 768.0)
///     .run()?;
/// ```
pub struct Playground {
    title:    String,
    width:    f64,
    height:   f64,
    config:   PlaygroundConfig,
    gpu_init: GpuInit,
}

impl Default for Playground {
    fn default() -> Self {
        Self::new()
    }
}

impl Playground {
    pub fn new() -> Self {
        Self {
            title:    "tapoo".to_string(),
            width:    1280.0,
            height:   720.0,
            config:   PlaygroundConfig::default(),
            gpu_init: GpuInit::default(),
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// Replace the whole grid style.
    pub fn grid(mut self, style: GridStyle) -> Self {
        self.config.grid = style;
        self
    }

    /// Choose how far the grid reaches. Defaults to a fixed 1000 x 1000.
    pub fn grid_extent(mut self, extent: GridExtent) -> Self {
        self.config.grid.extent = extent;
        self
    }

    /// Window clear color, visible in the header and footer bands.
    pub fn background(mut self, color: Color) -> Self {
        self.config.background = color;
        self
    }

    /// Replace the whole playground configuration.
    pub fn config(mut self, config: PlaygroundConfig) -> Self {
        self.config = config;
        self
    }

    pub fn gpu(mut self, gpu_init: GpuInit) -> Self {
        self.gpu_init = gpu_init;
        self
    }

    /// Registers the playground canvas and runs the event loop until the
    /// window closes.
    pub fn run(self) -> anyhow::Result<()> {
        let mut document = Document::new();
        document.insert_canvas(self.config.surface_id.clone(), Canvas::default());

        log::info!(
            "starting playground \"{}\" ({}x{}, surface `{}`)",
            self.title,
            self.width,
            self.height,
            self.config.surface_id,
        );

        let runtime = RuntimeConfig {
            title:        self.title,
            initial_size: LogicalSize::new(self.width, self.height),
        };

        Runtime::run(runtime, self.gpu_init, PlaygroundApp::new(document, self.config))
    }
}

// ── PlaygroundApp ─────────────────────────────────────────────────────────

/// Engine app: re-sizes and re-paints on load and resize, presents on redraw.
struct PlaygroundApp {
    document:  Document,
    config:    PlaygroundConfig,
    /// Layout from the last successful sizing; `None` until then or after a failure.
    layout:    Option<SurfaceLayout>,
    draw_list: DrawList,
    lines:     LineRenderer,
}

impl PlaygroundApp {
    fn new(document: Document, config: PlaygroundConfig) -> Self {
        Self {
            document,
            config,
            layout: None,
            draw_list: DrawList::new(),
            lines: LineRenderer::new(),
        }
    }

    /// Runs the sizer. Failures are logged and leave nothing to present.
    fn init(&mut self, viewport: Viewport) {
        if !viewport.is_valid() {
            log::warn!("degenerate viewport {viewport:?}; the surface will be empty");
        }

        match init_surface(&mut self.document, viewport, &self.config) {
            Ok(layout) => self.layout = Some(layout),
            Err(e) => {
                log::error!("surface init failed: {e}");
                self.layout = None;
            }
        }
    }

    /// Rebuilds the draw list from the canvas content.
    fn record(&mut self) {
        self.draw_list.clear();

        let Some(layout) = self.layout else { return };
        let Some(canvas) = self.document.canvas(&self.config.surface_id) else { return };

        canvas.present(&mut self.draw_list, layout.origin());
    }
}

impl EngineApp for PlaygroundApp {
    fn on_load(&mut self, window: &WindowCtx<'_>) -> AppControl {
        self.init(window.viewport());
        AppControl::Continue
    }

    fn on_resize(&mut self, window: &WindowCtx<'_>) -> AppControl {
        self.init(window.viewport());
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.record();

        let Self { draw_list, lines, config, .. } = self;
        ctx.render(config.background, |rctx, target| {
            lines.render(rctx, target, draw_list);
        })
    }
}
