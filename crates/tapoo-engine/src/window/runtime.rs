use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tapoo".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Entry point for the runtime.
///
/// Drives a single window. Handlers are registered once, up front, through
/// the [`CoreApp`] implementation handed to [`Runtime::run`]:
/// - `on_load` after the window and GPU surface are created
/// - `on_resize` on every resize / scale-factor change
/// - `on_frame` on redraw, which is requested only after load and resize
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    exit_requested: bool,
    /// First fatal error; returned from `Runtime::run` once the loop exits.
    error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            exit_requested: false,
            error: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    /// Applies an app control directive. Returns `true` if the loop is exiting.
    fn apply(&mut self, event_loop: &ActiveEventLoop, control: AppControl) -> bool {
        if control == AppControl::Exit {
            log::info!("exit requested by app");
            self.request_exit(event_loop);
        }
        self.exit_requested
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed for window")
    }

    /// Runs `f` with the app and a context for the live window.
    fn with_window_ctx<F>(&mut self, f: F) -> AppControl
    where
        F: FnOnce(&mut A, &WindowCtx<'_>) -> AppControl,
    {
        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let Self { app, entry, .. } = self;
        let Some(entry) = entry.as_ref() else {
            return AppControl::Continue;
        };

        entry.with_window(|window| f(app, &WindowCtx { id: window.id(), window }))
    }

    fn request_redraw(&self) {
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn handle_resize(&mut self, event_loop: &ActiveEventLoop, new_size: PhysicalSize<u32>) {
        if let Some(entry) = self.entry.as_mut() {
            entry.with_gpu_mut(|gpu| gpu.resize(new_size));
        }
        log::debug!("resized to {}x{} physical px", new_size.width, new_size.height);

        let control = self.with_window_ctx(|app, window| app.on_resize(window));
        if self.apply(event_loop, control) {
            return;
        }

        self.request_redraw();
    }

    fn draw_frame(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId) {
        let Self { app, entry, .. } = self;
        let Some(entry) = entry.as_mut() else { return };

        let control = entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: window_id,
                    window: fields.window,
                },
                gpu: fields.gpu,
            };
            app.on_frame(&mut ctx)
        });

        self.apply(event_loop, control);
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => self.entry = Some(entry),
            Err(e) => {
                log::error!("failed to create initial window: {e:#}");
                self.error = Some(e);
                self.request_exit(event_loop);
                return;
            }
        }

        log::info!("window \"{}\" created", self.config.title);

        let control = self.with_window_ctx(|app, window| app.on_load(window));
        if self.apply(event_loop, control) {
            return;
        }

        self.request_redraw();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Redraws are driven by load/resize invalidation only.
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let is_ours = self
            .entry
            .as_ref()
            .is_some_and(|entry| entry.with_window(|w| w.id() == window_id));
        if !is_ours {
            return;
        }

        let control = self.with_window_ctx(|app, window| app.on_window_event(window, &event));
        if self.apply(event_loop, control) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.entry = None;
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => self.handle_resize(event_loop, new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = self
                    .entry
                    .as_ref()
                    .map(|entry| entry.with_window(|w| w.inner_size()));
                if let Some(new_size) = new_size {
                    self.handle_resize(event_loop, new_size);
                }
            }

            WindowEvent::RedrawRequested => self.draw_frame(event_loop, window_id),

            _ => {}
        }
    }
}
