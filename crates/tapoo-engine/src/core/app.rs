use winit::event::WindowEvent;

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// The runtime calls these handlers synchronously on the event loop thread;
/// each one runs to completion before the next event is dispatched.
pub trait App {
    /// Called once, after the window and its GPU surface exist.
    fn on_load(&mut self, window: &WindowCtx<'_>) -> AppControl {
        let _ = window;
        AppControl::Continue
    }

    /// Called after every resize (including scale-factor changes), once the
    /// GPU surface has been reconfigured. A redraw is requested afterwards.
    fn on_resize(&mut self, window: &WindowCtx<'_>) -> AppControl {
        let _ = window;
        AppControl::Continue
    }

    /// Called for every raw window event before the runtime handles it.
    fn on_window_event(&mut self, window: &WindowCtx<'_>, event: &WindowEvent) -> AppControl {
        let _ = (window, event);
        AppControl::Continue
    }

    /// Called for each redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
