//! Tapoo playground.
//!
//! Paints a fixed-pitch grid onto the `data-playground` canvas, sized from
//! the window with a 5% header and footer band reserved. The canvas is
//! re-sized and re-painted on load and on every resize.

mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod grid;
pub mod layout;
pub mod sizer;

pub use app::Playground;
pub use config::{GridExtent, GridStyle, PlaygroundConfig};
pub use error::{PlaygroundError, Result};
