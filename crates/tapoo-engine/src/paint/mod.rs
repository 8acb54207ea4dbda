//! Paint model shared between the canvas and renderers.
//!
//! Colors are linear premultiplied alpha. Geometry types remain in `coords`.

pub mod color;

pub use color::{linear_to_srgb, srgb_to_linear, Color};
