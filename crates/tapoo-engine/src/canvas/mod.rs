//! 2D path canvas.
//!
//! A CPU-side drawing surface with a path-building context, modelled on the
//! raster canvas found in browsers:
//! - `move_to` / `line_to` accumulate a path
//! - `stroke` paints every pending segment at once with the current stroke style
//! - resizing the surface discards painted content and the pending path
//!
//! Painted content is turned into `scene` line commands by [`Canvas::present`].

mod context;
mod path;
mod surface;

pub use context::{Context2d, Stroke};
pub use path::{PathContext, Segment};
pub use surface::Canvas;
