//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - preserve paint order (insertion order, like a 2D canvas)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList};
