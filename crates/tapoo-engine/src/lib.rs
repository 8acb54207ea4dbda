//! Tapoo engine crate.
//!
//! This crate owns the platform + GPU runtime pieces and the 2D path canvas
//! used by the playground.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod coords;
pub mod canvas;
pub mod render;
pub mod paint;
pub mod scene;
