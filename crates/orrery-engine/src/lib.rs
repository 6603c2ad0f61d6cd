//! Orrery engine crate.
//!
//! Owns the platform + GPU runtime and the immediate-mode canvas that shape
//! code draws on.

pub mod canvas;
pub mod core;
pub mod device;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
