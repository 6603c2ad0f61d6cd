//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single window, wires it to the GPU layer
//! and schedules one frame per display refresh.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
