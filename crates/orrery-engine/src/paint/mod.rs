//! Paint model shared by the canvas and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - CSS-style color strings (named colors and hex forms)
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
