//! Immediate-mode 2D drawing surface.
//!
//! [`Surface`] is the contract shape code draws against: a transform/style
//! state stack, path construction and stroking, in the style of an HTML
//! canvas 2D context. [`Canvas`] implements it by building paths in device
//! space and recording strokes into a [`DrawList`](crate::scene::DrawList)
//! that `render::StrokeRenderer` turns into GPU draws.

mod canvas;
mod path;
mod surface;

pub use canvas::Canvas;
pub use path::{Path, Verb};
pub use surface::Surface;
