//! GPU rendering subsystem.
//!
//! The stroke renderer consumes a recorded `scene::DrawList`, tessellates it on
//! the CPU with lyon and issues a single indexed wgpu draw per frame.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod common;
mod stroke;
mod tessellate;

pub use stroke::StrokeRenderer;
pub use tessellate::{Mesh, StrokeVertex, Tessellator};
