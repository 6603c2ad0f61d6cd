//! Coordinate and geometry types shared by the canvas, renderers and shape code.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//! - Positive rotation turns +X towards +Y (clockwise on screen)
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod corner_radii;
mod rect;
mod transform;
mod vec2;
mod viewport;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use transform::Affine2;
pub use vec2::Vec2;
pub use viewport::Viewport;
