//! Orrery tower core: animated 2D shape groups drawn onto an immediate-mode surface.
//!
//! Shapes are grouped into [`Actor`]s, advanced by the animator and drawn by the
//! artist onto any [`Surface`](orrery_engine::canvas::Surface). A [`Stage`] owns
//! the actors and runs one frame per tick.

pub mod actor;
pub mod animate;
pub mod artist;
pub mod error;
pub mod record;
pub mod shape;
pub mod stage;

#[cfg(test)]
mod testing;

pub use actor::Actor;
pub use error::ShapeError;
pub use record::ShapeRecord;
pub use shape::{Animation, CircleShape, LineShape, Orbit, RectShape, Shape, ShapeKind, Stroke};
pub use stage::{Stage, StopHandle, Tick};
