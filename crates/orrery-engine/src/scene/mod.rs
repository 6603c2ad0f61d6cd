//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands recorded by the canvas
//! - keep paint order equal to insertion order
//! - keep command-specific helpers isolated per file under `scene::cmds`

mod cmd;
mod list;

pub mod cmds;

pub use cmd::DrawCmd;
pub use cmds::{ClearCmd, StrokeCmd};
pub use list::DrawList;
