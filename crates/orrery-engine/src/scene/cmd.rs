use crate::coords::Rect;

use super::cmds::{ClearCmd, StrokeCmd};

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new command module under `scene::cmds::*`
/// - add a new variant here
/// - implement push helpers inside that command module
/// - teach `render::StrokeRenderer` to tessellate it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Stroke(StrokeCmd),
    Clear(ClearCmd),
}

impl DrawCmd {
    /// Device-space area touched by the command, or `None` if it draws nothing.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            DrawCmd::Stroke(cmd) => cmd.bounds(),
            DrawCmd::Clear(cmd) => cmd.bounds(),
        }
    }
}
