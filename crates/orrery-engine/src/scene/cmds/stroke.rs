use crate::canvas::Path;
use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Stroked outline payload.
///
/// `path` is already in device space (logical pixels): the canvas applies the
/// current transform while the path is built.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    pub path: Path,
    pub color: Color,
    pub width: f32,
}

impl StrokeCmd {
    #[inline]
    pub fn new(path: Path, color: Color, width: f32) -> Self {
        Self { path, color, width }
    }

    /// Path bounds grown by half the line width.
    pub fn bounds(&self) -> Option<Rect> {
        let b = self.path.bounds()?;
        let half = Vec2::new(self.width, self.width) * 0.5;
        Some(Rect::from_origin_size(b.origin - half, b.size + half * 2.0))
    }
}

impl DrawList {
    /// Records a stroke. Paths without drawable segments are dropped.
    pub fn push_stroke(&mut self, path: Path, color: Color, width: f32) {
        if path.is_empty() || width <= 0.0 {
            return;
        }
        self.push(DrawCmd::Stroke(StrokeCmd::new(path, color, width)));
    }
}
