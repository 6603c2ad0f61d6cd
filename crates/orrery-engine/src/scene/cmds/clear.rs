use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Partial clear payload: a device-space quad painted with the background color.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearCmd {
    /// Corners in order, already transformed.
    pub quad: [Vec2; 4],
    pub color: Color,
}

impl ClearCmd {
    #[inline]
    pub fn new(quad: [Vec2; 4], color: Color) -> Self {
        Self { quad, color }
    }

    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.quad)
    }
}

impl DrawList {
    #[inline]
    pub fn push_clear(&mut self, quad: [Vec2; 4], color: Color) {
        self.push(DrawCmd::Clear(ClearCmd::new(quad, color)));
    }
}
