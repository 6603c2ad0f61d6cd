use super::Rect;

/// Viewport size in logical pixels.
///
/// The coordinate basis renderers use to convert logical px to NDC, and the
/// area a full-surface clear covers.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The whole viewport as a rectangle at the origin.
    #[inline]
    pub const fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}
