use crate::coords::{Affine2, CornerRadii, Rect, Vec2};
use crate::paint::Color;

/// Immediate-mode 2D drawing surface.
///
/// Transform calls compose with the current transform the way a canvas does:
/// the call issued last applies to path coordinates first. Path coordinates
/// are mapped through the transform current at the time they are added.
pub trait Surface {
    /// Pushes the current transform and stroke style.
    fn save(&mut self);

    /// Pops the state pushed by the matching [`save`](Surface::save).
    fn restore(&mut self);

    fn translate(&mut self, dx: f32, dy: f32);

    /// Rotates by `radians`; positive turns +X towards +Y.
    fn rotate(&mut self, radians: f32);

    /// Current transform (`getTransform`).
    fn transform(&self) -> Affine2;

    fn set_stroke_color(&mut self, color: Color);

    /// Non-positive or non-finite widths are ignored.
    fn set_line_width(&mut self, width: f32);

    /// Discards the current path.
    fn begin_path(&mut self);

    fn move_to(&mut self, p: Vec2);

    fn line_to(&mut self, p: Vec2);

    /// Arc around `center` from `start` to `end` radians.
    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, anticlockwise: bool);

    /// Closed rounded-rectangle sub-path.
    fn round_rect(&mut self, rect: Rect, radii: CornerRadii);

    /// Strokes the current path with the current style.
    fn stroke(&mut self);

    /// Clears `rect` (in current-transform coordinates) to the background.
    fn clear_rect(&mut self, rect: Rect);
}
