//! Recording [`Surface`] double for tests.

use orrery_engine::canvas::Surface;
use orrery_engine::coords::{Affine2, CornerRadii, Rect, Vec2};
use orrery_engine::paint::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    StrokeColor(Color),
    LineWidth(f32),
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc { center: Vec2, radius: f32, start: f32, end: f32, anticlockwise: bool },
    /// Also captures the transform in force when the rect was added.
    RoundRect { rect: Rect, radii: CornerRadii, transform: Affine2 },
    Stroke,
    ClearRect(Rect),
}

/// Logs every call and tracks the transform stack like a real canvas.
#[derive(Debug)]
pub struct Recorder {
    pub calls: Vec<Call>,
    transform: Affine2,
    stack: Vec<Affine2>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self { calls: Vec::new(), transform: Affine2::IDENTITY, stack: Vec::new() }
    }
}

impl Recorder {
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn round_rects(&self) -> Vec<(Rect, CornerRadii, Affine2)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::RoundRect { rect, radii, transform } => Some((*rect, *radii, *transform)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }
}

impl Surface for Recorder {
    fn save(&mut self) {
        self.stack.push(self.transform);
        self.calls.push(Call::Save);
    }

    fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
        self.calls.push(Call::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform = self.transform.then_translate(dx, dy);
        self.calls.push(Call::Translate(dx, dy));
    }

    fn rotate(&mut self, radians: f32) {
        self.transform = self.transform.then_rotate(radians);
        self.calls.push(Call::Rotate(radians));
    }

    fn transform(&self) -> Affine2 {
        self.transform
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.calls.push(Call::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.calls.push(Call::LineWidth(width));
    }

    fn begin_path(&mut self) {
        self.calls.push(Call::BeginPath);
    }

    fn move_to(&mut self, p: Vec2) {
        self.calls.push(Call::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.calls.push(Call::LineTo(p));
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, anticlockwise: bool) {
        self.calls.push(Call::Arc { center, radius, start, end, anticlockwise });
    }

    fn round_rect(&mut self, rect: Rect, radii: CornerRadii) {
        self.calls.push(Call::RoundRect { rect, radii, transform: self.transform });
    }

    fn stroke(&mut self) {
        self.calls.push(Call::Stroke);
    }

    fn clear_rect(&mut self, rect: Rect) {
        self.calls.push(Call::ClearRect(rect));
    }
}

pub fn close(a: Vec2, b: Vec2) -> bool {
    const EPS: f32 = 1e-3;
    (a.x - b.x).abs() <= EPS && (a.y - b.y).abs() <= EPS
}
