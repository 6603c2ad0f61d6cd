use crate::coords::{Affine2, CornerRadii, Rect, Vec2, Viewport};
use crate::paint::Color;
use crate::scene::DrawList;

use super::path::Path;
use super::Surface;

/// Transform + style state saved by [`Surface::save`].
#[derive(Debug, Copy, Clone, PartialEq)]
struct CanvasState {
    transform: Affine2,
    stroke_color: Color,
    line_width: f32,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            transform: Affine2::IDENTITY,
            stroke_color: Color::BLACK,
            line_width: 1.0,
        }
    }
}

/// Recording implementation of [`Surface`].
///
/// One canvas is reused across frames: call [`begin_frame`](Canvas::begin_frame)
/// at the start of each frame, draw, then hand [`draw_list`](Canvas::draw_list)
/// to the renderer.
#[derive(Debug)]
pub struct Canvas {
    viewport: Viewport,
    background: Color,
    state: CanvasState,
    stack: Vec<CanvasState>,
    path: Path,
    draw_list: DrawList,
}

impl Canvas {
    pub fn new(viewport: Viewport, background: Color) -> Self {
        Self {
            viewport,
            background,
            state: CanvasState::default(),
            stack: Vec::new(),
            path: Path::new(),
            draw_list: DrawList::new(),
        }
    }

    /// Resets state for a new frame. Recorded commands are kept until cleared.
    ///
    /// A non-empty save stack here means a draw routine leaked a `save`.
    pub fn begin_frame(&mut self, viewport: Viewport) {
        if !self.stack.is_empty() {
            log::warn!("canvas: {} unbalanced save() call(s) at frame start", self.stack.len());
        }
        self.viewport = viewport;
        self.state = CanvasState::default();
        self.stack.clear();
        self.path.clear();
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Number of states currently saved.
    #[inline]
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn stroke_color(&self) -> Color {
        self.state.stroke_color
    }

    #[inline]
    pub fn line_width(&self) -> f32 {
        self.state.line_width
    }

    /// Current path in device space.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    fn map(&self, p: Vec2) -> Vec2 {
        self.state.transform.transform_point(p)
    }

    fn is_axis_aligned(&self) -> bool {
        let t = self.state.transform;
        t.b.abs() <= f32::EPSILON && t.c.abs() <= f32::EPSILON
    }
}

impl Surface for Canvas {
    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("canvas: restore() without matching save(); ignored"),
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.transform = self.state.transform.then_translate(dx, dy);
    }

    fn rotate(&mut self, radians: f32) {
        self.state.transform = self.state.transform.then_rotate(radians);
    }

    fn transform(&self) -> Affine2 {
        self.state.transform
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Vec2) {
        let p = self.map(p);
        self.path.move_to(p);
    }

    fn line_to(&mut self, p: Vec2) {
        let p = self.map(p);
        self.path.line_to(p);
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, anticlockwise: bool) {
        if radius < 0.0 || !radius.is_finite() {
            log::debug!("canvas: arc with invalid radius {radius} skipped");
            return;
        }
        self.path.arc(self.state.transform, center, radius, start, end, anticlockwise);
    }

    fn round_rect(&mut self, rect: Rect, radii: CornerRadii) {
        self.path.round_rect(self.state.transform, rect, radii);
    }

    fn stroke(&mut self) {
        self.draw_list
            .push_stroke(self.path.clone(), self.state.stroke_color, self.state.line_width);
    }

    fn clear_rect(&mut self, rect: Rect) {
        let corners = rect.normalized().corners();
        let quad = corners.map(|p| self.map(p));

        let full = self.viewport.bounds();

        if self.is_axis_aligned() {
            let Some(area) = Rect::bounding(quad) else { return };
            if area.contains_rect(full) {
                self.draw_list.clear();
                return;
            }
            self.draw_list.discard_within(area);
        }

        self.draw_list.push_clear(quad, self.background);
    }
}
