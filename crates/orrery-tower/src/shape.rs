//! Shape model: the closed set of drawable shapes and their animation state.
//!
//! Positions are fixed once a shape joins an [`Actor`](crate::Actor); after that
//! only the animation angles change.

use core::fmt;
use core::str::FromStr;

use orrery_engine::coords::{CornerRadii, Vec2};
use orrery_engine::paint::Color;

use crate::error::ShapeError;

/// Kind tag of a shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Rect,
    Circle,
    Line,
}

impl ShapeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Line => "line",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rect" => Ok(ShapeKind::Rect),
            "circle" => Ok(ShapeKind::Circle),
            "line" => Ok(ShapeKind::Line),
            other => Err(ShapeError::UnknownKind(other.to_string())),
        }
    }
}

/// Outline style.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    #[inline]
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for Stroke {
    /// Canvas defaults: black, 1px.
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

/// Circular motion of a shape's pivot around its anchor point.
///
/// Angles are in degrees, kept as `f64` so that per-frame steps still land
/// after millions of frames. `rotation` advances by `speed` every frame;
/// `radius` never changes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Orbit {
    pub rotation: f64,
    pub radius: f32,
    pub speed: f64,
}

impl Orbit {
    #[inline]
    pub const fn new(rotation: f64, radius: f32, speed: f64) -> Self {
        Self { rotation, radius, speed }
    }

    /// Orbits with a non-positive radius do not displace the shape.
    #[inline]
    pub fn displaces(&self) -> bool {
        self.radius > 0.0
    }
}

/// Per-frame animation deltas. Both parts are optional.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Animation {
    /// Degrees added to the shape's own rotation each frame.
    pub rotate: Option<f64>,
    pub orbit: Option<Orbit>,
}

impl Animation {
    /// Spin only.
    #[inline]
    pub const fn rotate(degrees: f64) -> Self {
        Self { rotate: Some(degrees), orbit: None }
    }

    /// Orbit only.
    #[inline]
    pub const fn orbit(orbit: Orbit) -> Self {
        Self { rotate: None, orbit: Some(orbit) }
    }

    #[inline]
    pub const fn with_orbit(mut self, orbit: Orbit) -> Self {
        self.orbit = Some(orbit);
        self
    }
}

// ── rect ──────────────────────────────────────────────────────────────────

/// Rectangle positioned by its center, optionally rounded, spinning and orbiting.
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    center: Vec2,
    width: f32,
    height: f32,
    /// Own rotation in degrees. Accumulates without wrapping.
    pub(crate) rotation: f64,
    radii: CornerRadii,
    stroke: Stroke,
    pub(crate) animation: Option<Animation>,
}

impl RectShape {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
            rotation: 0.0,
            radii: CornerRadii::zero(),
            stroke: Stroke::default(),
            animation: None,
        }
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_radii(mut self, radii: CornerRadii) -> Self {
        self.radii = radii;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[inline]
    pub fn radii(&self) -> CornerRadii {
        self.radii
    }

    #[inline]
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    #[inline]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Orbit state, if the rect has one.
    #[inline]
    pub fn orbit(&self) -> Option<&Orbit> {
        self.animation.as_ref().and_then(|a| a.orbit.as_ref())
    }
}

// ── circle ────────────────────────────────────────────────────────────────

/// Full circle outline. Circles do not spin or orbit visually.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    center: Vec2,
    radius: f32,
    stroke: Stroke,
    pub(crate) animation: Option<Animation>,
}

impl CircleShape {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius, stroke: Stroke::default(), animation: None }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    #[inline]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }
}

// ── line ──────────────────────────────────────────────────────────────────

/// Straight segment from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    start: Vec2,
    end: Vec2,
    stroke: Stroke,
    pub(crate) animation: Option<Animation>,
}

impl LineShape {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end, stroke: Stroke::default(), animation: None }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }

    #[inline]
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    #[inline]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }
}

// ── shape ─────────────────────────────────────────────────────────────────

/// A drawable shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(RectShape),
    Circle(CircleShape),
    Line(LineShape),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Line(_) => ShapeKind::Line,
        }
    }

    /// Anchor position: the center for rects and circles, the start for lines.
    pub fn position(&self) -> Vec2 {
        match self {
            Shape::Rect(r) => r.center,
            Shape::Circle(c) => c.center,
            Shape::Line(l) => l.start,
        }
    }

    pub fn stroke(&self) -> Stroke {
        match self {
            Shape::Rect(r) => r.stroke,
            Shape::Circle(c) => c.stroke,
            Shape::Line(l) => l.stroke,
        }
    }

    pub fn animation(&self) -> Option<&Animation> {
        match self {
            Shape::Rect(r) => r.animation.as_ref(),
            Shape::Circle(c) => c.animation.as_ref(),
            Shape::Line(l) => l.animation.as_ref(),
        }
    }

    /// Own rotation in degrees; only rects have one.
    pub fn rotation(&self) -> Option<f64> {
        match self {
            Shape::Rect(r) => Some(r.rotation),
            Shape::Circle(_) | Shape::Line(_) => None,
        }
    }

    pub fn orbit(&self) -> Option<&Orbit> {
        self.animation().and_then(|a| a.orbit.as_ref())
    }

    /// Split borrow of the mutable animation state: (deltas + orbit, own rotation).
    pub(crate) fn animation_parts_mut(&mut self) -> (Option<&mut Animation>, Option<&mut f64>) {
        match self {
            Shape::Rect(r) => (r.animation.as_mut(), Some(&mut r.rotation)),
            Shape::Circle(c) => (c.animation.as_mut(), None),
            Shape::Line(l) => (l.animation.as_mut(), None),
        }
    }

    /// Moves the shape's geometry by `by`. Only actors call this, once, at construction.
    pub(crate) fn offset(&mut self, by: Vec2) {
        match self {
            Shape::Rect(r) => r.center = r.center + by,
            Shape::Circle(c) => c.center = c.center + by,
            Shape::Line(l) => {
                l.start = l.start + by;
                l.end = l.end + by;
            }
        }
    }
}

impl From<RectShape> for Shape {
    fn from(r: RectShape) -> Self {
        Shape::Rect(r)
    }
}

impl From<CircleShape> for Shape {
    fn from(c: CircleShape) -> Self {
        Shape::Circle(c)
    }
}

impl From<LineShape> for Shape {
    fn from(l: LineShape) -> Self {
        Shape::Line(l)
    }
}
