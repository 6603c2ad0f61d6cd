//! Loosely-typed shape records and their validation into [`Shape`]s.

use orrery_engine::coords::{CornerRadii, Vec2};
use orrery_engine::paint::Color;

use crate::error::ShapeError;
use crate::shape::{Animation, CircleShape, LineShape, RectShape, Shape, ShapeKind, Stroke};

/// One shape in its authored form: a kind tag plus optional fields.
///
/// Which fields are required depends on the kind:
/// - every kind: `x`, `y`
/// - `rect`: `width`, `height` (`rotation` defaults to 0, `radii` to square corners)
/// - `circle`: `radius`
/// - `line`: `x_end`, `y_end`
///
/// `colour` defaults to black and `line_width` to 1. Fields a kind does not use
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeRecord {
    pub shape: String,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub rotation: Option<f64>,
    pub radii: Option<Vec<f32>>,
    pub radius: Option<f32>,
    pub x_end: Option<f32>,
    pub y_end: Option<f32>,
    pub colour: Option<String>,
    pub line_width: Option<f32>,
    pub animation: Option<Animation>,
}

impl ShapeRecord {
    /// Starts a record of kind `shape` anchored at (x, y).
    pub fn new(shape: impl Into<String>, x: f32, y: f32) -> Self {
        Self { shape: shape.into(), x: Some(x), y: Some(y), ..Self::default() }
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn radii(mut self, radii: impl Into<Vec<f32>>) -> Self {
        self.radii = Some(radii.into());
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn end(mut self, x_end: f32, y_end: f32) -> Self {
        self.x_end = Some(x_end);
        self.y_end = Some(y_end);
        self
    }

    pub fn colour(mut self, colour: impl Into<String>) -> Self {
        self.colour = Some(colour.into());
        self
    }

    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    fn stroke(&self) -> Result<Stroke, ShapeError> {
        let color = match self.colour.as_deref() {
            None => Color::BLACK,
            Some(c) => Color::parse(c).ok_or_else(|| ShapeError::UnknownColour(c.to_string()))?,
        };
        Ok(Stroke::new(color, self.line_width.unwrap_or(1.0)))
    }
}

fn require(value: Option<f32>, kind: ShapeKind, field: &'static str) -> Result<f32, ShapeError> {
    value.ok_or(ShapeError::MissingField { kind, field })
}

impl TryFrom<&ShapeRecord> for Shape {
    type Error = ShapeError;

    fn try_from(rec: &ShapeRecord) -> Result<Self, Self::Error> {
        let kind: ShapeKind = rec.shape.parse()?;
        let at = Vec2::new(require(rec.x, kind, "x")?, require(rec.y, kind, "y")?);
        let stroke = rec.stroke()?;

        let mut shape: Shape = match kind {
            ShapeKind::Rect => {
                let width = require(rec.width, kind, "width")?;
                let height = require(rec.height, kind, "height")?;
                let radii = match rec.radii.as_deref() {
                    None => CornerRadii::zero(),
                    Some(list) => CornerRadii::from_list(list)
                        .ok_or(ShapeError::InvalidRadii(list.len()))?,
                };
                RectShape::new(at, width, height)
                    .with_rotation(rec.rotation.unwrap_or(0.0))
                    .with_radii(radii)
                    .with_stroke(stroke)
                    .into()
            }
            ShapeKind::Circle => {
                let radius = require(rec.radius, kind, "radius")?;
                CircleShape::new(at, radius).with_stroke(stroke).into()
            }
            ShapeKind::Line => {
                let end = Vec2::new(
                    require(rec.x_end, kind, "x_end")?,
                    require(rec.y_end, kind, "y_end")?,
                );
                LineShape::new(at, end).with_stroke(stroke).into()
            }
        };

        if let Some(animation) = rec.animation {
            match &mut shape {
                Shape::Rect(r) => r.animation = Some(animation),
                Shape::Circle(c) => c.animation = Some(animation),
                Shape::Line(l) => l.animation = Some(animation),
            }
        }
        Ok(shape)
    }
}

impl TryFrom<ShapeRecord> for Shape {
    type Error = ShapeError;

    fn try_from(rec: ShapeRecord) -> Result<Self, Self::Error> {
        Shape::try_from(&rec)
    }
}
