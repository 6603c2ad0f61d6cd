//! A group of shapes placed around one origin and stepped together.

use orrery_engine::canvas::Surface;
use orrery_engine::coords::Vec2;

use crate::animate::advance;
use crate::artist::draw;
use crate::error::ShapeError;
use crate::record::ShapeRecord;
use crate::shape::Shape;

/// A group of shapes drawn together, offset by one origin.
///
/// Shapes are drawn in insertion order, so later shapes paint over earlier ones.
/// The origin is added to every shape once, here; afterwards only animation
/// state changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    origin: Vec2,
    shapes: Vec<Shape>,
}

impl Actor {
    pub fn new<I>(shapes: I, origin: Vec2) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Shape>,
    {
        let shapes: Vec<Shape> = shapes
            .into_iter()
            .map(|s| {
                let mut shape: Shape = s.into();
                shape.offset(origin);
                shape
            })
            .collect();

        log::debug!("actor at ({}, {}) with {} shape(s)", origin.x, origin.y, shapes.len());
        Self { origin, shapes }
    }

    /// Builds an actor from authored records.
    ///
    /// Records with an unknown kind are skipped with a warning; any other invalid
    /// record fails the whole actor.
    pub fn from_records<'a, I>(records: I, origin: Vec2) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = &'a ShapeRecord>,
    {
        let mut shapes = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            match Shape::try_from(record) {
                Ok(shape) => shapes.push(shape),
                Err(ShapeError::UnknownKind(kind)) => {
                    log::warn!("skipping shape #{index}: unknown kind \"{kind}\"");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(Self::new(shapes, origin))
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Advances every shape by one frame without drawing.
    pub fn update(&mut self) {
        self.shapes.iter_mut().for_each(advance);
    }

    /// Draws every shape in its current state without advancing it.
    pub fn draw(&self, surface: &mut impl Surface) {
        for shape in &self.shapes {
            draw(surface, shape);
        }
    }

    /// One frame: each shape is advanced, then drawn, before the next one.
    pub fn step(&mut self, surface: &mut impl Surface) {
        for shape in &mut self.shapes {
            advance(shape);
            draw(surface, shape);
        }
    }
}
