//! Drawing shapes onto a [`Surface`].
//!
//! Every routine brackets its work in `save`/`restore`, so neither transform nor
//! stroke style leaks into the next shape.

use std::f32::consts::TAU;

use orrery_engine::canvas::Surface;
use orrery_engine::coords::{Rect, Vec2};

use crate::shape::{CircleShape, LineShape, RectShape, Shape, Stroke};

/// Draws `shape` in its current animation state.
pub fn draw(surface: &mut impl Surface, shape: &Shape) {
    match shape {
        Shape::Rect(r) => draw_rect(surface, r),
        Shape::Circle(c) => draw_circle(surface, c),
        Shape::Line(l) => draw_line(surface, l),
    }
}

/// Strokes a rounded rect, spun about its own center and carried along its orbit.
///
/// The orbit rotation is issued first, so it acts last: the spun rect is swung
/// around the unshifted anchor.
pub fn draw_rect(surface: &mut impl Surface, rect: &RectShape) {
    let placement = RectPlacement::of(rect);

    surface.save();

    if let Some((anchor, radians)) = placement.orbit {
        surface.translate(anchor.x, anchor.y);
        surface.rotate(radians);
        surface.translate(-anchor.x, -anchor.y);
    }

    let pivot = placement.pivot;
    surface.translate(pivot.x, pivot.y);
    surface.rotate(surface_radians(rect.rotation()));
    surface.translate(-pivot.x, -pivot.y);

    apply_stroke(surface, rect.stroke());
    surface.begin_path();
    surface.round_rect(Rect::from_origin_size(placement.origin, rect.size()), rect.radii());
    surface.stroke();

    surface.restore();
}

/// Strokes a full circle. Circles ignore spin and orbit.
pub fn draw_circle(surface: &mut impl Surface, circle: &CircleShape) {
    surface.save();
    apply_stroke(surface, circle.stroke());
    surface.begin_path();
    surface.arc(circle.center(), circle.radius(), 0.0, TAU, false);
    surface.stroke();
    surface.restore();
}

pub fn draw_line(surface: &mut impl Surface, line: &LineShape) {
    surface.save();
    apply_stroke(surface, line.stroke());
    surface.begin_path();
    surface.move_to(line.start());
    surface.line_to(line.end());
    surface.stroke();
    surface.restore();
}

fn apply_stroke(surface: &mut impl Surface, stroke: Stroke) {
    surface.set_stroke_color(stroke.color);
    surface.set_line_width(stroke.width);
}

/// Where a rect is laid out before any rotation is applied.
#[derive(Debug, Copy, Clone, PartialEq)]
struct RectPlacement {
    /// Top-left corner, shifted right by the orbit radius when orbiting.
    origin: Vec2,
    /// Center of the laid-out rect; the own rotation turns about it.
    pivot: Vec2,
    /// Anchor and angle (radians) of the orbit, when it displaces the rect.
    orbit: Option<(Vec2, f32)>,
}

impl RectPlacement {
    fn of(rect: &RectShape) -> Self {
        let anchor = rect.center();
        let orbit = rect.orbit().filter(|o| o.displaces());

        let mut origin = origin_from_center(anchor, rect.width(), rect.height());
        if let Some(o) = orbit {
            origin.x += o.radius;
        }

        Self {
            origin,
            pivot: rotation_pivot(origin, rect.width(), rect.height()),
            orbit: orbit.map(|o| (anchor, surface_radians(o.rotation))),
        }
    }
}

/// Accumulated degrees folded into one turn before narrowing to the surface's
/// `f32` radians.
#[inline]
fn surface_radians(degrees: f64) -> f32 {
    degrees.rem_euclid(360.0).to_radians() as f32
}

#[inline]
fn origin_from_center(center: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(center.x - width / 2.0, center.y - height / 2.0)
}

#[inline]
fn rotation_pivot(origin: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(origin.x + width / 2.0, origin.y + height / 2.0)
}
