//! Per-frame animation update.

use crate::shape::Shape;

/// Advances `shape` by one frame.
///
/// `rotate` is added to the own rotation (rects only) and the orbit angle moves
/// by its speed. Angles accumulate in degrees without wrapping. Shapes without an
/// animation block are left untouched.
pub fn advance(shape: &mut Shape) {
    let (animation, rotation) = shape.animation_parts_mut();
    let Some(animation) = animation else { return };

    if let (Some(delta), Some(rotation)) = (animation.rotate, rotation) {
        *rotation += delta;
    }
    if let Some(orbit) = animation.orbit.as_mut() {
        orbit.rotation += orbit.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Animation, CircleShape, LineShape, Orbit, RectShape};
    use orrery_engine::coords::Vec2;

    fn rect() -> RectShape {
        RectShape::new(Vec2::new(200.0, 400.0), 30.0, 30.0)
    }

    #[test]
    fn still_shapes_never_change() {
        let original: Shape = rect().with_rotation(12.0).into();
        let mut shape = original.clone();
        for _ in 0..100 {
            advance(&mut shape);
        }
        assert_eq!(shape, original);
    }

    #[test]
    fn spin_accumulates_without_wrapping() {
        let mut shape: Shape = rect().with_rotation(45.0).with_animation(Animation::rotate(-1.0)).into();
        advance(&mut shape);
        assert_eq!(shape.rotation(), Some(44.0));

        for _ in 0..999 {
            advance(&mut shape);
        }
        assert_eq!(shape.rotation(), Some(45.0 - 1000.0));
    }

    #[test]
    fn orbit_angle_advances_by_speed() {
        let mut shape: Shape = rect().with_animation(Animation::orbit(Orbit::new(180.0, 35.0, 2.0))).into();
        for _ in 0..90 {
            advance(&mut shape);
        }
        let orbit = shape.orbit().copied().unwrap();
        assert_eq!(orbit.rotation, 360.0);
        assert_eq!(orbit.radius, 35.0);
        assert_eq!(orbit.speed, 2.0);
        assert_eq!(shape.rotation(), Some(0.0));
    }

    #[test]
    fn steps_still_land_past_f32_precision() {
        let mut spun: Shape = rect().with_rotation(-16_777_216.0).with_animation(Animation::rotate(-1.0)).into();
        let mut orbiting: Shape =
            rect().with_animation(Animation::orbit(Orbit::new(33_554_432.0, 35.0, 2.0))).into();
        for _ in 0..10 {
            advance(&mut spun);
            advance(&mut orbiting);
        }
        assert_eq!(spun.rotation(), Some(-16_777_226.0));
        assert_eq!(orbiting.orbit().map(|o| o.rotation), Some(33_554_452.0));
    }

    #[test]
    fn spin_and_orbit_advance_together() {
        let anim = Animation::rotate(3.0).with_orbit(Orbit::new(0.0, 10.0, 1.5));
        let mut shape: Shape = rect().with_animation(anim).into();
        for _ in 0..4 {
            advance(&mut shape);
        }
        assert_eq!(shape.rotation(), Some(12.0));
        assert_eq!(shape.orbit().map(|o| o.rotation), Some(6.0));
    }

    #[test]
    fn spin_on_circles_and_lines_is_inert() {
        let anim = Animation::rotate(5.0).with_orbit(Orbit::new(0.0, 1.0, 1.0));
        let mut circle: Shape = CircleShape::new(Vec2::zero(), 3.0).with_animation(anim).into();
        let mut line: Shape =
            LineShape::new(Vec2::zero(), Vec2::new(1.0, 1.0)).with_animation(Animation::rotate(5.0)).into();
        let line_before = line.clone();

        advance(&mut circle);
        advance(&mut line);

        assert_eq!(circle.rotation(), None);
        assert_eq!(circle.orbit().map(|o| o.rotation), Some(1.0));
        assert_eq!(line, line_before);
    }
}
