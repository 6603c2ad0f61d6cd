use core::ops::Mul;

use super::Vec2;

/// 2D affine transform in canvas layout.
///
/// Maps `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`.
///
/// Composition follows the immediate-mode canvas convention: `m.then_translate(..)`
/// and `m.then_rotate(..)` post-multiply, so the most recently appended step is
/// applied to path coordinates first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine2 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Affine2 {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[inline]
    pub const fn translation(tx: f32, ty: f32) -> Self {
        Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: tx, f: ty }
    }

    /// Rotation by `radians` around the origin.
    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self { a: c, b: s, c: -s, d: c, e: 0.0, f: 0.0 }
    }

    /// Rotation by `radians` around `pivot`.
    #[inline]
    pub fn rotation_about(pivot: Vec2, radians: f32) -> Self {
        Self::translation(pivot.x, pivot.y)
            * Self::rotation(radians)
            * Self::translation(-pivot.x, -pivot.y)
    }

    #[inline]
    pub fn then_translate(self, tx: f32, ty: f32) -> Self {
        self * Self::translation(tx, ty)
    }

    #[inline]
    pub fn then_rotate(self, radians: f32) -> Self {
        self * Self::rotation(radians)
    }

    #[inline]
    pub fn transform_point(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Transforms a direction (ignores translation).
    #[inline]
    pub fn transform_vector(self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    #[inline]
    pub fn translation_part(self) -> Vec2 {
        Vec2::new(self.e, self.f)
    }

    /// Component-wise comparison within `eps`.
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        [
            self.a - other.a,
            self.b - other.b,
            self.c - other.c,
            self.d - other.d,
            self.e - other.e,
            self.f - other.f,
        ]
        .iter()
        .all(|d| d.abs() <= eps)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f].iter().all(|v| v.is_finite())
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Affine2 {
    type Output = Affine2;

    /// `self * rhs` applies `rhs` first, then `self`.
    #[inline]
    fn mul(self, rhs: Affine2) -> Affine2 {
        Affine2 {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            e: self.a * rhs.e + self.c * rhs.f + self.e,
            f: self.b * rhs.e + self.d * rhs.f + self.f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-4;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() <= EPS && (a.y - b.y).abs() <= EPS
    }

    #[test]
    fn identity_leaves_points_alone() {
        let p = Vec2::new(3.0, -7.0);
        assert_eq!(Affine2::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn quarter_turn_maps_x_to_y() {
        let p = Affine2::rotation(FRAC_PI_2).transform_point(Vec2::new(1.0, 0.0));
        assert!(close(p, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn last_appended_step_applies_first() {
        // translate then rotate: the point is rotated about the origin, then moved.
        let m = Affine2::IDENTITY.then_translate(10.0, 0.0).then_rotate(PI);
        let p = m.transform_point(Vec2::new(1.0, 0.0));
        assert!(close(p, Vec2::new(9.0, 0.0)));
    }

    #[test]
    fn rotation_about_pivot_fixes_pivot() {
        let pivot = Vec2::new(200.0, 400.0);
        let m = Affine2::rotation_about(pivot, 1.234);
        assert!(close(m.transform_point(pivot), pivot));

        let q = m.transform_point(pivot + Vec2::new(35.0, 0.0));
        assert!((q.distance(pivot) - 35.0).abs() < EPS);
    }

    #[test]
    fn vectors_ignore_translation() {
        let m = Affine2::translation(5.0, 5.0);
        assert_eq!(m.transform_vector(Vec2::new(1.0, 2.0)), Vec2::new(1.0, 2.0));
        assert_eq!(m.translation_part(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn inverse_steps_cancel() {
        let m = Affine2::IDENTITY
            .then_translate(12.0, 4.0)
            .then_rotate(0.7)
            .then_rotate(-0.7)
            .then_translate(-12.0, -4.0);
        assert!(m.approx_eq(Affine2::IDENTITY, EPS));
    }
}
