use std::f32::consts::TAU;

use lyon::geom::Arc;
use lyon::math::{vector, Angle, Box2D};
use lyon::path::{PathEvent, Winding};

use crate::coords::{Affine2, CornerRadii, Rect, Vec2};

/// One path command, in device space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Verb {
    /// Starts a sub-path.
    Begin(Vec2),
    Line(Vec2),
    Quadratic { ctrl: Vec2, to: Vec2 },
    Cubic { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    /// Closes the current sub-path.
    Close,
}

/// Canvas path under construction.
///
/// Points are stored already transformed; curves stay curves until the
/// tessellator flattens them. [`to_lyon`](Path::to_lyon) produces the
/// `lyon` path handed to the stroker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    verbs: Vec<Verb>,
    /// First point of the latest sub-path.
    start: Option<Vec2>,
    /// End of the open sub-path; `None` when nothing is open.
    current: Option<Vec2>,
    segments: usize,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    /// True when the path has no segment to stroke.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments == 0
    }

    pub fn clear(&mut self) {
        self.verbs.clear();
        self.start = None;
        self.current = None;
        self.segments = 0;
    }

    /// End point of the open sub-path, if any.
    #[inline]
    pub fn current_point(&self) -> Option<Vec2> {
        self.current
    }

    /// Starts a new sub-path at `p`.
    pub fn move_to(&mut self, p: Vec2) {
        // A lone move_to never draws; reuse it instead of stacking empties.
        match self.verbs.last_mut() {
            Some(Verb::Begin(at)) if self.current.is_some() => *at = p,
            _ => self.verbs.push(Verb::Begin(p)),
        }
        self.start = Some(p);
        self.current = Some(p);
    }

    /// Extends the open sub-path to `p`.
    ///
    /// With no open sub-path this behaves like `move_to`. After a closed
    /// sub-path, the new run starts from that sub-path's first point.
    pub fn line_to(&mut self, p: Vec2) {
        if !self.ensure_open(p) {
            return;
        }
        self.push_segment(Verb::Line(p), p);
    }

    pub fn quadratic_to(&mut self, ctrl: Vec2, to: Vec2) {
        self.ensure_open(ctrl);
        self.push_segment(Verb::Quadratic { ctrl, to }, to);
    }

    pub fn cubic_to(&mut self, ctrl1: Vec2, ctrl2: Vec2, to: Vec2) {
        self.ensure_open(ctrl1);
        self.push_segment(Verb::Cubic { ctrl1, ctrl2, to }, to);
    }

    /// Closes the open sub-path.
    pub fn close(&mut self) {
        if self.current.take().is_some() {
            self.verbs.push(Verb::Close);
        }
    }

    /// Appends an arc, mapped through `transform`, joined to the open sub-path
    /// by a straight line.
    pub fn arc(
        &mut self,
        transform: Affine2,
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        anticlockwise: bool,
    ) {
        let sweep = arc_sweep(start, end, anticlockwise);
        let arc = Arc {
            center: center.into(),
            radii: vector(radius, radius),
            start_angle: Angle::radians(start),
            sweep_angle: Angle::radians(sweep),
            x_rotation: Angle::radians(0.0),
        };

        let map = |p: lyon::math::Point| transform.transform_point(p.into());
        let from = map(arc.from());
        if self.current.is_some() {
            self.line_to(from);
        } else {
            self.move_to(from);
        }
        if sweep == 0.0 {
            return;
        }

        // Affine maps keep Béziers Béziers, so mapping the control points is exact.
        arc.for_each_quadratic_bezier(&mut |seg| {
            self.quadratic_to(map(seg.ctrl), map(seg.to));
        });
    }

    /// Appends a closed rounded rectangle, mapped through `transform`, as its
    /// own sub-path.
    pub fn round_rect(&mut self, transform: Affine2, rect: Rect, radii: CornerRadii) {
        let r = rect.normalized();
        let bounds = Box2D::new(r.min().into(), r.max().into());

        let mut local = lyon::path::Path::builder();
        if radii.is_zero() {
            local.add_rectangle(&bounds, Winding::Positive);
        } else {
            let fitted = radii.fitted(r.size.x, r.size.y);
            local.add_rounded_rectangle(&bounds, &fitted.into(), Winding::Positive);
        }

        let map = |p: lyon::math::Point| transform.transform_point(p.into());
        for event in local.build().iter() {
            match event {
                PathEvent::Begin { at } => self.move_to(map(at)),
                PathEvent::Line { to, .. } => self.line_to(map(to)),
                PathEvent::Quadratic { ctrl, to, .. } => self.quadratic_to(map(ctrl), map(to)),
                PathEvent::Cubic { ctrl1, ctrl2, to, .. } => {
                    self.cubic_to(map(ctrl1), map(ctrl2), map(to))
                }
                PathEvent::End { close, .. } => {
                    if close {
                        self.close();
                    }
                }
            }
        }
    }

    /// Bounds of every point and control point.
    ///
    /// Béziers stay inside their control hull, so this never undershoots.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.verbs.iter().flat_map(|v| {
            let pts: [Option<Vec2>; 3] = match *v {
                Verb::Begin(p) | Verb::Line(p) => [Some(p), None, None],
                Verb::Quadratic { ctrl, to } => [Some(ctrl), Some(to), None],
                Verb::Cubic { ctrl1, ctrl2, to } => [Some(ctrl1), Some(ctrl2), Some(to)],
                Verb::Close => [None, None, None],
            };
            pts.into_iter().flatten()
        }))
    }

    /// Builds the `lyon` path for tessellation.
    pub fn to_lyon(&self) -> lyon::path::Path {
        let mut builder = lyon::path::Path::builder();
        let mut open = false;
        for verb in &self.verbs {
            match *verb {
                Verb::Begin(p) => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(p.into());
                    open = true;
                }
                Verb::Line(p) => {
                    builder.line_to(p.into());
                }
                Verb::Quadratic { ctrl, to } => {
                    builder.quadratic_bezier_to(ctrl.into(), to.into());
                }
                Verb::Cubic { ctrl1, ctrl2, to } => {
                    builder.cubic_bezier_to(ctrl1.into(), ctrl2.into(), to.into());
                }
                Verb::Close => {
                    builder.end(true);
                    open = false;
                }
            }
        }
        if open {
            builder.end(false);
        }
        builder.build()
    }

    /// Makes sure a sub-path is open. Returns `false` when `p` itself became
    /// the new start point.
    fn ensure_open(&mut self, p: Vec2) -> bool {
        if self.current.is_some() {
            return true;
        }
        match self.start {
            Some(start) if self.verbs.last() == Some(&Verb::Close) => {
                self.verbs.push(Verb::Begin(start));
                self.current = Some(start);
                true
            }
            _ => {
                self.move_to(p);
                false
            }
        }
    }

    fn push_segment(&mut self, verb: Verb, to: Vec2) {
        self.verbs.push(verb);
        self.current = Some(to);
        self.segments += 1;
    }
}

/// Canvas sweep rules: clockwise sweeps are taken modulo a full turn unless the
/// requested span already covers one; anticlockwise mirrors that.
pub(crate) fn arc_sweep(start: f32, end: f32, anticlockwise: bool) -> f32 {
    if anticlockwise {
        if start - end >= TAU { -TAU } else { -(start - end).rem_euclid(TAU) }
    } else if end - start >= TAU {
        TAU
    } else {
        (end - start).rem_euclid(TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-3;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() <= EPS && (a.y - b.y).abs() <= EPS
    }

    fn end_points(p: &Path) -> Vec<Vec2> {
        p.verbs()
            .iter()
            .filter_map(|v| match *v {
                Verb::Begin(p) | Verb::Line(p) => Some(p),
                Verb::Quadratic { to, .. } | Verb::Cubic { to, .. } => Some(to),
                Verb::Close => None,
            })
            .collect()
    }

    // ── path building ─────────────────────────────────────────────────────

    #[test]
    fn lone_move_to_is_not_drawable() {
        let mut p = Path::new();
        p.move_to(Vec2::new(1.0, 1.0));
        p.move_to(Vec2::new(2.0, 2.0));
        assert!(p.is_empty());
        assert_eq!(p.verbs(), &[Verb::Begin(Vec2::new(2.0, 2.0))]);
    }

    #[test]
    fn line_to_without_current_point_moves() {
        let mut p = Path::new();
        p.line_to(Vec2::new(5.0, 5.0));
        assert_eq!(p.current_point(), Some(Vec2::new(5.0, 5.0)));
        assert!(p.is_empty());
        p.line_to(Vec2::new(6.0, 5.0));
        assert!(!p.is_empty());
    }

    #[test]
    fn line_after_close_restarts_at_subpath_start() {
        let mut p = Path::new();
        p.move_to(Vec2::new(0.0, 0.0));
        p.line_to(Vec2::new(10.0, 0.0));
        p.close();
        p.line_to(Vec2::new(0.0, 10.0));
        assert_eq!(
            &p.verbs()[2..],
            &[Verb::Close, Verb::Begin(Vec2::new(0.0, 0.0)), Verb::Line(Vec2::new(0.0, 10.0))]
        );
    }

    #[test]
    fn lyon_path_keeps_subpaths_apart() {
        let mut p = Path::new();
        p.move_to(Vec2::new(0.0, 0.0));
        p.line_to(Vec2::new(10.0, 0.0));
        p.move_to(Vec2::new(0.0, 5.0));
        p.line_to(Vec2::new(10.0, 5.0));
        p.close();

        let events: Vec<PathEvent> = p.to_lyon().iter().collect();
        let begins = events.iter().filter(|e| matches!(e, PathEvent::Begin { .. })).count();
        let closes: Vec<bool> = events
            .iter()
            .filter_map(|e| match e {
                PathEvent::End { close, .. } => Some(*close),
                _ => None,
            })
            .collect();
        assert_eq!(begins, 2);
        assert_eq!(closes, vec![false, true]);
    }

    // ── arcs ──────────────────────────────────────────────────────────────

    #[test]
    fn sweep_rules() {
        assert!((arc_sweep(0.0, TAU, false) - TAU).abs() < EPS);
        assert!((arc_sweep(0.0, 3.0 * TAU, false) - TAU).abs() < EPS);
        assert!((arc_sweep(PI, 0.0, false) - PI).abs() < EPS);
        assert!((arc_sweep(0.0, FRAC_PI_2, true) + 3.0 * FRAC_PI_2).abs() < EPS);
        assert_eq!(arc_sweep(1.0, 1.0, false), 0.0);
    }

    #[test]
    fn full_circle_closes_on_itself() {
        let c = Vec2::new(100.0, 50.0);
        let mut p = Path::new();
        p.arc(Affine2::IDENTITY, c, 20.0, 0.0, TAU, false);

        let pts = end_points(&p);
        assert!(pts.len() > 4);
        assert!(close(pts[0], Vec2::new(120.0, 50.0)));
        assert!(close(*pts.last().unwrap(), pts[0]));
        assert!(pts.iter().all(|p| (p.distance(c) - 20.0).abs() < EPS));
    }

    #[test]
    fn arc_follows_the_transform() {
        let mut p = Path::new();
        p.arc(Affine2::translation(10.0, 0.0), Vec2::zero(), 5.0, 0.0, PI, false);
        let pts = end_points(&p);
        assert!(close(pts[0], Vec2::new(15.0, 0.0)));
        assert!(close(*pts.last().unwrap(), Vec2::new(5.0, 0.0)));
    }

    // ── rounded rects ─────────────────────────────────────────────────────

    #[test]
    fn square_corners_trace_the_box() {
        let rect = Rect::new(175.0, 375.0, 50.0, 50.0);
        let mut p = Path::new();
        p.round_rect(Affine2::IDENTITY, rect, CornerRadii::zero());

        assert_eq!(p.bounds(), Some(rect));
        assert_eq!(p.verbs().last(), Some(&Verb::Close));
        assert!(p.verbs().iter().all(|v| !matches!(v, Verb::Cubic { .. })));
    }

    #[test]
    fn rounded_corners_stay_inside_box() {
        let mut p = Path::new();
        p.round_rect(Affine2::IDENTITY, Rect::new(0.0, 0.0, 30.0, 30.0), CornerRadii::all(5.0));

        let pts = end_points(&p);
        for q in &pts {
            assert!(q.x >= -EPS && q.x <= 30.0 + EPS);
            assert!(q.y >= -EPS && q.y <= 30.0 + EPS);
        }
        // The exact corner is cut off.
        assert!(!pts.iter().any(|q| close(*q, Vec2::new(0.0, 0.0))));
        assert!(p.verbs().iter().any(|v| matches!(v, Verb::Cubic { .. })));
    }
}
