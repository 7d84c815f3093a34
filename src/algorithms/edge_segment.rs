//! The edge variant family (linear / quadratic / cubic) and its shared
//! contract: point/direction evaluation, signed distance to a point,
//! bounds, endpoint movement, and splitting into thirds.
//!
//! Modeled as a tagged union with one dispatch point per operation rather
//! than a class hierarchy — the per-variant bodies are short enough that a
//! `match` reads better than a trait object, and `color` lives as a common
//! field instead of behind a virtual accessor.

use crate::algorithms::edge_color::EdgeColor;
use crate::algorithms::signed_distance::SignedDistance;
use crate::geometry::{orthonormal, Bounds, Vector2};
use crate::math::{non_zero_sign, solve_cubic, solve_quadratic};

const CUBIC_SEARCH_STARTS: usize = 4;
const CUBIC_SEARCH_STEPS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeSegment {
    Linear {
        start: Vector2,
        end: Vector2,
        color: EdgeColor,
    },
    Quadratic {
        p0: Vector2,
        control: Vector2,
        p2: Vector2,
        color: EdgeColor,
    },
    Cubic {
        p0: Vector2,
        c1: Vector2,
        c2: Vector2,
        p3: Vector2,
        color: EdgeColor,
    },
}

impl EdgeSegment {
    pub fn color(&self) -> EdgeColor {
        match self {
            EdgeSegment::Linear { color, .. }
            | EdgeSegment::Quadratic { color, .. }
            | EdgeSegment::Cubic { color, .. } => *color,
        }
    }

    pub fn set_color(&mut self, new_color: EdgeColor) {
        match self {
            EdgeSegment::Linear { color, .. }
            | EdgeSegment::Quadratic { color, .. }
            | EdgeSegment::Cubic { color, .. } => *color = new_color,
        }
    }

    pub fn start_point(&self) -> Vector2 {
        match *self {
            EdgeSegment::Linear { start, .. } => start,
            EdgeSegment::Quadratic { p0, .. } => p0,
            EdgeSegment::Cubic { p0, .. } => p0,
        }
    }

    pub fn end_point(&self) -> Vector2 {
        match *self {
            EdgeSegment::Linear { end, .. } => end,
            EdgeSegment::Quadratic { p2, .. } => p2,
            EdgeSegment::Cubic { p3, .. } => p3,
        }
    }

    /// Evaluate the curve at `t` (de Casteljau form).
    pub fn point(&self, t: f64) -> Vector2 {
        match *self {
            EdgeSegment::Linear { start, end, .. } => start + (end - start) * t,
            EdgeSegment::Quadratic { p0, control, p2, .. } => {
                let mt = 1.0 - t;
                p0 * (mt * mt) + control * (2.0 * mt * t) + p2 * (t * t)
            }
            EdgeSegment::Cubic { p0, c1, c2, p3, .. } => {
                let mt = 1.0 - t;
                let mt2 = mt * mt;
                let t2 = t * t;
                p0 * (mt2 * mt) + c1 * (3.0 * mt2 * t) + c2 * (3.0 * mt * t2) + p3 * (t2 * t)
            }
        }
    }

    /// Derivative at `t`. For cubics, falls back to the start/end chord when
    /// the tangent degenerates to zero (a repeated control point).
    pub fn direction(&self, t: f64) -> Vector2 {
        match *self {
            EdgeSegment::Linear { start, end, .. } => end - start,
            EdgeSegment::Quadratic { p0, control, p2, .. } => {
                let tangent = (control - p0) * (1.0 - t) + (p2 - control) * t;
                tangent * 2.0
            }
            EdgeSegment::Cubic { p0, c1, c2, p3, .. } => {
                let mt = 1.0 - t;
                let tangent =
                    (c1 - p0) * (3.0 * mt * mt) + (c2 - c1) * (6.0 * mt * t) + (p3 - c2) * (3.0 * t * t);
                if tangent.length() < 1e-14 {
                    if t == 0.0 {
                        p2_minus_p0(p0, c1, c2, p3)
                    } else if t == 1.0 {
                        p3_minus_p1(p0, c1, c2, p3)
                    } else {
                        tangent
                    }
                } else {
                    tangent
                }
            }
        }
    }

    /// Closest-point signed distance and the parameter `t` at which it was
    /// found. `t` may fall outside `[0,1]` when the nearest point to the
    /// curve lies beyond an endpoint — that is exactly the input
    /// [`distance_to_pseudo_distance`] promotes.
    pub fn signed_distance(&self, origin: Vector2) -> (SignedDistance, f64) {
        match *self {
            EdgeSegment::Linear { start, end, .. } => linear_signed_distance(start, end, origin),
            EdgeSegment::Quadratic { p0, control, p2, .. } => {
                quadratic_signed_distance(p0, control, p2, origin)
            }
            EdgeSegment::Cubic { p0, c1, c2, p3, .. } => cubic_signed_distance(p0, c1, c2, p3, origin),
        }
    }

    pub fn bounds(&self, bounds: &mut Bounds) {
        bounds.expand(self.start_point());
        bounds.expand(self.end_point());
        match *self {
            EdgeSegment::Linear { .. } => {}
            EdgeSegment::Quadratic { p0, control, p2, .. } => {
                for axis_root in quadratic_extrema(p0, control, p2) {
                    bounds.expand(self.point(axis_root));
                }
            }
            EdgeSegment::Cubic { p0, c1, c2, p3, .. } => {
                for axis_root in cubic_extrema(p0, c1, c2, p3) {
                    bounds.expand(self.point(axis_root));
                }
            }
        }
    }

    pub fn move_start(&mut self, new_start: Vector2) {
        match self {
            EdgeSegment::Linear { start, .. } => *start = new_start,
            EdgeSegment::Cubic { p0, c1, .. } => {
                *c1 = *c1 + (new_start - *p0);
                *p0 = new_start;
            }
            EdgeSegment::Quadratic { p0, control, p2, .. } => {
                reposition_quadratic_control(p0, control, *p2, new_start);
            }
        }
    }

    pub fn move_end(&mut self, new_end: Vector2) {
        match self {
            EdgeSegment::Linear { end, .. } => *end = new_end,
            EdgeSegment::Cubic { p3, c2, .. } => {
                *c2 = *c2 + (new_end - *p3);
                *p3 = new_end;
            }
            EdgeSegment::Quadratic { p0, control, p2, .. } => {
                let orig_p0 = *p0;
                reposition_quadratic_control_end(control, orig_p0, *p2, new_end);
                *p2 = new_end;
            }
        }
    }

    /// Split into three edges of the same variant covering `[0,1/3]`,
    /// `[1/3,2/3]` and `[2/3,1]` of the original curve exactly.
    pub fn split_in_thirds(&self) -> (EdgeSegment, EdgeSegment, EdgeSegment) {
        let color = self.color();
        match *self {
            EdgeSegment::Linear { start, end, .. } => {
                let a = start + (end - start) * (1.0 / 3.0);
                let b = start + (end - start) * (2.0 / 3.0);
                (
                    EdgeSegment::Linear { start, end: a, color },
                    EdgeSegment::Linear { start: a, end: b, color },
                    EdgeSegment::Linear { start: b, end, color },
                )
            }
            EdgeSegment::Quadratic { p0, control, p2, .. } => {
                let (left, rest) = subdivide_quadratic(p0, control, p2, 1.0 / 3.0);
                let (mid, right) = subdivide_quadratic(rest.0, rest.1, rest.2, 0.5);
                (
                    EdgeSegment::Quadratic { p0: left.0, control: left.1, p2: left.2, color },
                    EdgeSegment::Quadratic { p0: mid.0, control: mid.1, p2: mid.2, color },
                    EdgeSegment::Quadratic { p0: right.0, control: right.1, p2: right.2, color },
                )
            }
            EdgeSegment::Cubic { p0, c1, c2, p3, .. } => {
                let (left, rest) = subdivide_cubic(p0, c1, c2, p3, 1.0 / 3.0);
                let (mid, right) = subdivide_cubic(rest.0, rest.1, rest.2, rest.3, 0.5);
                (
                    EdgeSegment::Cubic { p0: left.0, c1: left.1, c2: left.2, p3: left.3, color },
                    EdgeSegment::Cubic { p0: mid.0, c1: mid.1, c2: mid.2, p3: mid.3, color },
                    EdgeSegment::Cubic { p0: right.0, c1: right.1, c2: right.2, p3: right.3, color },
                )
            }
        }
    }

    /// Extend a finite-segment signed distance beyond this edge's endpoints
    /// along its tangent there, iff the extension yields a smaller or equal
    /// magnitude than the supplied distance.
    pub fn distance_to_pseudo_distance(&self, d: &mut SignedDistance, origin: Vector2, t: f64) {
        if t < 0.0 {
            let dir = self.direction(0.0).normalize();
            let aq = origin - self.start_point();
            let ts = aq.dot(dir);
            if ts < 0.0 {
                let pseudo = aq.cross(dir);
                if pseudo.abs() <= d.distance.abs() {
                    *d = SignedDistance::new(pseudo, 0.0);
                }
            }
        } else if t > 1.0 {
            let dir = self.direction(1.0).normalize();
            let bq = origin - self.end_point();
            let ts = bq.dot(dir);
            if ts > 0.0 {
                let pseudo = bq.cross(dir);
                if pseudo.abs() <= d.distance.abs() {
                    *d = SignedDistance::new(pseudo, 0.0);
                }
            }
        }
    }
}

fn lerp(a: Vector2, b: Vector2, t: f64) -> Vector2 {
    a + (b - a) * t
}

/// de Casteljau subdivision of a quadratic at `t`, splitting it into the
/// curve over `[0,t]` and the curve over `[t,1]` (both exact, re-based to
/// their own `[0,1]`).
fn subdivide_quadratic(
    p0: Vector2,
    control: Vector2,
    p2: Vector2,
    t: f64,
) -> ((Vector2, Vector2, Vector2), (Vector2, Vector2, Vector2)) {
    let q1 = lerp(p0, control, t);
    let r1 = lerp(control, p2, t);
    let m = lerp(q1, r1, t);
    ((p0, q1, m), (m, r1, p2))
}

/// de Casteljau subdivision of a cubic at `t`.
fn subdivide_cubic(
    p0: Vector2,
    c1: Vector2,
    c2: Vector2,
    p3: Vector2,
    t: f64,
) -> (
    (Vector2, Vector2, Vector2, Vector2),
    (Vector2, Vector2, Vector2, Vector2),
) {
    let p01 = lerp(p0, c1, t);
    let p12 = lerp(c1, c2, t);
    let p23 = lerp(c2, p3, t);
    let p012 = lerp(p01, p12, t);
    let p123 = lerp(p12, p23, t);
    let p0123 = lerp(p012, p123, t);
    ((p0, p01, p012, p0123), (p0123, p123, p23, p3))
}

fn p2_minus_p0(p0: Vector2, _c1: Vector2, c2: Vector2, _p3: Vector2) -> Vector2 {
    c2 - p0
}

fn p3_minus_p1(_p0: Vector2, c1: Vector2, _c2: Vector2, p3: Vector2) -> Vector2 {
    p3 - c1
}

/// §4.4: reposition a quadratic's single control point so the curve still
/// passes through the original control direction after `move_start`.
fn reposition_quadratic_control(p0: &mut Vector2, control: &mut Vector2, far: Vector2, new_start: Vector2) {
    let orig_dir = *control - *p0;
    let denom = orig_dir.cross(far - *control);
    if denom.abs() > 1e-14 {
        let delta = orig_dir.cross(new_start - *p0) / denom;
        let candidate = *control + (far - *control) * delta;
        if orig_dir.dot(candidate - new_start) >= 0.0 {
            *control = candidate;
        }
    }
    *p0 = new_start;
}

fn reposition_quadratic_control_end(control: &mut Vector2, far: Vector2, orig_end: Vector2, new_end: Vector2) {
    let orig_dir = orig_end - *control;
    let denom = orig_dir.cross(far - *control);
    if denom.abs() > 1e-14 {
        let delta = orig_dir.cross(new_end - orig_end) / denom;
        let candidate = *control + (far - *control) * delta;
        if orig_dir.dot(new_end - candidate) >= 0.0 {
            *control = candidate;
        }
    }
}

fn linear_signed_distance(start: Vector2, end: Vector2, origin: Vector2) -> (SignedDistance, f64) {
    let ab = end - start;
    let aq = origin - start;
    let ab_len_sq = ab.dot(ab);
    let t = if ab_len_sq > 1e-28 { aq.dot(ab) / ab_len_sq } else { 0.0 };
    let eq = origin - end;
    let endpoint_distance = if t > 0.5 { eq.length() } else { aq.length() };

    if t > 0.0 && t < 1.0 {
        let ortho = orthonormal(ab, false, true).dot(aq);
        if ortho.abs() < endpoint_distance {
            return (SignedDistance::new(ortho, 0.0), t);
        }
    }

    let sign = non_zero_sign(aq.cross(ab));
    let dot = if t < 0.0 {
        ab.normalize().dot(aq.normalize()).abs()
    } else {
        ab.normalize().dot(eq.normalize()).abs()
    };
    (SignedDistance::new(sign * endpoint_distance, dot), t)
}

fn quadratic_signed_distance(p0: Vector2, p1: Vector2, p2: Vector2, origin: Vector2) -> (SignedDistance, f64) {
    let qa = p0 - origin;
    let ab = p1 - p0;
    let br = p2 - p1 - ab;
    let a = br.dot(br);
    let b = 3.0 * ab.dot(br);
    let c = 2.0 * ab.dot(ab) + qa.dot(br);
    let d = qa.dot(ab);

    let ab_len_sq = ab.dot(ab);
    let mut min_distance = non_zero_sign(ab.cross(qa)) * qa.length();
    let mut param = if ab_len_sq > 1e-28 { -qa.dot(ab) / ab_len_sq } else { 0.0 };

    {
        let p2_minus_p1 = p2 - p1;
        let p2_minus_o = p2 - origin;
        let distance = non_zero_sign(p2_minus_p1.cross(p2_minus_o)) * p2_minus_o.length();
        if distance.abs() < min_distance.abs() {
            min_distance = distance;
            let denom = p2_minus_p1.dot(p2_minus_p1);
            param = if denom > 1e-28 {
                (origin - p1).dot(p2_minus_p1) / denom
            } else {
                1.0
            };
        }
    }

    for t in solve_cubic(a, b, c, d) {
        if t > 0.0 && t < 1.0 {
            let qe = qa + ab * (2.0 * t) + br * (t * t);
            let tangent = ab + br * t;
            let distance = non_zero_sign(tangent.cross(qe)) * qe.length();
            if distance.abs() <= min_distance.abs() {
                min_distance = distance;
                param = t;
            }
        }
    }

    if param >= 0.0 && param <= 1.0 {
        (SignedDistance::new(min_distance, 0.0), param)
    } else if param < 0.5 {
        (SignedDistance::new(min_distance, ab.normalize().dot(qa.normalize()).abs()), param)
    } else {
        let p2_minus_p1 = p2 - p1;
        let p2_minus_o = p2 - origin;
        (
            SignedDistance::new(min_distance, p2_minus_p1.normalize().dot(p2_minus_o.normalize()).abs()),
            param,
        )
    }
}

fn cubic_signed_distance(p0: Vector2, c1: Vector2, c2: Vector2, p3: Vector2, origin: Vector2) -> (SignedDistance, f64) {
    let qa = p0 - origin;
    let ab = c1 - p0;
    let br = c2 - c1 - ab;
    let as_ = (p3 - c2) - (c2 - c1) - br;

    let cubic = EdgeSegment::Cubic { p0, c1, c2, p3, color: EdgeColor::BLACK };

    let mut ep_dir = cubic.direction(0.0);
    let mut min_distance = non_zero_sign(ep_dir.cross(qa)) * qa.length();
    let mut param = {
        let denom = ep_dir.dot(ep_dir);
        if denom > 1e-28 {
            -qa.dot(ep_dir) / denom
        } else {
            0.0
        }
    };

    {
        ep_dir = cubic.direction(1.0);
        let p3_minus_o = p3 - origin;
        let distance = non_zero_sign(ep_dir.cross(p3_minus_o)) * p3_minus_o.length();
        if distance.abs() < min_distance.abs() {
            min_distance = distance;
            let denom = ep_dir.dot(ep_dir);
            param = if denom > 1e-28 {
                (origin - p3).dot(ep_dir) / denom + 1.0
            } else {
                1.0
            };
        }
    }

    for i in 0..=CUBIC_SEARCH_STARTS {
        let mut t = i as f64 / CUBIC_SEARCH_STARTS as f64;
        let mut qe = qa + ab * (3.0 * t) + br * (3.0 * t * t) + as_ * (t * t * t);
        for _ in 0..CUBIC_SEARCH_STEPS {
            let d1 = ab * 3.0 + br * (6.0 * t) + as_ * (3.0 * t * t);
            let d2 = br * 6.0 + as_ * (6.0 * t);
            let denom = d1.dot(d1) + qe.dot(d2);
            if denom.abs() < 1e-28 {
                break;
            }
            t -= qe.dot(d1) / denom;
            if !(0.0..=1.0).contains(&t) {
                break;
            }
            qe = qa + ab * (3.0 * t) + br * (3.0 * t * t) + as_ * (t * t * t);
            let d1_at_t = ab * 3.0 + br * (6.0 * t) + as_ * (3.0 * t * t);
            let distance = non_zero_sign(d1_at_t.cross(qe)) * qe.length();
            if distance.abs() < min_distance.abs() {
                min_distance = distance;
                param = t;
            }
        }
    }

    if param >= 0.0 && param <= 1.0 {
        (SignedDistance::new(min_distance, 0.0), param)
    } else if param < 0.5 {
        (
            SignedDistance::new(min_distance, cubic.direction(0.0).normalize().dot(qa.normalize()).abs()),
            param,
        )
    } else {
        let p3_minus_o = p3 - origin;
        (
            SignedDistance::new(
                min_distance,
                cubic.direction(1.0).normalize().dot(p3_minus_o.normalize()).abs(),
            ),
            param,
        )
    }
}

/// Roots of `direction(t).x == 0` and `direction(t).y == 0` within `(0,1)`,
/// the candidate interior extrema for the bounding box.
fn quadratic_extrema(p0: Vector2, control: Vector2, p2: Vector2) -> Vec<f64> {
    let mut roots = Vec::new();
    for axis in [
        (p0.x, control.x, p2.x),
        (p0.y, control.y, p2.y),
    ] {
        let (a, b, c) = axis;
        let denom = a - 2.0 * b + c;
        if denom.abs() > 1e-14 {
            let t = (a - b) / denom;
            if t > 0.0 && t < 1.0 {
                roots.push(t);
            }
        }
    }
    roots
}

fn cubic_extrema(p0: Vector2, c1: Vector2, c2: Vector2, p3: Vector2) -> Vec<f64> {
    let mut roots = Vec::new();
    for axis in [(p0.x, c1.x, c2.x, p3.x), (p0.y, c1.y, c2.y, p3.y)] {
        let (a0, a1, a2, a3) = axis;
        // derivative of cubic bezier is a quadratic in t
        let qa = 3.0 * (a1 - a0);
        let qb = 6.0 * (a2 - 2.0 * a1 + a0);
        let qc = 3.0 * (a3 - 3.0 * a2 + 3.0 * a1 - a0);
        for t in solve_quadratic(qc, qb, qa) {
            if t > 0.0 && t < 1.0 {
                roots.push(t);
            }
        }
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(start: Vector2, end: Vector2) -> EdgeSegment {
        EdgeSegment::Linear { start, end, color: EdgeColor::WHITE }
    }

    #[test]
    fn point_endpoints_match_recorded_start_and_end() {
        let l = linear(Vector2::new(1.0, 2.0), Vector2::new(5.0, 6.0));
        assert_eq!(l.point(0.0), Vector2::new(1.0, 2.0));
        assert_eq!(l.point(1.0), Vector2::new(5.0, 6.0));

        let q = EdgeSegment::Quadratic {
            p0: Vector2::new(0.0, 0.0),
            control: Vector2::new(1.0, 1.0),
            p2: Vector2::new(2.0, 0.0),
            color: EdgeColor::WHITE,
        };
        assert_eq!(q.point(0.0), Vector2::new(0.0, 0.0));
        assert_eq!(q.point(1.0), Vector2::new(2.0, 0.0));

        let c = EdgeSegment::Cubic {
            p0: Vector2::new(0.0, 0.0),
            c1: Vector2::new(0.0, 1.0),
            c2: Vector2::new(1.0, 1.0),
            p3: Vector2::new(1.0, 0.0),
            color: EdgeColor::WHITE,
        };
        assert_eq!(c.point(0.0), Vector2::new(0.0, 0.0));
        assert_eq!(c.point(1.0), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn s1_linear_midpoint_distance() {
        let l = linear(Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0));
        let (d, t) = l.signed_distance(Vector2::new(5.0, 3.0));
        assert!((t - 0.5).abs() < 1e-9);
        assert!((d.distance - -3.0).abs() < 1e-9);
        assert_eq!(d.dot, 0.0);
    }

    #[test]
    fn s6_cubic_endpoint_and_pseudo_distance() {
        let c = EdgeSegment::Cubic {
            p0: Vector2::new(0.0, 0.0),
            c1: Vector2::new(0.0, 0.0),
            c2: Vector2::new(1.0, 1.0),
            p3: Vector2::new(1.0, 1.0),
            color: EdgeColor::WHITE,
        };
        let (d, t) = c.signed_distance(Vector2::new(0.0, 0.0));
        assert!(t.abs() < 1e-9);
        assert!(d.distance.abs() < 1e-9);
        assert_eq!(d.dot, 0.0);

        let (mut d2, t2) = c.signed_distance(Vector2::new(-1.0, 0.0));
        assert!(t2 < 0.0);
        let dir0 = c.direction(0.0).normalize();
        c.distance_to_pseudo_distance(&mut d2, Vector2::new(-1.0, 0.0), t2);
        let expected = (Vector2::new(-1.0, 0.0) - c.start_point()).cross(dir0);
        assert!((d2.distance - expected).abs() < 1e-6);
    }

    #[test]
    fn split_in_thirds_linear_preserves_trace() {
        let l = linear(Vector2::new(0.0, 0.0), Vector2::new(9.0, 0.0));
        let (a, b, c) = l.split_in_thirds();
        assert_eq!(a.point(1.0), l.point(1.0 / 3.0));
        assert_eq!(b.start_point(), a.end_point());
        assert_eq!(b.point(1.0), l.point(2.0 / 3.0));
        assert_eq!(c.start_point(), b.end_point());
        assert_eq!(c.point(1.0), l.point(1.0));
    }

    #[test]
    fn split_in_thirds_cubic_chains_and_matches_samples() {
        let c = EdgeSegment::Cubic {
            p0: Vector2::new(0.0, 0.0),
            c1: Vector2::new(0.0, 1.0),
            c2: Vector2::new(1.0, 1.0),
            p3: Vector2::new(1.0, 0.0),
            color: EdgeColor::WHITE,
        };
        let (p1, p2, p3) = c.split_in_thirds();
        assert_eq!(p1.start_point(), c.start_point());
        assert_eq!(p3.end_point(), c.end_point());
        assert_eq!(p1.end_point(), p2.start_point());
        assert_eq!(p2.end_point(), p3.start_point());

        let a = c.point(1.0 / 3.0);
        let b = c.point(2.0 / 3.0);
        assert!((p1.end_point() - a).length() < 1e-9);
        assert!((p2.start_point() - a).length() < 1e-9);
        assert!((p2.end_point() - b).length() < 1e-9);
        assert!((p3.start_point() - b).length() < 1e-9);
    }

    #[test]
    fn move_start_repositions_quadratic_control_and_keeps_tangent() {
        let mut q = EdgeSegment::Quadratic {
            p0: Vector2::new(0.0, 0.0),
            control: Vector2::new(1.0, 2.0),
            p2: Vector2::new(2.0, 0.0),
            color: EdgeColor::WHITE,
        };
        q.move_start(Vector2::new(-1.0, 0.0));
        assert_eq!(q.start_point(), Vector2::new(-1.0, 0.0));
        assert_eq!(q.end_point(), Vector2::new(2.0, 0.0));
        match q {
            EdgeSegment::Quadratic { control, .. } => {
                assert!((control - Vector2::new(0.5, 3.0)).length() < 1e-9, "got {control:?}");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn move_end_repositions_quadratic_control_and_keeps_tangent() {
        let mut q = EdgeSegment::Quadratic {
            p0: Vector2::new(0.0, 0.0),
            control: Vector2::new(1.0, 2.0),
            p2: Vector2::new(2.0, 0.0),
            color: EdgeColor::WHITE,
        };
        q.move_end(Vector2::new(3.0, 0.0));
        assert_eq!(q.start_point(), Vector2::new(0.0, 0.0));
        assert_eq!(q.end_point(), Vector2::new(3.0, 0.0));
        match q {
            EdgeSegment::Quadratic { control, .. } => {
                assert!((control - Vector2::new(1.5, 3.0)).length() < 1e-9, "got {control:?}");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn move_start_and_end_on_linear_and_cubic_translate_endpoints() {
        let mut l = linear(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
        l.move_start(Vector2::new(-1.0, -1.0));
        assert_eq!(l.start_point(), Vector2::new(-1.0, -1.0));
        l.move_end(Vector2::new(2.0, 2.0));
        assert_eq!(l.end_point(), Vector2::new(2.0, 2.0));

        let mut c = EdgeSegment::Cubic {
            p0: Vector2::new(0.0, 0.0),
            c1: Vector2::new(0.0, 1.0),
            c2: Vector2::new(1.0, 1.0),
            p3: Vector2::new(1.0, 0.0),
            color: EdgeColor::WHITE,
        };
        c.move_start(Vector2::new(-1.0, 0.0));
        assert_eq!(c.start_point(), Vector2::new(-1.0, 0.0));
        match c {
            EdgeSegment::Cubic { c1, .. } => assert_eq!(c1, Vector2::new(-1.0, 1.0)),
            _ => unreachable!(),
        }
        c.move_end(Vector2::new(2.0, 0.0));
        assert_eq!(c.end_point(), Vector2::new(2.0, 0.0));
        match c {
            EdgeSegment::Cubic { c2, .. } => assert_eq!(c2, Vector2::new(2.0, 1.0)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn bounds_includes_quadratic_extremum() {
        let q = EdgeSegment::Quadratic {
            p0: Vector2::new(0.0, 0.0),
            control: Vector2::new(1.0, 2.0),
            p2: Vector2::new(2.0, 0.0),
            color: EdgeColor::WHITE,
        };
        let mut b = Bounds::empty();
        q.bounds(&mut b);
        assert!(b.top > 0.9);
    }
}
