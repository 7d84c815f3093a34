//! Per-pixel shape evaluation: nearest colored edge per channel within each
//! contour, pseudo-distance promotion, and winding-based reconciliation
//! across contours into a single [`MultiDistance`].

use crate::algorithms::edge_color::EdgeColor;
use crate::algorithms::edge_segment::EdgeSegment;
use crate::algorithms::shape::Shape;
use crate::algorithms::signed_distance::SignedDistance;
use crate::geometry::Vector2;
use crate::math::median3;

/// The three channel distances written to a pixel, plus their combined
/// median (the value bilinear-filtered MSDF sampling ultimately recovers).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiDistance {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub median: f64,
}

impl MultiDistance {
    const INFINITE: MultiDistance = MultiDistance { r: f64::INFINITY, g: f64::INFINITY, b: f64::INFINITY, median: f64::INFINITY };
}

impl Default for MultiDistance {
    fn default() -> Self {
        MultiDistance::INFINITE
    }
}

#[derive(Debug, Clone, Copy)]
struct EdgePoint {
    min_distance: SignedDistance,
    near_edge: Option<EdgeSegment>,
    near_param: f64,
}

impl Default for EdgePoint {
    fn default() -> Self {
        Self { min_distance: SignedDistance::INFINITE, near_edge: None, near_param: 0.0 }
    }
}

impl EdgePoint {
    fn consider(&mut self, edge: EdgeSegment, origin: Vector2) {
        let (d, t) = edge.signed_distance(origin);
        if d.lt(self.min_distance) {
            self.min_distance = d;
            self.near_edge = Some(edge);
            self.near_param = t;
        }
    }

    fn distance(&self) -> f64 {
        self.min_distance.distance
    }

    fn promote_to_pseudo_distance(&mut self, origin: Vector2) {
        if let Some(edge) = self.near_edge {
            edge.distance_to_pseudo_distance(&mut self.min_distance, origin, self.near_param);
        }
    }
}

/// Per-contour winding numbers, computed once per rasterization and reused
/// across every pixel (spec.md §5's `windings[]` scratch).
pub fn compute_windings(shape: &Shape) -> Vec<i32> {
    shape.contours.iter().map(|c| c.winding()).collect()
}

/// Evaluate the multi-channel field at shape-space point `p`.
///
/// `windings` must be `compute_windings(shape)` (or equivalent) and
/// `contour_sd` scratch must have one slot per contour; both are reused
/// across pixels by the caller to avoid reallocating per call.
pub fn evaluate_msdf(shape: &Shape, windings: &[i32], contour_sd: &mut [MultiDistance], p: Vector2) -> MultiDistance {
    debug_assert_eq!(windings.len(), shape.contours.len());
    debug_assert_eq!(contour_sd.len(), shape.contours.len());

    let mut sr = EdgePoint::default();
    let mut sg = EdgePoint::default();
    let mut sb = EdgePoint::default();

    let mut d_best = f64::INFINITY;
    let mut bootstrap_winding = 0i32;
    let mut pos_dist = f64::INFINITY;
    let mut neg_dist = f64::NEG_INFINITY;

    for (i, contour) in shape.contours.iter().enumerate() {
        let mut r = EdgePoint::default();
        let mut g = EdgePoint::default();
        let mut b = EdgePoint::default();

        for edge in &contour.edges {
            let color = edge.color();
            if color.contains_channel(EdgeColor::RED) {
                r.consider(*edge, p);
            }
            if color.contains_channel(EdgeColor::GREEN) {
                g.consider(*edge, p);
            }
            if color.contains_channel(EdgeColor::BLUE) {
                b.consider(*edge, p);
            }
        }

        if r.min_distance.lt(sr.min_distance) {
            sr = r;
        }
        if g.min_distance.lt(sg.min_distance) {
            sg = g;
        }
        if b.min_distance.lt(sb.min_distance) {
            sb = b;
        }

        let med_min = median3(r.distance(), g.distance(), b.distance()).abs();
        if med_min < d_best {
            d_best = med_min;
            bootstrap_winding = -windings[i];
        }

        r.promote_to_pseudo_distance(p);
        g.promote_to_pseudo_distance(p);
        b.promote_to_pseudo_distance(p);

        let median = median3(r.distance(), g.distance(), b.distance());
        contour_sd[i] = MultiDistance { r: r.distance(), g: g.distance(), b: b.distance(), median };

        if windings[i] > 0 && median >= 0.0 && median.abs() < pos_dist.abs() {
            pos_dist = median;
        }
        if windings[i] < 0 && median <= 0.0 && median.abs() < neg_dist.abs() {
            neg_dist = median;
        }
    }

    sr.promote_to_pseudo_distance(p);
    sg.promote_to_pseudo_distance(p);
    sb.promote_to_pseudo_distance(p);

    let mut msd = MultiDistance::INFINITE;
    let mut winding = bootstrap_winding;

    if pos_dist >= 0.0 && pos_dist.abs() <= neg_dist.abs() {
        winding = 1;
        let mut best = f64::NEG_INFINITY;
        for (i, candidate) in contour_sd.iter().enumerate() {
            if windings[i] > 0 && candidate.median.abs() < neg_dist.abs() && candidate.median > best {
                best = candidate.median;
                msd = *candidate;
            }
        }
    } else if neg_dist <= 0.0 && neg_dist.abs() <= pos_dist.abs() {
        winding = -1;
        let mut best = f64::INFINITY;
        for (i, candidate) in contour_sd.iter().enumerate() {
            if windings[i] < 0 && candidate.median.abs() < pos_dist.abs() && candidate.median < best {
                best = candidate.median;
                msd = *candidate;
            }
        }
    }

    for (i, candidate) in contour_sd.iter().enumerate() {
        if windings[i] != winding && candidate.median.abs() < msd.median.abs() {
            msd = *candidate;
        }
    }

    if median3(sr.distance(), sg.distance(), sb.distance()) == msd.median {
        msd.r = sr.distance();
        msd.g = sg.distance();
        msd.b = sb.distance();
    }

    msd
}

/// Single-channel counterpart of [`evaluate_msdf`]: the same winding-based
/// reconciliation, but with one edge-color-blind distance per contour
/// instead of three channel-gated ones.
pub fn evaluate_sdf(shape: &Shape, windings: &[i32], contour_sd: &mut [f64], p: Vector2) -> f64 {
    debug_assert_eq!(windings.len(), shape.contours.len());
    debug_assert_eq!(contour_sd.len(), shape.contours.len());

    let mut pos_dist = f64::INFINITY;
    let mut neg_dist = f64::NEG_INFINITY;

    for (i, contour) in shape.contours.iter().enumerate() {
        let mut acc = EdgePoint::default();
        for edge in &contour.edges {
            acc.consider(*edge, p);
        }
        acc.promote_to_pseudo_distance(p);
        let d = acc.distance();
        contour_sd[i] = d;

        if windings[i] > 0 && d >= 0.0 && d.abs() < pos_dist.abs() {
            pos_dist = d;
        }
        if windings[i] < 0 && d <= 0.0 && d.abs() < neg_dist.abs() {
            neg_dist = d;
        }
    }

    let mut result = f64::INFINITY;
    let mut winding = 0i32;

    if pos_dist >= 0.0 && pos_dist.abs() <= neg_dist.abs() {
        winding = 1;
        let mut best = f64::NEG_INFINITY;
        for (i, &d) in contour_sd.iter().enumerate() {
            if windings[i] > 0 && d.abs() < neg_dist.abs() && d > best {
                best = d;
                result = d;
            }
        }
    } else if neg_dist <= 0.0 && neg_dist.abs() <= pos_dist.abs() {
        winding = -1;
        let mut best = f64::INFINITY;
        for (i, &d) in contour_sd.iter().enumerate() {
            if windings[i] < 0 && d.abs() < pos_dist.abs() && d < best {
                best = d;
                result = d;
            }
        }
    }

    for (i, &d) in contour_sd.iter().enumerate() {
        if windings[i] != winding && d.abs() < result.abs() {
            result = d;
        }
    }

    result
}
