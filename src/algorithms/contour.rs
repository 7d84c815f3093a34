//! Ordered sequence of edges forming a closed loop, plus the winding and
//! bounds derived from it.

use crate::algorithms::edge_segment::EdgeSegment;
use crate::geometry::{Bounds, Vector2};

#[derive(Debug, Clone, Default)]
pub struct Contour {
    pub edges: Vec<EdgeSegment>,
}

impl Contour {
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    pub fn from_edges(edges: Vec<EdgeSegment>) -> Self {
        Self { edges }
    }

    /// Sign of the contour's signed area (shoelace on edge sample points):
    /// `+1` traversed counter-clockwise, `-1` clockwise, `0` for an
    /// edgeless contour or one with ~zero enclosed area.
    pub fn winding(&self) -> i32 {
        if self.edges.is_empty() {
            return 0;
        }
        if self.edges.len() == 1 {
            let e = &self.edges[0];
            let a = e.point(0.0);
            let b = e.point(1.0 / 3.0);
            let c = e.point(2.0 / 3.0);
            let area = shoelace(&[a, b, c]);
            return sign_of(area);
        }
        if self.edges.len() == 2 {
            let e0 = &self.edges[0];
            let e1 = &self.edges[1];
            let points = [e0.point(0.0), e0.point(0.5), e1.point(0.0), e1.point(0.5)];
            return sign_of(shoelace(&points));
        }
        let points: Vec<Vector2> = self.edges.iter().map(|e| e.point(0.0)).collect();
        sign_of(shoelace(&points))
    }

    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        for edge in &self.edges {
            edge.bounds(&mut bounds);
        }
        bounds
    }

    /// A contour of a single edge can't be edge-colored (coloring needs at
    /// least the notion of "the next edge"), so split it into thirds.
    pub fn normalize(&mut self) {
        if self.edges.len() == 1 {
            let (a, b, c) = self.edges[0].split_in_thirds();
            self.edges = vec![a, b, c];
        }
    }
}

fn shoelace(points: &[Vector2]) -> f64 {
    let n = points.len();
    let mut area = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        area += p.x * q.y - q.x * p.y;
    }
    area
}

fn sign_of(x: f64) -> i32 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::edge_color::EdgeColor;

    fn linear(a: Vector2, b: Vector2) -> EdgeSegment {
        EdgeSegment::Linear { start: a, end: b, color: EdgeColor::WHITE }
    }

    #[test]
    fn s2_square_winding() {
        let ccw = Contour::from_edges(vec![
            linear(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)),
            linear(Vector2::new(1.0, 0.0), Vector2::new(1.0, 1.0)),
            linear(Vector2::new(1.0, 1.0), Vector2::new(0.0, 1.0)),
            linear(Vector2::new(0.0, 1.0), Vector2::new(0.0, 0.0)),
        ]);
        assert_eq!(ccw.winding(), 1);

        let cw = Contour::from_edges(vec![
            linear(Vector2::new(0.0, 0.0), Vector2::new(0.0, 1.0)),
            linear(Vector2::new(0.0, 1.0), Vector2::new(1.0, 1.0)),
            linear(Vector2::new(1.0, 1.0), Vector2::new(1.0, 0.0)),
            linear(Vector2::new(1.0, 0.0), Vector2::new(0.0, 0.0)),
        ]);
        assert_eq!(cw.winding(), -1);
    }

    #[test]
    fn empty_contour_has_zero_winding() {
        assert_eq!(Contour::new().winding(), 0);
    }

    #[test]
    fn two_edge_contour_winding_uses_midpoints() {
        // A lens-shaped hole drawn as two quadratic arcs. Sampling only
        // `point(0)` of each edge collapses to two points (shoelace == 0),
        // which would wrongly report this contour as having no interior.
        let c = Contour::from_edges(vec![
            EdgeSegment::Quadratic {
                p0: Vector2::new(1.0, 0.0),
                control: Vector2::new(1.0, 1.0),
                p2: Vector2::new(-1.0, 0.0),
                color: EdgeColor::WHITE,
            },
            EdgeSegment::Quadratic {
                p0: Vector2::new(-1.0, 0.0),
                control: Vector2::new(-1.0, -1.0),
                p2: Vector2::new(1.0, 0.0),
                color: EdgeColor::WHITE,
            },
        ]);
        assert_eq!(c.edges.len(), 2);
        assert_eq!(c.winding(), 1);
    }

    #[test]
    fn normalize_splits_single_edge_contour() {
        let mut c = Contour::from_edges(vec![linear(Vector2::new(0.0, 0.0), Vector2::new(3.0, 0.0))]);
        c.normalize();
        assert_eq!(c.edges.len(), 3);
        assert_eq!(c.edges[0].start_point(), Vector2::new(0.0, 0.0));
        assert_eq!(c.edges[2].end_point(), Vector2::new(3.0, 0.0));
    }
}
