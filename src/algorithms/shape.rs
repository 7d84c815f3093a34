//! A shape: an ordered sequence of contours plus the pixel-row orientation
//! flag the raster driver consults.

use crate::algorithms::contour::Contour;
use crate::geometry::Bounds;

#[derive(Debug, Clone, Default)]
pub struct Shape {
    pub contours: Vec<Contour>,
    /// Mirrors the written row within the raster region when set — the
    /// abstract pixmap is the only thing that knows pixel-row direction,
    /// the shape just carries the caller's intent.
    pub inverse_y_axis: bool,
}

impl Shape {
    pub fn new() -> Self {
        Self { contours: Vec::new(), inverse_y_axis: false }
    }

    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        for contour in &self.contours {
            bounds.union(contour.bounds());
        }
        bounds
    }

    /// Checks that every contour's edges chain endpoint-to-endpoint and
    /// close back to their first edge. Does not mutate anything — callers
    /// decide whether to [`Shape::normalize`] or refuse malformed input.
    pub fn validate(&self) -> bool {
        const EPS: f64 = 1e-9;
        for contour in &self.contours {
            if contour.edges.is_empty() {
                continue;
            }
            for i in 0..contour.edges.len() {
                let a = &contour.edges[i];
                let b = &contour.edges[(i + 1) % contour.edges.len()];
                if (a.end_point() - b.start_point()).length() > EPS {
                    return false;
                }
            }
        }
        true
    }

    /// Splits any single-edge contour into three so every contour has at
    /// least two edges, which edge coloring's corner logic assumes.
    pub fn normalize(&mut self) {
        for contour in &mut self.contours {
            contour.normalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::edge_color::EdgeColor;
    use crate::algorithms::edge_segment::EdgeSegment;
    use crate::geometry::Vector2;

    fn linear(a: Vector2, b: Vector2) -> EdgeSegment {
        EdgeSegment::Linear { start: a, end: b, color: EdgeColor::WHITE }
    }

    #[test]
    fn validate_true_for_closed_contour() {
        let shape = Shape {
            contours: vec![Contour::from_edges(vec![
                linear(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)),
                linear(Vector2::new(1.0, 0.0), Vector2::new(1.0, 1.0)),
                linear(Vector2::new(1.0, 1.0), Vector2::new(0.0, 0.0)),
            ])],
            inverse_y_axis: false,
        };
        assert!(shape.validate());
    }

    #[test]
    fn validate_false_for_gap() {
        let shape = Shape {
            contours: vec![Contour::from_edges(vec![
                linear(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)),
                linear(Vector2::new(5.0, 5.0), Vector2::new(0.0, 0.0)),
            ])],
            inverse_y_axis: false,
        };
        assert!(!shape.validate());
    }

    #[test]
    fn validate_holds_after_normalize_round_trip() {
        let mut shape = Shape {
            contours: vec![Contour::from_edges(vec![linear(
                Vector2::new(0.0, 0.0),
                Vector2::new(0.0, 0.0),
            )])],
            inverse_y_axis: false,
        };
        // A degenerate single-edge contour that already "chains" (its sole
        // edge closes to itself) stays valid through normalization.
        shape.normalize();
        assert!(shape.validate());
        assert_eq!(shape.contours[0].edges.len(), 3);
    }
}
