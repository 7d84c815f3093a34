//! Signed distance with a secondary ordering key.
//!
//! A single `f64` can't tell two equally-close-but-oppositely-angled edges
//! apart, which is exactly the situation at a segment endpoint shared by two
//! edges. `dot` is that tiebreaker: callers compare by `|distance|` first and
//! by `dot` only when the magnitudes tie.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignedDistance {
    pub distance: f64,
    pub dot: f64,
}

impl SignedDistance {
    pub const INFINITE: SignedDistance = SignedDistance {
        distance: -1e240,
        dot: 1.0,
    };

    pub fn new(distance: f64, dot: f64) -> Self {
        Self { distance, dot }
    }

    /// `self < other` under the magnitude-then-dot preorder described in
    /// spec.md §3. Not a total order on exact ties (dot ties leave things
    /// incomparable in spirit, though this returns `Equal` for `cmp`-based
    /// callers).
    pub fn lt(self, other: SignedDistance) -> bool {
        matches!(self.compare(other), Ordering::Less)
    }

    pub fn compare(self, other: SignedDistance) -> Ordering {
        let a = self.distance.abs();
        let b = other.distance.abs();
        match a.partial_cmp(&b) {
            Some(Ordering::Equal) | None => {
                self.dot.partial_cmp(&other.dot).unwrap_or(Ordering::Equal)
            }
            Some(ord) => ord,
        }
    }
}

impl Default for SignedDistance {
    fn default() -> Self {
        SignedDistance::INFINITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_magnitude_first() {
        let a = SignedDistance::new(-1.0, 0.0);
        let b = SignedDistance::new(2.0, 0.0);
        assert!(a.lt(b));
        assert!(!b.lt(a));
    }

    #[test]
    fn ties_break_on_dot() {
        let a = SignedDistance::new(1.0, 0.2);
        let b = SignedDistance::new(-1.0, 0.5);
        assert!(a.lt(b));
    }

    #[test]
    fn infinite_is_larger_than_anything_finite() {
        let finite = SignedDistance::new(1000.0, 0.0);
        assert!(finite.lt(SignedDistance::INFINITE));
    }
}
