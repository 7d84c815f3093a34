//! Edge color labels — the 3-bit flag set each edge carries to indicate
//! which MSDF channels it contributes distance to.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EdgeColor: u8 {
        const RED = 1;
        const GREEN = 2;
        const BLUE = 4;
    }
}

impl EdgeColor {
    pub const BLACK: EdgeColor = EdgeColor::empty();
    pub const YELLOW: EdgeColor = EdgeColor::RED.union(EdgeColor::GREEN);
    pub const MAGENTA: EdgeColor = EdgeColor::RED.union(EdgeColor::BLUE);
    pub const CYAN: EdgeColor = EdgeColor::GREEN.union(EdgeColor::BLUE);
    pub const WHITE: EdgeColor = EdgeColor::RED.union(EdgeColor::GREEN).union(EdgeColor::BLUE);

    /// Whether this edge contributes distance to `channel` (one of the
    /// three single-bit colors).
    pub fn contains_channel(self, channel: EdgeColor) -> bool {
        self.contains(channel)
    }
}

impl Default for EdgeColor {
    fn default() -> Self {
        EdgeColor::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_combinations_match_bit_unions() {
        assert_eq!(EdgeColor::YELLOW.bits(), EdgeColor::RED.bits() | EdgeColor::GREEN.bits());
        assert_eq!(EdgeColor::WHITE.bits(), 0b111);
        assert_eq!(EdgeColor::BLACK.bits(), 0);
    }

    #[test]
    fn contains_channel() {
        assert!(EdgeColor::YELLOW.contains_channel(EdgeColor::RED));
        assert!(!EdgeColor::YELLOW.contains_channel(EdgeColor::BLUE));
    }
}
