//! A single domino.
//!
//! A tile is an ordered pair `(left, right)` of end values in `0..=6`.
//! Its identity is the unordered pair: `[2, 4]` and `[4, 2]` are the same
//! piece in two orientations. Orientation is mutable via [`Tile::flip`] so
//! a tile can be turned to face an open end of the chain.

use serde::{Deserialize, Serialize};

use crate::core::DominoError;

/// Highest end value in a double-six set.
pub const MAX_PIP: u8 = 6;

/// A domino with two end values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    left: u8,
    right: u8,
}

impl Tile {
    /// Create a tile.
    ///
    /// Panics if either value exceeds [`MAX_PIP`]; use [`Tile::try_new`]
    /// for unchecked input.
    #[must_use]
    pub const fn new(left: u8, right: u8) -> Self {
        assert!(left <= MAX_PIP && right <= MAX_PIP, "Tile values must be in 0..=6");
        Self { left, right }
    }

    /// Create a tile, rejecting values outside `0..=6`.
    pub fn try_new(left: u8, right: u8) -> Result<Self, DominoError> {
        if left > MAX_PIP || right > MAX_PIP {
            return Err(DominoError::InvalidTile { left, right });
        }
        Ok(Self { left, right })
    }

    #[inline]
    #[must_use]
    pub const fn left(self) -> u8 {
        self.left
    }

    #[inline]
    #[must_use]
    pub const fn right(self) -> u8 {
        self.right
    }

    /// Unordered equality: true for `(a, b)` and for `(b, a)`.
    #[must_use]
    pub fn matches(self, a: u8, b: u8) -> bool {
        (self.left == a && self.right == b) || (self.left == b && self.right == a)
    }

    /// Same physical piece, regardless of orientation.
    #[must_use]
    pub fn same_piece(self, other: Tile) -> bool {
        self.matches(other.left, other.right)
    }

    #[inline]
    #[must_use]
    pub fn contains(self, value: u8) -> bool {
        self.left == value || self.right == value
    }

    #[inline]
    #[must_use]
    pub fn is_double(self) -> bool {
        self.left == self.right
    }

    /// Swap the two ends in place.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_either_orientation() {
        let tile = Tile::new(2, 5);
        assert!(tile.matches(2, 5));
        assert!(tile.matches(5, 2));
        assert!(!tile.matches(2, 2));
        assert!(tile.same_piece(Tile::new(5, 2)));
        assert_ne!(tile, Tile::new(5, 2));
    }

    #[test]
    fn test_contains_and_double() {
        let tile = Tile::new(3, 3);
        assert!(tile.is_double());
        assert!(tile.contains(3));
        assert!(!tile.contains(4));
        assert!(!Tile::new(0, 6).is_double());
    }

    #[test]
    fn test_flip_preserves_identity() {
        let mut tile = Tile::new(1, 4);
        tile.flip();
        assert_eq!((tile.left(), tile.right()), (4, 1));
        assert!(tile.matches(1, 4));
    }

    #[test]
    fn test_try_new_range() {
        assert!(Tile::try_new(6, 0).is_ok());
        assert!(matches!(
            Tile::try_new(7, 0),
            Err(DominoError::InvalidTile { left: 7, right: 0 })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::new(0, 6).to_string(), "[0, 6]");
    }

    #[test]
    #[should_panic(expected = "Tile values")]
    fn test_new_panics_out_of_range() {
        let _ = Tile::new(1, 9);
    }
}
