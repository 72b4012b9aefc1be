//! Per-value occurrence counts.
//!
//! The weight of a value is how many tile ends carry it in some set of
//! tiles. A double contributes twice to its value. Across the full set
//! every value has weight 8.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Index};

use super::tile::{Tile, MAX_PIP};

const VALUES: usize = MAX_PIP as usize + 1;

/// Total weight of one value across a complete double-six set.
pub const FULL_WEIGHT: u32 = 8;

/// Occurrence count for each end value `0..=6`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weights {
    counts: [u32; VALUES],
}

impl Weights {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count both ends of a tile.
    pub fn add_tile(&mut self, tile: Tile) {
        self.counts[tile.left() as usize] += 1;
        self.counts[tile.right() as usize] += 1;
    }

    /// Weight of a single value.
    #[must_use]
    pub fn get(&self, value: u8) -> u32 {
        self.counts.get(value as usize).copied().unwrap_or(0)
    }

    /// Sum of the weights of a tile's two ends.
    #[must_use]
    pub fn score(&self, tile: Tile) -> u32 {
        self.get(tile.left()) + self.get(tile.right())
    }
}

impl FromIterator<Tile> for Weights {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut weights = Weights::new();
        for tile in iter {
            weights.add_tile(tile);
        }
        weights
    }
}

impl<'a> FromIterator<&'a Tile> for Weights {
    fn from_iter<I: IntoIterator<Item = &'a Tile>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl AddAssign for Weights {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.counts.iter_mut().zip(rhs.counts) {
            *a += b;
        }
    }
}

impl Add for Weights {
    type Output = Weights;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Index<u8> for Weights {
    type Output = u32;

    fn index(&self, value: u8) -> &Self::Output {
        &self.counts[value as usize]
    }
}
