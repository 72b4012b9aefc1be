//! The shuffled draw pile.

use serde::{Deserialize, Serialize};

use super::collection::{TileCollection, ZoneKind};
use crate::core::{DominoError, GameRng};
use crate::tiles::{Tile, MAX_PIP};

/// Draw pile. Only shrinks after construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    tiles: TileCollection,
}

impl Stock {
    /// The 28 tiles of a double-six set in canonical order
    /// (`[0, 0], [0, 1], ... [6, 6]`).
    #[must_use]
    pub fn full_set() -> Vec<Tile> {
        (0..=MAX_PIP)
            .flat_map(|a| (a..=MAX_PIP).map(move |b| Tile::new(a, b)))
            .collect()
    }

    /// A full set in uniformly random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut stock = Self::from_tiles(Self::full_set());
        rng.shuffle(stock.tiles.tiles_mut());
        stock
    }

    /// A stock with a fixed order, top of the pile first.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self {
            tiles: TileCollection::from_tiles(ZoneKind::Stock, tiles),
        }
    }

    /// Take `n` tiles from the top for a hand.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Tile>, DominoError> {
        self.tiles.take_front(n)
    }

    /// Take the top tile, or `None` when the pile is empty.
    pub fn draw(&mut self) -> Option<Tile> {
        if self.tiles.is_empty() {
            return None;
        }
        self.tiles.remove_at(0).ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn tiles(&self) -> &TileCollection {
        &self.tiles
    }
}
