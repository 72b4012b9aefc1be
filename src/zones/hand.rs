//! Tiles held by one side.

use serde::{Deserialize, Serialize};

use super::collection::{TileCollection, ZoneKind};
use crate::core::{DominoError, Side};
use crate::tiles::{Tile, Weights};

/// A side's unplayed tiles, in the order they were received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: TileCollection,
}

impl Hand {
    #[must_use]
    pub fn new(owner: Side) -> Self {
        Self {
            tiles: TileCollection::new(ZoneKind::Hand(owner)),
        }
    }

    #[must_use]
    pub fn from_tiles(owner: Side, tiles: Vec<Tile>) -> Self {
        Self {
            tiles: TileCollection::from_tiles(ZoneKind::Hand(owner), tiles),
        }
    }

    #[must_use]
    pub fn owner(&self) -> Option<Side> {
        match self.tiles.kind() {
            ZoneKind::Hand(side) => Some(side),
            _ => None,
        }
    }

    /// Add a tile (dealt or drawn) at the end of the hand.
    pub fn receive(&mut self, tile: Tile) {
        self.tiles.add(tile);
    }

    pub fn receive_all(&mut self, tiles: Vec<Tile>) {
        self.tiles.extend(tiles);
    }

    /// Remove the tile at 0-based `index` for play.
    pub fn take(&mut self, index: usize) -> Result<Tile, DominoError> {
        self.tiles.remove_at(index)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index)
    }

    #[must_use]
    pub fn highest_double(&self) -> Option<(usize, Tile)> {
        self.tiles.highest_double()
    }

    #[must_use]
    pub fn weights(&self) -> Weights {
        self.tiles.weights()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    #[must_use]
    pub fn tiles(&self) -> &TileCollection {
        &self.tiles
    }
}

impl std::fmt::Display for Hand {
    /// One tile per line, numbered from 1.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, tile) in self.tiles.iter().enumerate() {
            writeln!(f, "{}:{}", i + 1, tile)?;
        }
        Ok(())
    }
}
