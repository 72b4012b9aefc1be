//! Ordered tile container shared by the stock, hands and chain.
//!
//! A `TileCollection` owns its tiles. Moving a tile between zones always
//! removes it from the source collection and inserts it into the
//! destination, so a piece is never in two places at once.
//!
//! Indices are 0-based here. The 1-based numbering the player sees is a
//! move-code concern (see `moves::code`).

use serde::{Deserialize, Serialize};

use crate::core::{DominoError, Side};
use crate::tiles::{End, Tile, Weights};

/// Which zone a collection backs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Shuffled draw pile.
    Stock,
    /// Tiles held by one side.
    Hand(Side),
    /// Tiles on the table.
    Chain,
}

/// Ordered sequence of tiles tagged with its zone.
///
/// ```
/// use dominoes::zones::{TileCollection, ZoneKind};
/// use dominoes::tiles::Tile;
///
/// let mut zone = TileCollection::new(ZoneKind::Stock);
/// zone.extend([Tile::new(1, 1), Tile::new(2, 3)]);
/// assert_eq!(zone.highest_double(), Some((0, Tile::new(1, 1))));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCollection {
    kind: ZoneKind,
    tiles: Vec<Tile>,
}

impl TileCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new(kind: ZoneKind) -> Self {
        Self { kind, tiles: Vec::new() }
    }

    /// Create a collection holding `tiles` in order.
    #[must_use]
    pub fn from_tiles(kind: ZoneKind, tiles: Vec<Tile>) -> Self {
        Self { kind, tiles }
    }

    #[must_use]
    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    /// Append a tile at the tail.
    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Append several tiles at the tail, in order.
    pub fn extend(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
    }

    /// Insert a tile at the head or the tail.
    pub fn insert(&mut self, tile: Tile, end: End) {
        match end {
            End::Left => self.tiles.insert(0, tile),
            End::Right => self.tiles.push(tile),
        }
    }

    /// Remove and return the first `n` tiles.
    ///
    /// Fails without touching the collection if fewer than `n` remain.
    pub fn take_front(&mut self, n: usize) -> Result<Vec<Tile>, DominoError> {
        if n > self.tiles.len() {
            return Err(DominoError::InsufficientTiles {
                requested: n,
                available: self.tiles.len(),
            });
        }
        Ok(self.tiles.drain(..n).collect())
    }

    /// Remove and return the tile at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Tile, DominoError> {
        if index >= self.tiles.len() {
            return Err(DominoError::IndexOutOfRange {
                index,
                len: self.tiles.len(),
            });
        }
        Ok(self.tiles.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Tile> {
        self.tiles.get(index).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Tile> {
        self.tiles.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Tile> {
        self.tiles.last().copied()
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
    pub fn as_slice(&self) -> &[Tile] {
        &self.tiles
    }

    /// Index of the piece `(a, b)` in either orientation.
    #[must_use]
    pub fn position_of(&self, a: u8, b: u8) -> Option<usize> {
        self.tiles.iter().position(|t| t.matches(a, b))
    }

    /// The double with the greatest value and its index.
    ///
    /// Ties go to the first occurrence; a full set has no ties anyway.
    #[must_use]
    pub fn highest_double(&self) -> Option<(usize, Tile)> {
        let mut best: Option<(usize, Tile)> = None;
        for (i, &tile) in self.tiles.iter().enumerate() {
            if !tile.is_double() {
                continue;
            }
            match best {
                Some((_, current)) if tile.left() <= current.left() => {}
                _ => best = Some((i, tile)),
            }
        }
        best
    }

    /// End-value frequencies across all held tiles.
    #[must_use]
    pub fn weights(&self) -> Weights {
        self.tiles.iter().collect()
    }

    /// Mutable access for in-place reordering (shuffle).
    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }
}

impl std::fmt::Display for TileCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in &self.tiles {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}
