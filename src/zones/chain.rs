//! The line of tiles on the table.
//!
//! The chain keeps every interior join value-matched: before a tile is
//! inserted it is turned so that its matching value faces the open end it
//! joins. The open ends are the left value of the first tile and the right
//! value of the last tile.

use serde::{Deserialize, Serialize};

use super::collection::{TileCollection, ZoneKind};
use crate::core::DominoError;
use crate::tiles::{End, Tile, Weights};

/// Played tiles, head to tail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    tiles: TileCollection,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: TileCollection::new(ZoneKind::Chain),
        }
    }

    /// Open value at `end`, `None` while the chain is empty.
    #[must_use]
    pub fn open(&self, end: End) -> Option<u8> {
        match end {
            End::Left => self.tiles.first().map(Tile::left),
            End::Right => self.tiles.last().map(Tile::right),
        }
    }

    #[must_use]
    pub fn left_open(&self) -> Option<u8> {
        self.open(End::Left)
    }

    #[must_use]
    pub fn right_open(&self) -> Option<u8> {
        self.open(End::Right)
    }

    /// `(left, right)` open values.
    #[must_use]
    pub fn open_ends(&self) -> Option<(u8, u8)> {
        Some((self.left_open()?, self.right_open()?))
    }

    /// Place `tile` at `end`, turning it to face the open value.
    ///
    /// On an empty chain the tile keeps its orientation. A tile that does
    /// not carry the open value is rejected and the chain is unchanged.
    pub fn play(&mut self, mut tile: Tile, end: End) -> Result<(), DominoError> {
        if let Some(open) = self.open(end) {
            if !tile.contains(open) {
                return Err(DominoError::IllegalMove { tile, end, open });
            }
            let facing = match end {
                End::Left => tile.right(),
                End::Right => tile.left(),
            };
            if facing != open {
                tile.flip();
            }
        }
        self.tiles.insert(tile, end);
        Ok(())
    }

    /// True when every adjacent pair shares its join value.
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.tiles
            .as_slice()
            .windows(2)
            .all(|pair| pair[0].right() == pair[1].left())
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

    #[must_use]
    pub fn tiles(&self) -> &TileCollection {
        &self.tiles
    }

    /// Render the chain, eliding the middle when it is longer than
    /// `2 * preview` tiles.
    #[must_use]
    pub fn render(&self, preview: usize) -> String {
        let tiles = self.tiles.as_slice();
        if tiles.len() <= preview * 2 {
            return self.tiles.to_string();
        }
        let head: String = tiles[..preview].iter().map(Tile::to_string).collect();
        let tail: String = tiles[tiles.len() - preview..].iter().map(Tile::to_string).collect();
        format!("{}...{}", head, tail)
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_of(tiles: &[(u8, u8)]) -> Chain {
        let mut chain = Chain::new();
        for &(a, b) in tiles {
            chain.play(Tile::new(a, b), End::Right).unwrap();
        }
        chain
    }

    #[test]
    fn test_empty_chain_has_no_ends() {
        let chain = Chain::new();
        assert_eq!(chain.open_ends(), None);
        assert_eq!(chain.open(End::Left), None);
    }

    #[test]
    fn test_opening_double() {
        let mut chain = Chain::new();
        chain.play(Tile::new(3, 3), End::Right).unwrap();
        assert_eq!(chain.tiles().as_slice(), &[Tile::new(3, 3)]);
        assert_eq!(chain.open_ends(), Some((3, 3)));
    }

    #[test]
    fn test_first_tile_keeps_orientation() {
        let mut chain = Chain::new();
        chain.play(Tile::new(5, 2), End::Left).unwrap();
        assert_eq!(chain.open_ends(), Some((5, 2)));
    }

    #[test]
    fn test_left_insert_flips_to_face_open_value() {
        let mut chain = chain_of(&[(2, 5)]);
        chain.play(Tile::new(2, 4), End::Left).unwrap();
        assert_eq!(chain.tiles().first(), Some(Tile::new(4, 2)));
        assert_eq!(chain.left_open(), Some(4));
        assert!(chain.is_linked());
    }

    #[test]
    fn test_right_insert_flips_to_face_open_value() {
        let mut chain = chain_of(&[(2, 5)]);
        chain.play(Tile::new(6, 5), End::Right).unwrap();
        assert_eq!(chain.tiles().last(), Some(Tile::new(5, 6)));
        assert_eq!(chain.open_ends(), Some((2, 6)));

        chain.play(Tile::new(6, 1), End::Right).unwrap();
        assert_eq!(chain.tiles().last(), Some(Tile::new(6, 1)));
        assert!(chain.is_linked());
    }

    #[test]
    fn test_rejects_non_matching_tile() {
        let mut chain = chain_of(&[(2, 5)]);
        let err = chain.play(Tile::new(1, 1), End::Left).unwrap_err();
        assert!(matches!(
            err,
            DominoError::IllegalMove { tile, end: End::Left, open: 2 } if tile == Tile::new(1, 1)
        ));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_render_abbreviates_long_chains() {
        let chain = chain_of(&[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2), (2, 3)]);
        assert_eq!(chain.to_string(), "[0, 0][0, 1][1, 1][1, 2][2, 2][2, 3]");

        let chain = chain_of(&[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2), (2, 3), (3, 3)]);
        assert_eq!(chain.to_string(), "[0, 0][0, 1][1, 1]...[2, 2][2, 3][3, 3]");
        assert_eq!(chain.render(1), "[0, 0]...[3, 3]");
    }
}
