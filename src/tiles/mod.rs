//! Tiles and per-value weights.
//!
//! - `Tile`: a domino with a mutable orientation
//! - `Weights`: how often each end value occurs in a set of tiles
//! - `End`: one of the two open extremities of the chain

pub mod tile;
pub mod weights;

pub use tile::{Tile, MAX_PIP};
pub use weights::{Weights, FULL_WEIGHT};

use serde::{Deserialize, Serialize};

/// An extremity of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum End {
    /// Head of the chain; open value is the first tile's left end.
    Left,
    /// Tail of the chain; open value is the last tile's right end.
    Right,
}

impl End {
    pub fn as_str(self) -> &'static str {
        match self {
            End::Left => "left",
            End::Right => "right",
        }
    }
}

impl std::fmt::Display for End {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
