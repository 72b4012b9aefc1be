//! Error type shared by every fallible engine operation.

use super::player::Side;
use crate::tiles::{End, Tile};

/// Errors produced by the engine.
///
/// None of these are fatal to a match: callers either re-prompt, redeal or
/// report and stop.
#[derive(thiserror::Error, Debug)]
pub enum DominoError {
    /// A tile end value outside 0..=6.
    #[error("tile [{left}, {right}] has a value outside 0..=6")]
    InvalidTile { left: u8, right: u8 },
    /// Positional access past the end of a collection.
    #[error("index {index} out of range for {len} tiles")]
    IndexOutOfRange { index: usize, len: usize },
    /// More tiles requested than the collection holds.
    #[error("requested {requested} tiles but only {available} available")]
    InsufficientTiles { requested: usize, available: usize },
    /// A move code outside `-len..=len`.
    #[error("move code {code} outside -{hand_len}..={hand_len}")]
    InvalidMoveCode { code: i64, hand_len: usize },
    /// The tile does not touch the requested open end.
    #[error("{tile} cannot join the {end} end showing {open}")]
    IllegalMove { tile: Tile, end: End, open: u8 },
    #[error("the match is already over")]
    MatchOver,
    #[error("it is not the {0}'s turn")]
    NotYourTurn(Side),
    /// The interactive input source ended.
    #[error("move input closed")]
    InputClosed,
    #[error("prompt i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// Setup could not find a dealable hand.
    #[error("no double dealt after {0} reshuffles")]
    RedealLimit(u32),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
