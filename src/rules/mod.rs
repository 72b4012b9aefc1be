//! Rules: which moves are legal and when the match is over.
//!
//! The match loop calls into these functions but never interprets tile
//! values itself.

pub mod legality;
pub mod outcome;

pub use legality::{has_legal_move, legal_moves, tile_fits, validate, MoveList};
pub use outcome::{evaluate, DrawReason, MatchStatus};
