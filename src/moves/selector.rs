//! The move-selection capability.

use crate::core::{DominoError, Side};
use crate::tiles::Weights;
use crate::zones::Hand;

use super::code::Move;

/// What a side gets to see when choosing a move.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    /// Side choosing the move.
    pub side: Side,
    /// The side's own tiles.
    pub hand: &'a Hand,
    /// `(left, right)` open values, `None` on an empty chain.
    pub ends: Option<(u8, u8)>,
    /// Value frequencies visible outside the hand (the chain's tiles).
    pub external: Weights,
}

/// Something that picks a move for one side.
///
/// The match only talks to this trait; it does not know whether a person
/// or a heuristic is behind it. Implementations return a move that is
/// legal for `view`, or an error when they cannot produce one at all
/// (e.g. the input closed).
pub trait MoveSelector {
    fn select_move(&mut self, view: &TurnView<'_>) -> Result<Move, DominoError>;
}

impl<S: MoveSelector + ?Sized> MoveSelector for &mut S {
    fn select_move(&mut self, view: &TurnView<'_>) -> Result<Move, DominoError> {
        (**self).select_move(view)
    }
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn select_move(&mut self, view: &TurnView<'_>) -> Result<Move, DominoError> {
        (**self).select_move(view)
    }
}
