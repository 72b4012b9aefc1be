//! Computer opponent: frequency-weighted tile choice.
//!
//! The computer counts how often each value appears in its own hand and in
//! the external weight map, scores every playable tile by the combined
//! counts of its two ends, and plays the highest-scoring one. Common values
//! are likely to stay playable, so holding on to rare ones is deferred.

use tracing::debug;

use super::code::Move;
use super::selector::{MoveSelector, TurnView};
use crate::core::DominoError;
use crate::tiles::End;

/// Deterministic weight-based selector.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicSelector;

impl HeuristicSelector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The chosen move for a view. Never fails.
    #[must_use]
    pub fn choose(&self, view: &TurnView<'_>) -> Move {
        let combined = view.hand.weights() + view.external;

        // (index, score, end); strict > keeps the first of equal scores
        let mut best: Option<(usize, u32, End)> = None;
        for (index, &tile) in view.hand.iter().enumerate() {
            let end = match view.ends {
                None => End::Right,
                Some((left, _)) if tile.contains(left) => End::Left,
                Some((_, right)) if tile.contains(right) => End::Right,
                Some(_) => continue,
            };
            let score = combined.score(tile);
            if best.map_or(true, |(_, top, _)| score > top) {
                best = Some((index, score, end));
            }
        }

        match best {
            Some((index, score, end)) => {
                debug!(side = %view.side, index, score, %end, "heuristic picked tile");
                Move::Play { index, end }
            }
            None => {
                debug!(side = %view.side, "heuristic found no playable tile");
                Move::Draw
            }
        }
    }
}

impl MoveSelector for HeuristicSelector {
    fn select_move(&mut self, view: &TurnView<'_>) -> Result<Move, DominoError> {
        Ok(self.choose(view))
    }
}
