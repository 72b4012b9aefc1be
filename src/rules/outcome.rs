//! Match status and termination detection.

use serde::{Deserialize, Serialize};

use super::legality::has_legal_move;
use crate::core::{Side, SideMap};
use crate::tiles::FULL_WEIGHT;
use crate::zones::{Chain, Hand, Stock};

/// Why a match ended without a winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawReason {
    /// Both open values have all 8 occurrences in the chain, so no tile
    /// anywhere can join either end again.
    EndsExhausted,
    /// Stock is empty and neither hand holds a playable tile.
    Blocked,
}

/// Where a match stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    Won(Side),
    Draw(DrawReason),
}

impl MatchStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, side: Side) -> bool {
        self == MatchStatus::Won(side)
    }
}

/// Evaluate the table after a move.
///
/// An empty hand wins. Otherwise the match is drawn when every occurrence
/// of both open values already lies in the chain, or when the stock is
/// gone and nobody can play.
#[must_use]
pub fn evaluate(chain: &Chain, hands: &SideMap<Hand>, stock: &Stock) -> MatchStatus {
    for (side, hand) in hands.iter() {
        if hand.is_empty() {
            return MatchStatus::Won(side);
        }
    }

    let Some((left, right)) = chain.open_ends() else {
        return MatchStatus::InProgress;
    };

    let placed = chain.weights();
    if placed[left] == FULL_WEIGHT && placed[right] == FULL_WEIGHT {
        return MatchStatus::Draw(DrawReason::EndsExhausted);
    }

    let ends = Some((left, right));
    if stock.is_empty() && hands.values().all(|hand| !has_legal_move(hand, ends)) {
        return MatchStatus::Draw(DrawReason::Blocked);
    }

    MatchStatus::InProgress
}
