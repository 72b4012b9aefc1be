//! Read-only status views for rendering.

use serde::{Deserialize, Serialize};

use super::engine::Match;
use crate::core::Side;
use crate::rules::MatchStatus;
use crate::tiles::Tile;

/// Everything one side is allowed to see, captured at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub viewer: Side,
    pub stock_size: usize,
    pub opponent_hand_size: usize,
    /// Full chain, head to tail.
    pub chain: Vec<Tile>,
    /// Chain as displayed, abbreviated when long.
    pub chain_text: String,
    /// Viewer's own tiles; position `i` is move code `i + 1`.
    pub hand: Vec<Tile>,
    pub current: Side,
    pub status: MatchStatus,
    pub turns: u32,
}

impl StatusSnapshot {
    pub(crate) fn capture(game: &Match, viewer: Side) -> Self {
        Self {
            viewer,
            stock_size: game.stock().len(),
            opponent_hand_size: game.hand(viewer.opponent()).len(),
            chain: game.chain().tiles().as_slice().to_vec(),
            chain_text: game.chain().render(game.config().chain_preview),
            hand: game.hand(viewer).iter().copied().collect(),
            current: game.current(),
            status: game.status(),
            turns: game.turns(),
        }
    }
}
