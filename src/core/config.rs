//! Match configuration parameters.

use serde::{Deserialize, Serialize};

use super::error::DominoError;

/// Number of tiles in a double-six set.
pub const SET_SIZE: usize = 28;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Random seed for the stock shuffle.
    /// `None` draws a seed from the OS.
    pub seed: Option<u64>,

    /// Tiles dealt to each side at setup.
    pub hand_size: usize,

    /// Tiles shown on each side of an abbreviated chain.
    /// Chains longer than twice this are shown as `first ... last`.
    pub chain_preview: usize,

    /// Maximum number of reshuffles when neither hand holds a double.
    pub max_redeals: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hand_size: 7,
            chain_preview: 3,
            max_redeals: 1000,
        }
    }
}

impl MatchConfig {
    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom hand size.
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Create a new config with a custom chain preview width.
    pub fn with_chain_preview(mut self, preview: usize) -> Self {
        self.chain_preview = preview;
        self
    }

    /// Create a new config with a custom redeal limit.
    pub fn with_max_redeals(mut self, max_redeals: u32) -> Self {
        self.max_redeals = max_redeals;
        self
    }

    /// Check that both hands can be dealt from one set.
    pub fn validate(&self) -> Result<(), DominoError> {
        if self.hand_size == 0 || self.hand_size * 2 > SET_SIZE {
            return Err(DominoError::InvalidConfig(format!(
                "hand_size must be in 1..={}, got {}",
                SET_SIZE / 2,
                self.hand_size
            )));
        }
        if self.chain_preview == 0 {
            return Err(DominoError::InvalidConfig(
                "chain_preview must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
