//! Moves and the integer move-code encoding.
//!
//! A move code is how a side names its move:
//!
//! | code | meaning                                              |
//! |------|------------------------------------------------------|
//! | `0`  | no play; draw from the stock                         |
//! | `k`  | play the tile at 1-based position `k` on the right   |
//! | `-k` | play the tile at 1-based position `k` on the left    |

use serde::{Deserialize, Serialize};

use crate::core::DominoError;
use crate::tiles::End;

/// A decoded move. Hand indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Take a tile from the stock (or pass when it is empty).
    Draw,
    /// Play the hand tile at `index` onto `end` of the chain.
    Play { index: usize, end: End },
}

impl Move {
    /// Decode a move code against a hand of `hand_len` tiles.
    ///
    /// ```
    /// use dominoes::moves::Move;
    /// use dominoes::tiles::End;
    ///
    /// assert_eq!(Move::from_code(-2, 5).unwrap(), Move::Play { index: 1, end: End::Left });
    /// assert_eq!(Move::from_code(0, 5).unwrap(), Move::Draw);
    /// assert!(Move::from_code(6, 5).is_err());
    /// ```
    pub fn from_code(code: i64, hand_len: usize) -> Result<Move, DominoError> {
        if code == 0 {
            return Ok(Move::Draw);
        }
        let position = code.unsigned_abs();
        if position > hand_len as u64 {
            return Err(DominoError::InvalidMoveCode { code, hand_len });
        }
        let end = if code < 0 { End::Left } else { End::Right };
        Ok(Move::Play {
            index: position as usize - 1,
            end,
        })
    }

    /// Encode back to a move code.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Move::Draw => 0,
            Move::Play { index, end: End::Right } => index as i64 + 1,
            Move::Play { index, end: End::Left } => -(index as i64 + 1),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
