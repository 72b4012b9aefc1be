//! Move legality against the chain's open ends.

use smallvec::SmallVec;

use crate::core::DominoError;
use crate::moves::Move;
use crate::tiles::{End, Tile};
use crate::zones::Hand;

/// Legal moves for a typical hand fit inline.
pub type MoveList = SmallVec<[Move; 8]>;

fn open_value(ends: Option<(u8, u8)>, end: End) -> Option<u8> {
    ends.map(|(left, right)| match end {
        End::Left => left,
        End::Right => right,
    })
}

/// Whether `tile` may join `end`. Every tile fits an empty chain.
#[must_use]
pub fn tile_fits(tile: Tile, ends: Option<(u8, u8)>, end: End) -> bool {
    open_value(ends, end).map_or(true, |open| tile.contains(open))
}

/// Check a move against a hand and the chain's open ends.
///
/// A draw is always allowed; the match turns it into a pass when the
/// stock is empty.
pub fn validate(hand: &Hand, ends: Option<(u8, u8)>, mv: Move) -> Result<(), DominoError> {
    let Move::Play { index, end } = mv else {
        return Ok(());
    };
    let tile = hand.get(index).ok_or(DominoError::IndexOutOfRange {
        index,
        len: hand.len(),
    })?;
    match open_value(ends, end) {
        Some(open) if !tile.contains(open) => Err(DominoError::IllegalMove { tile, end, open }),
        _ => Ok(()),
    }
}

/// Every legal play for the hand, left-end plays first per tile.
#[must_use]
pub fn legal_moves(hand: &Hand, ends: Option<(u8, u8)>) -> MoveList {
    let mut moves = MoveList::new();
    for (index, &tile) in hand.iter().enumerate() {
        for end in [End::Left, End::Right] {
            if tile_fits(tile, ends, end) {
                moves.push(Move::Play { index, end });
            }
        }
    }
    moves
}

#[must_use]
pub fn has_legal_move(hand: &Hand, ends: Option<(u8, u8)>) -> bool {
    hand.iter()
        .any(|&tile| tile_fits(tile, ends, End::Left) || tile_fits(tile, ends, End::Right))
}
