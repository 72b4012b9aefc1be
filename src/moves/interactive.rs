//! Human player: move codes read from a text source.
//!
//! Each line is parsed as a move code. Bad input never changes any state;
//! the selector reports the problem and reads the next line, for as long
//! as the source keeps producing lines.

use std::io::{BufRead, Write};

use tracing::debug;

use super::code::Move;
use super::selector::{MoveSelector, TurnView};
use crate::core::DominoError;
use crate::rules;

pub const INVALID_INPUT: &str = "Invalid input. Please try again.";
pub const ILLEGAL_MOVE: &str = "Illegal move. Please try again.";

/// Reads move codes line by line from `input`, writing rejections to
/// `output`.
#[derive(Debug)]
pub struct InteractiveSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the selector, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, DominoError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(DominoError::InputClosed);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> MoveSelector for InteractiveSelector<R, W> {
    fn select_move(&mut self, view: &TurnView<'_>) -> Result<Move, DominoError> {
        loop {
            let line = self.read_line()?;

            let Ok(code) = line.trim().parse::<i64>() else {
                debug!(side = %view.side, input = line.trim(), "move code is not a number");
                writeln!(self.output, "{}", INVALID_INPUT)?;
                continue;
            };
            let mv = match Move::from_code(code, view.hand.len()) {
                Ok(mv) => mv,
                Err(err) => {
                    debug!(side = %view.side, %err, "rejected move code");
                    writeln!(self.output, "{}", INVALID_INPUT)?;
                    continue;
                }
            };

            match rules::validate(view.hand, view.ends, mv) {
                Ok(()) => return Ok(mv),
                Err(err) => {
                    debug!(side = %view.side, %err, "rejected illegal move");
                    writeln!(self.output, "{}", ILLEGAL_MOVE)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;
    use crate::tiles::{End, Tile, Weights};
    use crate::zones::Hand;
    use std::io::Cursor;

    fn run(script: &str, tiles: &[(u8, u8)], ends: (u8, u8)) -> (Result<Move, DominoError>, String) {
        let hand = Hand::from_tiles(
            Side::Player,
            tiles.iter().map(|&(a, b)| Tile::new(a, b)).collect(),
        );
        let view = TurnView {
            side: Side::Player,
            hand: &hand,
            ends: Some(ends),
            external: Weights::new(),
        };
        let mut selector = InteractiveSelector::new(Cursor::new(script.to_string()), Vec::new());
        let result = selector.select_move(&view);
        let output = String::from_utf8(selector.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_accepts_legal_left_play() {
        let (result, output) = run("-1\n", &[(2, 4)], (2, 5));
        assert_eq!(result.unwrap(), Move::Play { index: 0, end: End::Left });
        assert!(output.is_empty());
    }

    #[test]
    fn test_reprompts_on_illegal_move() {
        let (result, output) = run("-1\n0\n", &[(1, 1)], (2, 5));
        assert_eq!(result.unwrap(), Move::Draw);
        assert_eq!(output, format!("{}\n", ILLEGAL_MOVE));
    }

    #[test]
    fn test_reprompts_on_garbage_and_range() {
        let (result, output) = run("abc\n9\n\n-2\n", &[(1, 1), (5, 3)], (2, 5));
        assert!(matches!(result, Err(DominoError::InputClosed)));
        assert_eq!(
            output,
            format!("{0}\n{0}\n{0}\n{1}\n", INVALID_INPUT, ILLEGAL_MOVE)
        );
    }

    #[test]
    fn test_right_play_after_rejection() {
        let (result, _) = run("-2\n 2 \n", &[(1, 1), (5, 3)], (2, 5));
        assert_eq!(result.unwrap(), Move::Play { index: 1, end: End::Right });
    }

    #[test]
    fn test_closed_input() {
        let (result, _) = run("", &[(1, 1)], (2, 5));
        assert!(matches!(result, Err(DominoError::InputClosed)));
    }
}
