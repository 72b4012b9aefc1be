//! Moves and the selectors that choose them.
//!
//! - `Move`: a decoded move code (draw, or play a tile onto an end)
//! - `MoveSelector`: the one-method capability the match depends on
//! - `HeuristicSelector`: the computer's weight-based choice
//! - `InteractiveSelector`: move codes typed by a person

pub mod code;
pub mod selector;
pub mod heuristic;
pub mod interactive;

pub use code::Move;
pub use selector::{MoveSelector, TurnView};
pub use heuristic::HeuristicSelector;
pub use interactive::InteractiveSelector;
