//! # dominoes
//!
//! A two-player Dominoes engine: a person against a simple heuristic
//! computer, on a double-six set.
//!
//! ## Design Principles
//!
//! 1. **One container**: the stock, both hands and the chain are the same
//!    `TileCollection` tagged with a `ZoneKind`. A tile moves by being
//!    removed from one and inserted into another, never copied.
//!
//! 2. **Selectors at the seam**: the match asks a `MoveSelector` for each
//!    move and does not know whether a person or a heuristic answers.
//!
//! 3. **Explicit randomness**: every shuffle draws from a `GameRng` passed
//!    in by the caller, so a seed reproduces a whole match.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration, errors
//! - `tiles`: tiles, end values and weights
//! - `zones`: stock, hands and chain
//! - `moves`: move codes and selectors
//! - `rules`: legality and termination
//! - `game`: the match state machine and status snapshots
//!
//! ## Example
//!
//! ```
//! use dominoes::{GameRng, HeuristicSelector, Match, MatchConfig};
//!
//! let mut rng = GameRng::new(42);
//! let mut game = Match::with_rng(MatchConfig::default(), &mut rng).unwrap();
//! let status = game
//!     .run(&mut HeuristicSelector::new(), &mut HeuristicSelector::new())
//!     .unwrap();
//! assert!(status.is_over());
//! ```

pub mod core;
pub mod tiles;
pub mod zones;
pub mod moves;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{DominoError, GameRng, MatchConfig, Side, SideMap};

pub use crate::tiles::{End, Tile, Weights};

pub use crate::zones::{Chain, Hand, Stock, TileCollection, ZoneKind};

pub use crate::moves::{HeuristicSelector, InteractiveSelector, Move, MoveSelector, TurnView};

pub use crate::rules::{DrawReason, MatchStatus};

pub use crate::game::{Match, StatusSnapshot, TurnEvent};
