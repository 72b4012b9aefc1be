//! Core engine types: sides, RNG, configuration, errors.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Side, SideMap};
pub use rng::GameRng;
pub use config::{MatchConfig, SET_SIZE};
pub use error::DominoError;
