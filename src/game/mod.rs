//! Match orchestration: setup, turn order, move application, termination.

mod engine;
mod snapshot;

pub use engine::{Match, TurnEvent};
pub use snapshot::StatusSnapshot;
