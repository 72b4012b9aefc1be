//! Zones that hold tiles: the stock, the two hands and the chain.
//!
//! All three are built on one container, `TileCollection`, tagged with a
//! `ZoneKind`. Zone-specific behavior lives in thin wrappers:
//!
//! - `Stock`: full-set construction, shuffle, deal and draw
//! - `Chain`: orientation-aware insertion and open-end bookkeeping
//! - `Hand`: receive and take by position

pub mod collection;
pub mod stock;
pub mod chain;
pub mod hand;

pub use collection::{TileCollection, ZoneKind};
pub use stock::Stock;
pub use chain::Chain;
pub use hand::Hand;
