//! The match state machine.
//!
//! ```text
//! SETUP -> IN_PROGRESS -> { WON(player), WON(computer), DRAW }
//! ```
//!
//! Setup deals both hands from a fresh shuffled stock and looks for the
//! highest double. The side holding it opens the chain with that double
//! and the other side moves first. A deal with no double anywhere is
//! thrown away and redone from scratch.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::snapshot::StatusSnapshot;
use crate::core::{DominoError, GameRng, MatchConfig, Side, SideMap};
use crate::moves::{Move, MoveSelector, TurnView};
use crate::rules::{self, MatchStatus};
use crate::tiles::{End, Tile};
use crate::zones::{Chain, Hand, Stock};

/// What a single applied move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// A tile went from hand to chain (orientation as placed).
    Played { side: Side, tile: Tile, end: End },
    /// A tile went from stock to hand.
    Drew { side: Side, tile: Tile },
    /// A draw was requested but the stock was empty.
    Passed { side: Side },
}

/// One game of dominoes between the player and the computer.
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    stock: Stock,
    hands: SideMap<Hand>,
    chain: Chain,
    current: Side,
    status: MatchStatus,
    turns: u32,
    redeals: u32,
}

impl Match {
    /// Set up a match, seeding from the config or from the OS.
    pub fn new(config: MatchConfig) -> Result<Self, DominoError> {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        info!(seed = rng.seed(), "starting match");
        Self::with_rng(config, &mut rng)
    }

    /// Set up a match drawing every shuffle from `rng`.
    pub fn with_rng(config: MatchConfig, rng: &mut GameRng) -> Result<Self, DominoError> {
        config.validate()?;
        for redeals in 0..=config.max_redeals {
            if let Some(mut game) = Self::deal(&config, rng)? {
                game.redeals = redeals;
                return Ok(game);
            }
            info!(attempt = redeals + 1, "no double dealt, reshuffling");
        }
        Err(DominoError::RedealLimit(config.max_redeals))
    }

    /// One deal attempt. `Ok(None)` when neither hand holds a double.
    fn deal(config: &MatchConfig, rng: &mut GameRng) -> Result<Option<Self>, DominoError> {
        let mut stock = Stock::shuffled(rng);
        let mut hands = SideMap::new(Hand::new);
        for side in Side::ALL {
            hands[side].receive_all(stock.deal(config.hand_size)?);
        }

        let (leader, index) = match (
            hands[Side::Player].highest_double(),
            hands[Side::Computer].highest_double(),
        ) {
            (None, None) => return Ok(None),
            (Some((i, _)), None) => (Side::Player, i),
            (None, Some((i, _))) => (Side::Computer, i),
            (Some((pi, p)), Some((ci, c))) => {
                if p.left() > c.left() {
                    (Side::Player, pi)
                } else {
                    (Side::Computer, ci)
                }
            }
        };

        let opening = hands[leader].take(index)?;
        let mut chain = Chain::new();
        chain.play(opening, End::Right)?;
        debug!(%leader, %opening, "opening double placed");

        Ok(Some(Self {
            config: config.clone(),
            stock,
            hands,
            chain,
            current: leader.opponent(),
            status: MatchStatus::InProgress,
            turns: 0,
            redeals: 0,
        }))
    }

    /// Build a match from an explicit position, with `current` to move.
    ///
    /// Used to resume from a known table; no dealing takes place.
    #[must_use]
    pub fn from_parts(
        config: MatchConfig,
        stock: Stock,
        hands: SideMap<Hand>,
        chain: Chain,
        current: Side,
    ) -> Self {
        Self {
            config,
            stock,
            hands,
            chain,
            current,
            status: MatchStatus::InProgress,
            turns: 0,
            redeals: 0,
        }
    }

    // === Read-only accessors ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Side to move next (or the side that made the final move).
    #[must_use]
    pub fn current(&self) -> Side {
        self.current
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Moves applied so far, draws and passes included.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Deals thrown away during setup.
    #[must_use]
    pub fn redeals(&self) -> u32 {
        self.redeals
    }

    /// Tiles across stock, hands and chain. Always the full set.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.stock.len() + self.hands.values().map(Hand::len).sum::<usize>() + self.chain.len()
    }

    /// What the side to move gets to see.
    #[must_use]
    pub fn turn_view(&self) -> TurnView<'_> {
        TurnView {
            side: self.current,
            hand: &self.hands[self.current],
            ends: self.chain.open_ends(),
            external: self.chain.weights(),
        }
    }

    #[must_use]
    pub fn snapshot(&self, viewer: Side) -> StatusSnapshot {
        StatusSnapshot::capture(self, viewer)
    }

    // === Turn execution ===

    /// Apply a move for `side`, rejecting it if it is not their turn.
    pub fn submit(&mut self, side: Side, mv: Move) -> Result<TurnEvent, DominoError> {
        if side != self.current {
            return Err(DominoError::NotYourTurn(side));
        }
        self.apply_move(mv)
    }

    /// Apply a move for the side to move.
    ///
    /// Either the move applies completely and the turn advances, or an
    /// error is returned and nothing changed.
    pub fn apply_move(&mut self, mv: Move) -> Result<TurnEvent, DominoError> {
        if self.status.is_over() {
            return Err(DominoError::MatchOver);
        }
        let side = self.current;

        let event = match mv {
            Move::Draw => match self.stock.draw() {
                Some(tile) => {
                    self.hands[side].receive(tile);
                    TurnEvent::Drew { side, tile }
                }
                None => TurnEvent::Passed { side },
            },
            Move::Play { index, end } => {
                rules::validate(&self.hands[side], self.chain.open_ends(), mv)?;
                let tile = self.hands[side].take(index)?;
                self.chain.play(tile, end)?;
                let placed = match end {
                    End::Left => self.chain.tiles().first(),
                    End::Right => self.chain.tiles().last(),
                }
                .unwrap_or(tile);
                TurnEvent::Played { side, tile: placed, end }
            }
        };

        self.turns += 1;
        self.status = rules::evaluate(&self.chain, &self.hands, &self.stock);
        debug!(turn = self.turns, ?event, status = ?self.status, "move applied");

        if self.status.is_over() {
            info!(status = ?self.status, turns = self.turns, "match over");
        } else {
            self.current = side.opponent();
        }
        Ok(event)
    }

    /// Ask `selector` for the current side's move and apply it.
    pub fn play_turn(&mut self, selector: &mut dyn MoveSelector) -> Result<TurnEvent, DominoError> {
        let mv = selector.select_move(&self.turn_view())?;
        self.apply_move(mv)
    }

    /// Play until the match ends.
    pub fn run(
        &mut self,
        player: &mut dyn MoveSelector,
        computer: &mut dyn MoveSelector,
    ) -> Result<MatchStatus, DominoError> {
        while !self.status.is_over() {
            match self.current {
                Side::Player => self.play_turn(player)?,
                Side::Computer => self.play_turn(computer)?,
            };
        }
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::HeuristicSelector;
    use crate::rules::DrawReason;

    fn tiles(list: &[(u8, u8)]) -> Vec<Tile> {
        list.iter().map(|&(a, b)| Tile::new(a, b)).collect()
    }

    fn position(
        player: &[(u8, u8)],
        computer: &[(u8, u8)],
        chain: &[(u8, u8)],
        stock: &[(u8, u8)],
        current: Side,
    ) -> Match {
        let mut c = Chain::new();
        for tile in tiles(chain) {
            c.play(tile, End::Right).unwrap();
        }
        let hands = SideMap::new(|side| match side {
            Side::Player => Hand::from_tiles(side, tiles(player)),
            Side::Computer => Hand::from_tiles(side, tiles(computer)),
        });
        Match::from_parts(MatchConfig::default(), Stock::from_tiles(tiles(stock)), hands, c, current)
    }

    #[test]
    fn test_setup_deals_and_opens() {
        let mut rng = GameRng::new(42);
        let game = Match::with_rng(MatchConfig::default(), &mut rng).unwrap();

        assert_eq!(game.tile_count(), 28);
        assert_eq!(game.chain().len(), 1);
        assert_eq!(game.stock().len(), 14);
        let opening = game.chain().tiles().first().unwrap();
        assert!(opening.is_double());

        // The side that opened holds one tile fewer and does not move first.
        let leader = game.current().opponent();
        assert_eq!(game.hand(leader).len(), 6);
        assert_eq!(game.hand(game.current()).len(), 7);
        assert_eq!(game.status(), MatchStatus::InProgress);
    }

    #[test]
    fn test_opening_double_is_highest_dealt() {
        for seed in 0..20 {
            let game = Match::with_rng(MatchConfig::default(), &mut GameRng::new(seed)).unwrap();
            let opening = game.chain().tiles().first().unwrap();
            for side in Side::ALL {
                if let Some((_, d)) = game.hand(side).highest_double() {
                    assert!(d.left() < opening.left(), "seed {}: {} beats {}", seed, d, opening);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = Match::new(MatchConfig::default().with_seed(7)).unwrap();
        let b = Match::new(MatchConfig::default().with_seed(7)).unwrap();
        assert_eq!(a.hand(Side::Player), b.hand(Side::Player));
        assert_eq!(a.stock(), b.stock());
        assert_eq!(a.chain(), b.chain());
    }

    #[test]
    fn test_redeal_limit() {
        // One-tile hands rarely hold a double; with no retries allowed some
        // seed must fail.
        let config = MatchConfig::default().with_hand_size(1).with_max_redeals(0);
        let failed = (0..50).any(|seed| {
            matches!(
                Match::with_rng(config.clone(), &mut GameRng::new(seed)),
                Err(DominoError::RedealLimit(0))
            )
        });
        assert!(failed);
    }

    #[test]
    fn test_deal_without_double_is_redone() {
        // Two-tile hands often miss every double, forcing a reshuffle.
        let config = MatchConfig::default().with_hand_size(2);
        let game = (0..50)
            .map(|seed| Match::with_rng(config.clone(), &mut GameRng::new(seed)).unwrap())
            .find(|game| game.redeals() > 0)
            .expect("some seed needs a redeal");

        assert_eq!(game.tile_count(), 28);
        assert_eq!(game.chain().len(), 1);
        assert!(game.chain().tiles().first().unwrap().is_double());
        assert_eq!(game.stock().len(), 28 - 4);

        let leader = game.current().opponent();
        assert_eq!(game.hand(leader).len(), 1);
        assert_eq!(game.hand(game.current()).len(), 2);
        assert_eq!(game.status(), MatchStatus::InProgress);
    }

    #[test]
    fn test_play_moves_tile_to_chain() {
        let mut game = position(&[(2, 4), (6, 6)], &[(0, 1)], &[(2, 5)], &[(3, 3)], Side::Player);

        let event = game.apply_move(Move::Play { index: 0, end: End::Left }).unwrap();

        assert_eq!(
            event,
            TurnEvent::Played { side: Side::Player, tile: Tile::new(4, 2), end: End::Left }
        );
        assert_eq!(game.chain().open_ends(), Some((4, 5)));
        assert_eq!(game.hand(Side::Player).len(), 1);
        assert_eq!(game.current(), Side::Computer);
    }

    #[test]
    fn test_illegal_play_changes_nothing() {
        let mut game = position(&[(1, 1)], &[(0, 1)], &[(2, 5)], &[(3, 3)], Side::Player);
        let before = game.snapshot(Side::Player);

        let err = game.apply_move(Move::Play { index: 0, end: End::Left }).unwrap_err();

        assert!(matches!(err, DominoError::IllegalMove { .. }));
        assert_eq!(game.snapshot(Side::Player), before);
        assert_eq!(game.current(), Side::Player);
        assert_eq!(game.turns(), 0);
    }

    #[test]
    fn test_draw_moves_tile_from_stock() {
        let mut game = position(&[(1, 1)], &[(0, 1)], &[(2, 5)], &[(3, 3), (4, 4)], Side::Player);

        let event = game.apply_move(Move::Draw).unwrap();

        assert_eq!(event, TurnEvent::Drew { side: Side::Player, tile: Tile::new(3, 3) });
        assert_eq!(game.stock().len(), 1);
        assert_eq!(game.hand(Side::Player).len(), 2);
        assert_eq!(game.current(), Side::Computer);
    }

    #[test]
    fn test_draw_on_empty_stock_passes() {
        let mut game = position(&[(1, 1)], &[(5, 0)], &[(2, 5)], &[], Side::Player);

        let event = game.apply_move(Move::Draw).unwrap();

        assert_eq!(event, TurnEvent::Passed { side: Side::Player });
        assert_eq!(game.hand(Side::Player).len(), 1);
        assert_eq!(game.current(), Side::Computer);
        assert_eq!(game.status(), MatchStatus::InProgress);
    }

    #[test]
    fn test_emptying_hand_wins() {
        let mut game = position(&[(0, 1)], &[(5, 6), (6, 6)], &[(2, 5)], &[(3, 3)], Side::Computer);

        game.apply_move(Move::Play { index: 0, end: End::Right }).unwrap();
        assert_eq!(game.status(), MatchStatus::InProgress);
        assert_eq!(game.current(), Side::Player);

        game.apply_move(Move::Draw).unwrap();
        game.apply_move(Move::Play { index: 0, end: End::Right }).unwrap();

        assert_eq!(game.status(), MatchStatus::Won(Side::Computer));
        assert_eq!(game.current(), Side::Computer);
        assert!(matches!(game.apply_move(Move::Draw), Err(DominoError::MatchOver)));
    }

    #[test]
    fn test_blocked_table_draws() {
        let mut game = position(&[(1, 1), (3, 4)], &[(0, 3)], &[(2, 5)], &[], Side::Player);
        game.apply_move(Move::Draw).unwrap();
        assert_eq!(game.status(), MatchStatus::Draw(DrawReason::Blocked));
    }

    #[test]
    fn test_submit_checks_turn() {
        let mut game = position(&[(2, 4)], &[(0, 1)], &[(2, 5)], &[(3, 3)], Side::Player);
        assert!(matches!(
            game.submit(Side::Computer, Move::Draw),
            Err(DominoError::NotYourTurn(Side::Computer))
        ));
        assert!(game.submit(Side::Player, Move::Draw).is_ok());
    }

    #[test]
    fn test_heuristic_self_play_terminates() {
        for seed in 0..30 {
            let mut game = Match::with_rng(MatchConfig::default(), &mut GameRng::new(seed)).unwrap();
            let status = game
                .run(&mut HeuristicSelector::new(), &mut HeuristicSelector::new())
                .unwrap();
            assert!(status.is_over());
            assert_eq!(game.tile_count(), 28);
            assert!(game.chain().is_linked());
        }
    }
}
