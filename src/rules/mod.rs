//! Match rules: round resolution and match outcome.
//!
//! The free functions below are the match-controller surface:
//! `start_match`, `resolve_round`, `is_complete`, and `winner`.
//! They wrap `RoundResolver` for callers that do not keep one around.

pub mod policy;
pub mod resolver;

pub use policy::{
    knockout, winner, CumulativeDamage, HighestRespect, MatchOutcome, MostRoundsWon, WinnerPolicy,
};
pub use resolver::{PlayedCard, RoundResolver};

use crate::cards::{CardCatalog, CardId};
use crate::core::{EngineError, GameState, MatchConfig, RoundResult};

/// Create the opening state of a match.
pub fn start_match(
    catalog: &CardCatalog,
    config: &MatchConfig,
    player1_hand: Vec<CardId>,
    player2_hand: Vec<CardId>,
) -> Result<GameState, EngineError> {
    RoundResolver::new(catalog, config).start_match(player1_hand, player2_hand)
}

/// Resolve one round, returning the next state and its result.
pub fn resolve_round(
    catalog: &CardCatalog,
    config: &MatchConfig,
    state: &GameState,
    play1: PlayedCard,
    play2: PlayedCard,
) -> Result<(GameState, RoundResult), EngineError> {
    RoundResolver::new(catalog, config).resolve(state, play1, play2)
}

/// Terminal check.
#[must_use]
pub fn is_complete(state: &GameState) -> bool {
    state.is_complete()
}
