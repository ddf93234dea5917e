//! # duel-engine
//!
//! Round resolver and effect engine for a two-player, fixed-round card
//! battle.
//!
//! Each round both players commit one card from their hand. The cards'
//! power values (plus any attached modifiers) decide the round, the loser
//! takes the winner's damage off their respect, and card effects fire at
//! fixed points in the round. A match ends on a knockout or after the
//! configured number of rounds.
//!
//! ## Design Principles
//!
//! 1. **Pure Resolution**: `resolve_round` borrows the state and returns a
//!    new one. Identical inputs always give identical outputs.
//!
//! 2. **Closed Effects**: Card effects are a fixed enum. Unknown effect
//!    names are rejected when the catalog loads, never mid-match.
//!
//! 3. **Cheap Snapshots**: Round history is an `im::Vector`, so cloning a
//!    state is O(1) and every resolved state can be kept.
//!
//! ## Modules
//!
//! - `core`: Players, state, round records, configuration, errors, RNG
//! - `cards`: Card definitions and the catalog
//! - `effects`: Effect definitions, attached modifiers, interpreter
//! - `rules`: Round resolver and match outcome policies
//! - `controller`: Stateful match controller and snapshots

pub mod core;
pub mod cards;
pub mod effects;
pub mod rules;
pub mod controller;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, EnergyCost, EngineError, GameRng, GameState, MatchConfig, MatchPhase,
    PlayerId, PlayerMap, PlayerState, RoundResult, RoundWinner, SnapshotError,
};

pub use crate::cards::{Card, CardCatalog, CardId, CardRecord, Faction};

pub use crate::effects::{ActiveEffect, Effect, EffectInterpreter, Modifier, RawEffect};

pub use crate::rules::{
    is_complete, resolve_round, start_match, winner, CumulativeDamage, HighestRespect,
    MatchOutcome, MostRoundsWon, PlayedCard, RoundResolver, WinnerPolicy,
};

pub use crate::controller::{MatchController, MatchSnapshot};
