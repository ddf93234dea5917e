//! Core engine types: players, match state, round records, configuration,
//! errors, and deterministic RNG.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod round;
pub mod state;

pub use config::{EnergyCost, MatchConfig, ENERGY_LIMIT, RESPECT_LIMIT, ROUND_LIMIT};
pub use error::{CatalogError, EngineError, SnapshotError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use round::{RoundResult, RoundWinner};
pub use state::{GameState, MatchPhase, PlayerState};
