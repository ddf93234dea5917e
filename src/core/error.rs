//! Error types for engine operations.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::CardId;

/// A caller contract violation detected before any state change.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Match already complete")]
    MatchAlreadyComplete,
    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: CardId },
    #[error("{player} needs {required} energy but has {available}")]
    InsufficientEnergy {
        player: PlayerId,
        required: u8,
        available: u8,
    },
    #[error("Unknown effect: {0}")]
    UnknownEffect(String),
    #[error("Invalid parameters for effect {effect}: {reason}")]
    InvalidEffectParams { effect: String, reason: String },
    #[error("{0} not found in catalog")]
    CardNotFound(CardId),
    #[error("Round {round} outside 1..={max_rounds}")]
    InvalidRound { round: u8, max_rounds: u8 },
    #[error("{player}'s hand has {size} cards, at least {required} required")]
    HandTooSmall {
        player: PlayerId,
        size: usize,
        required: usize,
    },
    #[error("Invalid game state: {0}")]
    InvalidState(String),
    #[error("Invalid definition for {card}: {reason}")]
    InvalidCard { card: CardId, reason: String },
    #[error("{0} already registered")]
    DuplicateCard(CardId),
    #[error("Invalid match configuration: {0}")]
    InvalidConfig(String),
}

/// Failure while loading a card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Failure while snapshotting or restoring a match.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Binary snapshot codec failed: {0}")]
    Binary(#[from] bincode::Error),
    #[error("JSON snapshot codec failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
}
