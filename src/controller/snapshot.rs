//! Serializable match snapshots.
//!
//! A snapshot pairs the state with the rules it was resolved under, so a
//! transport or storage layer can restore a match and keep resolving it
//! with identical results. Binary snapshots use `bincode`; JSON snapshots
//! are for inspection and interop.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, MatchConfig, SnapshotError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub config: MatchConfig,
    pub state: GameState,
}

impl MatchSnapshot {
    /// Encode as compact binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from binary and check invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON and check invariants.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        self.config.validate()?;
        self.state.validate(&self.config)?;
        Ok(())
    }
}
