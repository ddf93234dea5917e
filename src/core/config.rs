//! Match configuration.
//!
//! `MatchConfig` carries the numeric rules of a duel: round limit,
//! resource bounds, starting resources, and the energy cost model.
//! The defaults are the standard four-round, twelve-respect match.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Most rounds a match may run.
pub const ROUND_LIMIT: u8 = 4;

/// Highest respect any configuration may allow.
pub const RESPECT_LIMIT: u8 = 12;

/// Highest energy any configuration may allow.
pub const ENERGY_LIMIT: u8 = 12;

/// How playing a card consumes energy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyCost {
    /// Cards are free; energy only moves through effects.
    #[default]
    Free,
    /// Playing a card costs energy equal to its power.
    Power,
}

/// Numeric rules for a match.
///
/// ## Example
///
/// ```
/// use duel_engine::core::{EnergyCost, MatchConfig};
///
/// let config = MatchConfig::default().with_energy_cost(EnergyCost::Power);
/// assert_eq!(config.max_rounds, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfig {
    /// Number of rounds in a match.
    pub max_rounds: u8,

    /// Upper bound of the respect resource.
    pub max_respect: u8,

    /// Upper bound of the energy resource.
    pub max_energy: u8,

    /// Respect each player starts with.
    pub starting_respect: u8,

    /// Energy each player starts with.
    pub starting_energy: u8,

    /// Energy cost model applied when a card is played.
    pub energy_cost: EnergyCost,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_rounds: 4,
            max_respect: 12,
            max_energy: 12,
            starting_respect: 12,
            starting_energy: 12,
            energy_cost: EnergyCost::Free,
        }
    }
}

impl MatchConfig {
    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u8) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the starting respect for both players.
    #[must_use]
    pub fn with_starting_respect(mut self, respect: u8) -> Self {
        self.starting_respect = respect;
        self
    }

    /// Set the starting energy for both players.
    #[must_use]
    pub fn with_starting_energy(mut self, energy: u8) -> Self {
        self.starting_energy = energy;
        self
    }

    /// Set the energy cost model.
    #[must_use]
    pub fn with_energy_cost(mut self, cost: EnergyCost) -> Self {
        self.energy_cost = cost;
        self
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(1..=ROUND_LIMIT).contains(&self.max_rounds) {
            return Err(EngineError::InvalidConfig(format!(
                "max_rounds {} outside 1..={ROUND_LIMIT}",
                self.max_rounds
            )));
        }
        if self.max_respect > RESPECT_LIMIT {
            return Err(EngineError::InvalidConfig(format!(
                "max_respect {} exceeds {RESPECT_LIMIT}",
                self.max_respect
            )));
        }
        if self.max_energy > ENERGY_LIMIT {
            return Err(EngineError::InvalidConfig(format!(
                "max_energy {} exceeds {ENERGY_LIMIT}",
                self.max_energy
            )));
        }
        if self.starting_respect == 0 || self.starting_respect > self.max_respect {
            return Err(EngineError::InvalidConfig(format!(
                "starting_respect {} outside 1..={}",
                self.starting_respect, self.max_respect
            )));
        }
        if self.starting_energy > self.max_energy {
            return Err(EngineError::InvalidConfig(format!(
                "starting_energy {} exceeds max_energy {}",
                self.starting_energy, self.max_energy
            )));
        }
        Ok(())
    }

    /// Clamp a computed respect value into bounds.
    #[must_use]
    pub fn clamp_respect(&self, value: i32) -> u8 {
        value.clamp(0, i32::from(self.max_respect)) as u8
    }

    /// Clamp a computed energy value into bounds.
    #[must_use]
    pub fn clamp_energy(&self, value: i32) -> u8 {
        value.clamp(0, i32::from(self.max_energy)) as u8
    }
}
