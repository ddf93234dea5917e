//! Effect definitions.
//!
//! Card data names effects with a string and a free-form parameter map
//! (`RawEffect`). Inside the engine every effect is a variant of the
//! closed `Effect` enum, so dispatch is a single exhaustive `match` and
//! an unknown name can only fail at load time.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::EngineError;

/// A built-in card effect.
///
/// "Acting" is the player whose card carries the effect, "opposing" is
/// the other player.
///
/// ## Lasting modifiers
///
/// Attach an `ActiveEffect` that lives for `duration` rounds:
/// - `BoostPower`: +amount attack for the acting player
/// - `WeakenOpponent`: -amount attack for the opposing player
/// - `BoostDamage`: +amount damage when the acting player wins
///
/// ## Instant resource changes
///
/// - `GainRespect` / `DrainRespect`
/// - `GainEnergy` / `DrainEnergy`
///
/// ## Cleanup
///
/// - `Cleanse`: strip the acting player's negative modifiers
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEffect", into = "RawEffect")]
pub enum Effect {
    BoostPower { amount: u8, duration: u8 },
    WeakenOpponent { amount: u8, duration: u8 },
    BoostDamage { amount: u8, duration: u8 },
    GainRespect { amount: u8 },
    DrainRespect { amount: u8 },
    GainEnergy { amount: u8 },
    DrainEnergy { amount: u8 },
    Cleanse,
}

impl Effect {
    /// Every wire name the engine understands.
    pub const NAMES: [&'static str; 8] = [
        "boost_power",
        "weaken_opponent",
        "boost_damage",
        "gain_respect",
        "drain_respect",
        "gain_energy",
        "drain_energy",
        "cleanse",
    ];

    /// The wire name of this effect.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Effect::BoostPower { .. } => "boost_power",
            Effect::WeakenOpponent { .. } => "weaken_opponent",
            Effect::BoostDamage { .. } => "boost_damage",
            Effect::GainRespect { .. } => "gain_respect",
            Effect::DrainRespect { .. } => "drain_respect",
            Effect::GainEnergy { .. } => "gain_energy",
            Effect::DrainEnergy { .. } => "drain_energy",
            Effect::Cleanse => "cleanse",
        }
    }

    /// Resolve a raw effect into a typed variant.
    pub fn parse(raw: &RawEffect) -> Result<Self, EngineError> {
        let effect = match raw.name.as_str() {
            "boost_power" => Effect::BoostPower {
                amount: raw.param_u8("amount")?,
                duration: raw.param_u8("duration")?,
            },
            "weaken_opponent" => Effect::WeakenOpponent {
                amount: raw.param_u8("amount")?,
                duration: raw.param_u8("duration")?,
            },
            "boost_damage" => Effect::BoostDamage {
                amount: raw.param_u8("amount")?,
                duration: raw.param_u8("duration")?,
            },
            "gain_respect" => Effect::GainRespect {
                amount: raw.param_u8("amount")?,
            },
            "drain_respect" => Effect::DrainRespect {
                amount: raw.param_u8("amount")?,
            },
            "gain_energy" => Effect::GainEnergy {
                amount: raw.param_u8("amount")?,
            },
            "drain_energy" => Effect::DrainEnergy {
                amount: raw.param_u8("amount")?,
            },
            "cleanse" => Effect::Cleanse,
            other => return Err(EngineError::UnknownEffect(other.to_string())),
        };
        Ok(effect)
    }
}

/// Effect as it appears in card data: a name plus open parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawEffect {
    pub name: String,
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl RawEffect {
    /// Create a raw effect with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Map::new(),
        }
    }

    /// Add a parameter (builder pattern).
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    fn param_u8(&self, key: &str) -> Result<u8, EngineError> {
        let value = self.params.get(key).ok_or_else(|| EngineError::InvalidEffectParams {
            effect: self.name.clone(),
            reason: format!("missing `{key}`"),
        })?;

        value
            .as_u64()
            .and_then(|v| u8::try_from(v).ok())
            .ok_or_else(|| EngineError::InvalidEffectParams {
                effect: self.name.clone(),
                reason: format!("`{key}` must be an integer in 0..=255, got {value}"),
            })
    }
}

impl TryFrom<RawEffect> for Effect {
    type Error = EngineError;

    fn try_from(raw: RawEffect) -> Result<Self, Self::Error> {
        Effect::parse(&raw)
    }
}

impl From<Effect> for RawEffect {
    fn from(effect: Effect) -> Self {
        let raw = RawEffect::new(effect.name());
        match effect {
            Effect::BoostPower { amount, duration }
            | Effect::WeakenOpponent { amount, duration }
            | Effect::BoostDamage { amount, duration } => raw
                .with_param("amount", amount)
                .with_param("duration", duration),
            Effect::GainRespect { amount }
            | Effect::DrainRespect { amount }
            | Effect::GainEnergy { amount }
            | Effect::DrainEnergy { amount } => raw.with_param("amount", amount),
            Effect::Cleanse => raw,
        }
    }
}
