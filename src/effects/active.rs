//! Running, duration-bound modifiers attached to a player.

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

/// Identifier of an attached effect, unique within one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActiveEffectId(pub u32);

impl std::fmt::Display for ActiveEffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

/// Allocates fresh `ActiveEffectId`s for a match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectIds {
    next: u32,
}

impl EffectIds {
    /// Allocate the next identifier.
    ///
    /// Fails once the id space is used up, which only a hand-edited
    /// snapshot can reach.
    pub fn alloc(&mut self) -> Result<ActiveEffectId, EngineError> {
        let id = ActiveEffectId(self.next);
        self.next = self
            .next
            .checked_add(1)
            .ok_or_else(|| EngineError::InvalidState("effect id space exhausted".into()))?;
        Ok(id)
    }

    /// Number of identifiers handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}

/// What an attached effect changes while it is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// Added to the holder's attack value.
    Power(i32),
    /// Added to the damage the holder deals on a win.
    Damage(i32),
}

/// An instantiated, running effect.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub id: ActiveEffectId,
    /// Wire name of the effect that attached this modifier.
    pub name: String,
    /// Rounds left. Removed once aging brings this to zero.
    pub duration: u8,
    pub modifier: Modifier,
}

impl ActiveEffect {
    #[must_use]
    pub fn new(
        id: ActiveEffectId,
        name: impl Into<String>,
        duration: u8,
        modifier: Modifier,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            duration,
            modifier,
        }
    }

    /// Contribution to the holder's attack.
    #[must_use]
    pub fn power_bonus(&self) -> i32 {
        match self.modifier {
            Modifier::Power(n) => n,
            Modifier::Damage(_) => 0,
        }
    }

    /// Contribution to the holder's damage on a win.
    #[must_use]
    pub fn damage_bonus(&self) -> i32 {
        match self.modifier {
            Modifier::Damage(n) => n,
            Modifier::Power(_) => 0,
        }
    }

    /// True for modifiers that hurt the holder.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self.modifier {
            Modifier::Power(n) | Modifier::Damage(n) => n < 0,
        }
    }
}
