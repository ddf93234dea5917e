//! Effect interpretation - executing effects on player state.
//!
//! The `EffectInterpreter` applies effects to a pair of players and ages
//! attached effects. Every transition is a plain function of its inputs;
//! randomness, I/O, and logging never happen here.

use crate::core::{EngineError, MatchConfig, PlayerState};

use super::active::{ActiveEffect, EffectIds, Modifier};
use super::effect::Effect;

/// Applies effects under one match's resource bounds.
#[derive(Clone, Copy, Debug)]
pub struct EffectInterpreter<'a> {
    config: &'a MatchConfig,
}

impl<'a> EffectInterpreter<'a> {
    #[must_use]
    pub fn new(config: &'a MatchConfig) -> Self {
        Self { config }
    }

    /// Apply one effect.
    ///
    /// `acting` owns the card carrying the effect. Resource changes are
    /// clamped into bounds. Attaching always adds a new entry with a fresh
    /// id, even if an effect of the same name is already attached.
    pub fn apply(
        &self,
        effect: &Effect,
        acting: &mut PlayerState,
        opposing: &mut PlayerState,
        ids: &mut EffectIds,
    ) -> Result<(), EngineError> {
        let name = effect.name();

        match *effect {
            Effect::BoostPower { amount, duration } => {
                attach(acting, ids, name, duration, Modifier::Power(i32::from(amount)))?;
            }
            Effect::WeakenOpponent { amount, duration } => {
                attach(opposing, ids, name, duration, Modifier::Power(-i32::from(amount)))?;
            }
            Effect::BoostDamage { amount, duration } => {
                attach(acting, ids, name, duration, Modifier::Damage(i32::from(amount)))?;
            }
            Effect::GainRespect { amount } => {
                acting.respect = self
                    .config
                    .clamp_respect(i32::from(acting.respect) + i32::from(amount));
            }
            Effect::DrainRespect { amount } => {
                opposing.respect = self
                    .config
                    .clamp_respect(i32::from(opposing.respect) - i32::from(amount));
            }
            Effect::GainEnergy { amount } => {
                acting.energy = self
                    .config
                    .clamp_energy(i32::from(acting.energy) + i32::from(amount));
            }
            Effect::DrainEnergy { amount } => {
                opposing.energy = self
                    .config
                    .clamp_energy(i32::from(opposing.energy) - i32::from(amount));
            }
            Effect::Cleanse => {
                acting.effects.retain(|e| !e.is_negative());
            }
        }
        Ok(())
    }

    /// Apply a card's effect list in order, recording each name in `fired`.
    pub fn apply_all(
        &self,
        effects: &[Effect],
        acting: &mut PlayerState,
        opposing: &mut PlayerState,
        ids: &mut EffectIds,
        fired: &mut Vec<String>,
    ) -> Result<(), EngineError> {
        for effect in effects {
            self.apply(effect, acting, opposing, ids)?;
            fired.push(effect.name().to_string());
        }
        Ok(())
    }

    /// Age attached effects by one round.
    ///
    /// Each effect loses one duration; those reaching zero are removed.
    /// Aging is keyed by `round`: a second call for a round that has
    /// already been aged is a no-op. Returns the number of expired effects.
    pub fn age(player: &mut PlayerState, round: u8) -> usize {
        if player.aged_round >= round {
            return 0;
        }
        player.aged_round = round;

        let before = player.effects.len();
        for effect in &mut player.effects {
            effect.duration = effect.duration.saturating_sub(1);
        }
        player.effects.retain(|e| e.duration > 0);
        before - player.effects.len()
    }
}

fn attach(
    target: &mut PlayerState,
    ids: &mut EffectIds,
    name: &str,
    duration: u8,
    modifier: Modifier,
) -> Result<(), EngineError> {
    let id = ids.alloc()?;
    target.effects.push(ActiveEffect::new(id, name, duration, modifier));
    Ok(())
}
