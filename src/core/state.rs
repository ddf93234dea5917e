//! Match state: per-player resources and the round history.
//!
//! ## PlayerState
//!
//! Respect, energy, the hand (card ids into the catalog), and attached
//! effects for one player.
//!
//! ## GameState
//!
//! The single authoritative value for one match. The resolver never
//! mutates it in place: it returns a new `GameState`, and the owner
//! replaces its copy. `round_history` is an `im::Vector`, so cloning a
//! state to resolve the next round is O(1) in the history length.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::error::EngineError;
use super::player::{PlayerId, PlayerMap};
use super::round::{RoundResult, RoundWinner};
use crate::cards::CardId;
use crate::effects::{ActiveEffect, EffectIds};

/// Resources and attachments of one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Life/score resource, 0..=max_respect.
    pub respect: u8,
    /// Spendable resource, 0..=max_energy.
    pub energy: u8,
    /// Cards still playable, in deal order.
    pub hand: Vec<CardId>,
    /// Attached effects, in attach order.
    pub effects: Vec<ActiveEffect>,
    /// Last round whose aging has been applied (0 = never).
    pub aged_round: u8,
}

impl PlayerState {
    /// Create a player with starting resources.
    #[must_use]
    pub fn new(hand: Vec<CardId>, config: &MatchConfig) -> Self {
        Self {
            respect: config.starting_respect,
            energy: config.starting_energy,
            hand,
            effects: Vec::new(),
            aged_round: 0,
        }
    }

    /// Check whether a card is in hand.
    #[must_use]
    pub fn has_card(&self, card: CardId) -> bool {
        self.hand.contains(&card)
    }

    /// Remove the first copy of a card from the hand.
    ///
    /// Returns true if the card was found and removed.
    pub fn remove_from_hand(&mut self, card: CardId) -> bool {
        if let Some(pos) = self.hand.iter().position(|&c| c == card) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }

    /// Sum of attack modifiers from attached effects.
    #[must_use]
    pub fn power_modifier(&self) -> i32 {
        self.effects.iter().map(ActiveEffect::power_bonus).sum()
    }

    /// Sum of damage modifiers from attached effects.
    #[must_use]
    pub fn damage_modifier(&self) -> i32 {
        self.effects.iter().map(ActiveEffect::damage_bonus).sum()
    }

    /// Knocked out.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.respect == 0
    }
}

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    /// Waiting for both plays of the current round.
    #[default]
    AwaitingMoves,
    /// Inside a `resolve_round` call. Never observed on a returned state.
    Resolving,
    /// Terminal.
    Complete,
}

/// Full match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Current round (1-based). Stays on the last resolved round once complete.
    pub round: u8,
    pub phase: MatchPhase,
    pub players: PlayerMap<PlayerState>,
    /// Append-only.
    pub round_history: Vector<RoundResult>,
    pub effect_ids: EffectIds,
}

impl GameState {
    /// Create a fresh state at round 1. Hands are not checked here.
    #[must_use]
    pub fn new(config: &MatchConfig, player1_hand: Vec<CardId>, player2_hand: Vec<CardId>) -> Self {
        Self {
            round: 1,
            phase: MatchPhase::AwaitingMoves,
            players: PlayerMap::from_pair(
                PlayerState::new(player1_hand, config),
                PlayerState::new(player2_hand, config),
            ),
            round_history: Vector::new(),
            effect_ids: EffectIds::default(),
        }
    }

    /// Get a player's state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// Terminal check.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == MatchPhase::Complete
    }

    /// Most recent round result.
    #[must_use]
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.round_history.last()
    }

    /// Number of rounds a player has won.
    #[must_use]
    pub fn rounds_won(&self, player: PlayerId) -> usize {
        self.round_history
            .iter()
            .filter(|r| r.winner.player() == Some(player))
            .count()
    }

    /// Number of tied rounds.
    #[must_use]
    pub fn rounds_tied(&self) -> usize {
        self.round_history
            .iter()
            .filter(|r| r.winner == RoundWinner::Tie)
            .count()
    }

    /// Total respect damage a player has dealt across the history.
    #[must_use]
    pub fn damage_dealt(&self, player: PlayerId) -> u32 {
        self.round_history
            .iter()
            .filter(|r| r.winner.player() == Some(player))
            .map(|r| r.damage)
            .sum()
    }

    /// Check every invariant of a state at rest.
    ///
    /// Used when restoring snapshots from outside the engine; the resolver
    /// only ever produces valid states.
    pub fn validate(&self, config: &MatchConfig) -> Result<(), EngineError> {
        let invalid = |msg: String| Err(EngineError::InvalidState(msg));

        if !(1..=config.max_rounds).contains(&self.round) {
            return invalid(format!("round {} outside 1..={}", self.round, config.max_rounds));
        }

        let resolved = self.round_history.len();
        match self.phase {
            MatchPhase::Resolving => return invalid("state captured mid-resolution".into()),
            MatchPhase::AwaitingMoves => {
                if resolved + 1 != usize::from(self.round) {
                    return invalid(format!(
                        "{resolved} rounds recorded before round {}",
                        self.round
                    ));
                }
                if self.players.iter().any(|(_, p)| p.is_out()) {
                    return invalid("player at zero respect in a live match".into());
                }
            }
            MatchPhase::Complete => {
                if resolved != usize::from(self.round) {
                    return invalid(format!(
                        "{resolved} rounds recorded for completed round {}",
                        self.round
                    ));
                }
            }
        }

        for (id, player) in self.players.iter() {
            if player.respect > config.max_respect {
                return invalid(format!(
                    "{id} respect {} above {}",
                    player.respect, config.max_respect
                ));
            }
            if player.energy > config.max_energy {
                return invalid(format!(
                    "{id} energy {} above {}",
                    player.energy, config.max_energy
                ));
            }
            // Aging runs once per resolved round.
            if usize::from(player.aged_round) != resolved {
                return invalid(format!(
                    "{id} aged through round {} with {resolved} rounds resolved",
                    player.aged_round
                ));
            }
            for effect in &player.effects {
                if effect.duration == 0 {
                    return invalid(format!("{id} holds expired {}", effect.id));
                }
                if effect.id.0 >= self.effect_ids.allocated() {
                    return invalid(format!("{id} holds unallocated {}", effect.id));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{ActiveEffectId, Modifier};

    fn hand(ids: &[u32]) -> Vec<CardId> {
        ids.iter().map(|&i| CardId::new(i)).collect()
    }

    #[test]
    fn test_new_state() {
        let config = MatchConfig::default();
        let state = GameState::new(&config, hand(&[1, 2, 3, 4]), hand(&[5, 6, 7, 8]));

        assert_eq!(state.round, 1);
        assert_eq!(state.phase, MatchPhase::AwaitingMoves);
        assert!(state.round_history.is_empty());
        for (_, player) in state.players.iter() {
            assert_eq!(player.respect, 12);
            assert_eq!(player.energy, 12);
            assert!(player.effects.is_empty());
        }
        assert!(state.validate(&config).is_ok());
    }

    #[test]
    fn test_remove_from_hand_takes_first_copy() {
        let mut player = PlayerState::new(hand(&[1, 2, 1]), &MatchConfig::default());

        assert!(player.remove_from_hand(CardId::new(1)));
        assert_eq!(player.hand, hand(&[2, 1]));
        assert!(player.has_card(CardId::new(1)));

        assert!(!player.remove_from_hand(CardId::new(9)));
    }

    #[test]
    fn test_modifier_sums() {
        let mut player = PlayerState::default();
        player.effects = vec![
            ActiveEffect::new(ActiveEffectId(0), "boost_power", 1, Modifier::Power(2)),
            ActiveEffect::new(ActiveEffectId(1), "weaken_opponent", 2, Modifier::Power(-3)),
            ActiveEffect::new(ActiveEffectId(2), "boost_damage", 1, Modifier::Damage(4)),
        ];

        assert_eq!(player.power_modifier(), -1);
        assert_eq!(player.damage_modifier(), 4);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = MatchConfig::default();
        let mut state = GameState::new(&config, hand(&[1]), hand(&[2]));

        state.players[PlayerId::Player1].respect = 13;
        assert!(matches!(state.validate(&config), Err(EngineError::InvalidState(_))));

        state.players[PlayerId::Player1].respect = 12;
        state.round = 5;
        assert!(state.validate(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_history_mismatch() {
        let config = MatchConfig::default();
        let mut state = GameState::new(&config, hand(&[1]), hand(&[2]));
        state.round = 3;

        assert!(state.validate(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_aging_ahead_of_history() {
        let config = MatchConfig::default();
        let mut state = GameState::new(&config, hand(&[1]), hand(&[2]));
        state.players[PlayerId::Player1].aged_round = 4;

        assert!(matches!(state.validate(&config), Err(EngineError::InvalidState(_))));
    }

    #[test]
    fn test_validate_rejects_resting_effects() {
        let config = MatchConfig::default();
        let mut state = GameState::new(&config, hand(&[1]), hand(&[2]));
        let id = state.effect_ids.alloc().unwrap();

        state.players[PlayerId::Player2].effects =
            vec![ActiveEffect::new(id, "boost_power", 1, Modifier::Power(2))];
        assert!(state.validate(&config).is_ok());

        state.players[PlayerId::Player2].effects[0].duration = 0;
        assert!(matches!(state.validate(&config), Err(EngineError::InvalidState(_))));

        state.players[PlayerId::Player2].effects =
            vec![ActiveEffect::new(ActiveEffectId(7), "boost_power", 1, Modifier::Power(2))];
        assert!(matches!(state.validate(&config), Err(EngineError::InvalidState(_))));
    }

    #[test]
    fn test_state_serialization() {
        let config = MatchConfig::default();
        let state = GameState::new(&config, hand(&[1, 2]), hand(&[3, 4]));

        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("roundHistory").is_some());
        assert_eq!(json["phase"], "awaiting_moves");

        let restored: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(state, restored);
    }
}
