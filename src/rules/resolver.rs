//! Round resolution - the match state machine.
//!
//! `RoundResolver::resolve` takes the current state plus both players'
//! plays and returns the next state with a `RoundResult`:
//!
//! 0. remove played cards from hands, pay energy under the cost model
//!    (a player who can afford nothing in hand plays for free)
//! 1. onEnter effects, player1 then player2
//! 2. attack = power + own power modifiers, floored at 0
//! 3. higher attack wins; equal attacks tie with no damage
//! 4. winner's onWin, then loser's onLose
//! 5. damage comes off the loser's respect
//! 6. attached effects age by one round
//! 7. terminal check and round advance
//! 8. result appended to history
//!
//! All validation happens before step 0. The input state is borrowed and
//! never modified, so a failed call leaves nothing half-applied.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCatalog, CardId};
use crate::core::{
    EnergyCost, EngineError, GameState, MatchConfig, MatchPhase, PlayerId, PlayerMap, PlayerState,
    RoundResult, RoundWinner,
};
use crate::effects::EffectInterpreter;

/// A card committed by one player for the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedCard {
    pub card: CardId,
}

impl PlayedCard {
    #[must_use]
    pub const fn new(card: CardId) -> Self {
        Self { card }
    }
}

impl From<CardId> for PlayedCard {
    fn from(card: CardId) -> Self {
        Self::new(card)
    }
}

/// Resolves rounds against one catalog and rule set.
///
/// Holds only shared references, so one resolver can serve many matches.
#[derive(Clone, Copy, Debug)]
pub struct RoundResolver<'a> {
    catalog: &'a CardCatalog,
    config: &'a MatchConfig,
}

impl<'a> RoundResolver<'a> {
    #[must_use]
    pub fn new(catalog: &'a CardCatalog, config: &'a MatchConfig) -> Self {
        Self { catalog, config }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        self.config
    }

    /// Build the opening state after checking the config and both hands.
    ///
    /// Each hand must hold at least one card per round, and every card
    /// must exist in the catalog.
    pub fn start_match(
        &self,
        player1_hand: Vec<CardId>,
        player2_hand: Vec<CardId>,
    ) -> Result<GameState, EngineError> {
        self.config.validate()?;

        let required = usize::from(self.config.max_rounds);
        let hands = [
            (PlayerId::Player1, &player1_hand),
            (PlayerId::Player2, &player2_hand),
        ];
        for (player, hand) in hands {
            if hand.len() < required {
                return Err(EngineError::HandTooSmall {
                    player,
                    size: hand.len(),
                    required,
                });
            }
            for &card in hand {
                self.catalog.lookup(card)?;
            }
        }

        Ok(GameState::new(self.config, player1_hand, player2_hand))
    }

    /// Resolve one round.
    pub fn resolve(
        &self,
        state: &GameState,
        play1: PlayedCard,
        play2: PlayedCard,
    ) -> Result<(GameState, RoundResult), EngineError> {
        let plays = PlayerMap::from_pair(play1, play2);
        let cards = self.validate(state, &plays)?;

        let interpreter = EffectInterpreter::new(self.config);
        let mut next = state.clone();
        next.phase = MatchPhase::Resolving;
        let round = next.round;
        let mut fired = Vec::new();

        for player in PlayerId::ALL {
            let cost = self.energy_cost(&state.players[player], cards[player]);
            let seat = &mut next.players[player];
            seat.remove_from_hand(plays[player].card);
            seat.energy -= cost;
        }

        for player in PlayerId::ALL {
            let (acting, opposing) = next.players.pair_mut(player);
            interpreter.apply_all(
                &cards[player].on_enter,
                acting,
                opposing,
                &mut next.effect_ids,
                &mut fired,
            )?;
        }

        let attack = next
            .players
            .map(|player, seat| attack_value(cards[player].power, seat.power_modifier()));

        let winner = match attack[PlayerId::Player1].cmp(&attack[PlayerId::Player2]) {
            Ordering::Greater => RoundWinner::Player1,
            Ordering::Less => RoundWinner::Player2,
            Ordering::Equal => RoundWinner::Tie,
        };

        let damage = winner.player().map_or(0, |w| {
            attack_value(cards[w].damage, next.players[w].damage_modifier())
        });

        if let Some(w) = winner.player() {
            let l = w.opponent();

            let ids = &mut next.effect_ids;
            let (acting, opposing) = next.players.pair_mut(w);
            interpreter.apply_all(&cards[w].on_win, acting, opposing, ids, &mut fired)?;

            let (acting, opposing) = next.players.pair_mut(l);
            interpreter.apply_all(&cards[l].on_lose, acting, opposing, ids, &mut fired)?;

            let loser = &mut next.players[l];
            let hit = i32::try_from(damage).unwrap_or(i32::MAX);
            loser.respect = self.config.clamp_respect(i32::from(loser.respect) - hit);
        }

        for (_, seat) in next.players.iter_mut() {
            EffectInterpreter::age(seat, round);
        }

        let result = RoundResult {
            round,
            player1_card: plays[PlayerId::Player1].card,
            player2_card: plays[PlayerId::Player2].card,
            winner,
            player1_attack: attack[PlayerId::Player1],
            player2_attack: attack[PlayerId::Player2],
            damage,
            effects_fired: fired,
        };
        next.round_history.push_back(result.clone());

        let knocked_out = next.players.iter().any(|(_, seat)| seat.is_out());
        if knocked_out || round >= self.config.max_rounds {
            next.phase = MatchPhase::Complete;
        } else {
            next.round = round + 1;
            next.phase = MatchPhase::AwaitingMoves;
        }

        Ok((next, result))
    }

    /// Check every precondition and look up both played cards.
    fn validate(
        &self,
        state: &GameState,
        plays: &PlayerMap<PlayedCard>,
    ) -> Result<PlayerMap<&'a Card>, EngineError> {
        if state.is_complete() || state.players.iter().any(|(_, seat)| seat.is_out()) {
            return Err(EngineError::MatchAlreadyComplete);
        }
        if state.phase == MatchPhase::Resolving {
            return Err(EngineError::InvalidState("state captured mid-resolution".into()));
        }
        if !(1..=self.config.max_rounds).contains(&state.round) {
            return Err(EngineError::InvalidRound {
                round: state.round,
                max_rounds: self.config.max_rounds,
            });
        }

        let player1 = self.check_play(state, PlayerId::Player1, plays[PlayerId::Player1].card)?;
        let player2 = self.check_play(state, PlayerId::Player2, plays[PlayerId::Player2].card)?;
        Ok(PlayerMap::from_pair(player1, player2))
    }

    /// Check that one player may commit `card` this round.
    ///
    /// Controllers call this when a play arrives so a bad move is rejected
    /// before the opponent's play is waited on.
    pub fn check_play(
        &self,
        state: &GameState,
        player: PlayerId,
        card: CardId,
    ) -> Result<&'a Card, EngineError> {
        if !state.players[player].has_card(card) {
            return Err(EngineError::CardNotInHand { player, card });
        }
        let definition = self.catalog.lookup(card)?;

        let seat = &state.players[player];
        let required = self.energy_cost(seat, definition);
        let available = seat.energy;
        if available < required {
            return Err(EngineError::InsufficientEnergy {
                player,
                required,
                available,
            });
        }
        Ok(definition)
    }

    /// Energy `seat` pays to play `card`.
    ///
    /// Under `EnergyCost::Power` a player who cannot afford any card left
    /// in hand plays for free, so every match can reach its last round.
    fn energy_cost(&self, seat: &PlayerState, card: &Card) -> u8 {
        match self.config.energy_cost {
            EnergyCost::Free => 0,
            EnergyCost::Power if self.is_exhausted(seat) => 0,
            EnergyCost::Power => card.power,
        }
    }

    fn is_exhausted(&self, seat: &PlayerState) -> bool {
        seat.hand.iter().all(|&id| {
            self.catalog
                .lookup(id)
                .map_or(true, |card| card.power > seat.energy)
        })
    }
}

/// Base stat plus modifiers, never below zero.
fn attack_value(base: u8, modifier: i32) -> u32 {
    (i64::from(base) + i64::from(modifier)).max(0) as u32
}
