//! Match-level outcome.
//!
//! A knockout (respect at zero) always decides the match. When the round
//! limit is reached instead, a `WinnerPolicy` turns the round history into
//! an outcome. The policy is a separate seam so the aggregate rule can be
//! swapped without touching round resolution.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Winner(PlayerId),
    Tie,
}

impl MatchOutcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, MatchOutcome::Winner(p) if *p == player)
    }

    fn from_ordering(player1_vs_player2: Ordering) -> Self {
        match player1_vs_player2 {
            Ordering::Greater => MatchOutcome::Winner(PlayerId::Player1),
            Ordering::Less => MatchOutcome::Winner(PlayerId::Player2),
            Ordering::Equal => MatchOutcome::Tie,
        }
    }
}

/// Decides a match that ran to the round limit without a knockout.
pub trait WinnerPolicy {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Decide the outcome of a completed match.
    fn decide(&self, state: &GameState) -> MatchOutcome;
}

/// More rounds won; ties broken by remaining respect.
#[derive(Clone, Copy, Debug, Default)]
pub struct MostRoundsWon;

impl WinnerPolicy for MostRoundsWon {
    fn name(&self) -> &'static str {
        "most_rounds_won"
    }

    fn decide(&self, state: &GameState) -> MatchOutcome {
        let rounds = state
            .rounds_won(PlayerId::Player1)
            .cmp(&state.rounds_won(PlayerId::Player2));
        match rounds {
            Ordering::Equal => HighestRespect.decide(state),
            decided => MatchOutcome::from_ordering(decided),
        }
    }
}

/// More respect remaining.
#[derive(Clone, Copy, Debug, Default)]
pub struct HighestRespect;

impl WinnerPolicy for HighestRespect {
    fn name(&self) -> &'static str {
        "highest_respect"
    }

    fn decide(&self, state: &GameState) -> MatchOutcome {
        let player1 = state.player(PlayerId::Player1).respect;
        let player2 = state.player(PlayerId::Player2).respect;
        MatchOutcome::from_ordering(player1.cmp(&player2))
    }
}

/// More total damage dealt across all rounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct CumulativeDamage;

impl WinnerPolicy for CumulativeDamage {
    fn name(&self) -> &'static str {
        "cumulative_damage"
    }

    fn decide(&self, state: &GameState) -> MatchOutcome {
        let player1 = state.damage_dealt(PlayerId::Player1);
        let player2 = state.damage_dealt(PlayerId::Player2);
        MatchOutcome::from_ordering(player1.cmp(&player2))
    }
}

/// Outcome decided by knockout alone, if any.
#[must_use]
pub fn knockout(state: &GameState) -> Option<MatchOutcome> {
    let out1 = state.player(PlayerId::Player1).is_out();
    let out2 = state.player(PlayerId::Player2).is_out();
    match (out1, out2) {
        (true, true) => Some(MatchOutcome::Tie),
        (true, false) => Some(MatchOutcome::Winner(PlayerId::Player2)),
        (false, true) => Some(MatchOutcome::Winner(PlayerId::Player1)),
        (false, false) => None,
    }
}

/// Outcome of a match, or `None` while it is still running.
#[must_use]
pub fn winner(state: &GameState, policy: &dyn WinnerPolicy) -> Option<MatchOutcome> {
    if !state.is_complete() {
        return None;
    }
    Some(knockout(state).unwrap_or_else(|| policy.decide(state)))
}
