//! Round outcome records.
//!
//! A `RoundResult` is written once by the resolver and appended to the
//! match history. Nothing mutates it afterwards.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;

/// Who took a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundWinner {
    Player1,
    Player2,
    Tie,
}

impl RoundWinner {
    /// The winning player, or `None` on a tie.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            RoundWinner::Player1 => Some(PlayerId::Player1),
            RoundWinner::Player2 => Some(PlayerId::Player2),
            RoundWinner::Tie => None,
        }
    }

    /// The losing player, or `None` on a tie.
    #[must_use]
    pub fn loser(self) -> Option<PlayerId> {
        self.player().map(PlayerId::opponent)
    }
}

impl From<PlayerId> for RoundWinner {
    fn from(player: PlayerId) -> Self {
        match player {
            PlayerId::Player1 => RoundWinner::Player1,
            PlayerId::Player2 => RoundWinner::Player2,
        }
    }
}

/// Immutable record of one resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    /// Round number this result belongs to (1-based).
    pub round: u8,
    pub player1_card: CardId,
    pub player2_card: CardId,
    pub winner: RoundWinner,
    pub player1_attack: u32,
    pub player2_attack: u32,
    /// Respect removed from the loser; zero on a tie.
    pub damage: u32,
    /// Effect names in the order they fired.
    pub effects_fired: Vec<String>,
}

impl RoundResult {
    /// Attack value computed for a player.
    #[must_use]
    pub fn attack(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::Player1 => self.player1_attack,
            PlayerId::Player2 => self.player2_attack,
        }
    }

    /// Card a player committed this round.
    #[must_use]
    pub fn card(&self, player: PlayerId) -> CardId {
        match player {
            PlayerId::Player1 => self.player1_card,
            PlayerId::Player2 => self.player2_card,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_winner_players() {
        assert_eq!(RoundWinner::Player1.player(), Some(PlayerId::Player1));
        assert_eq!(RoundWinner::Player1.loser(), Some(PlayerId::Player2));
        assert_eq!(RoundWinner::Tie.player(), None);
        assert_eq!(RoundWinner::Tie.loser(), None);
        assert_eq!(RoundWinner::from(PlayerId::Player2), RoundWinner::Player2);
    }

    #[test]
    fn test_round_result_field_names() {
        let result = RoundResult {
            round: 1,
            player1_card: CardId::new(1),
            player2_card: CardId::new(2),
            winner: RoundWinner::Tie,
            player1_attack: 5,
            player2_attack: 5,
            damage: 0,
            effects_fired: vec![],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["winner"], "tie");
        assert_eq!(json["player1Attack"], 5);
        assert!(json.get("effectsFired").is_some());
        assert_eq!(result.attack(PlayerId::Player2), 5);
        assert_eq!(result.card(PlayerId::Player2), CardId::new(2));
    }
}
