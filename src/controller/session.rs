//! Match controller: the single owner of one match's state.
//!
//! Players submit plays one at a time. The controller holds the first
//! play until the second arrives, then resolves the round and replaces
//! its state with the resolver's output.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::snapshot::MatchSnapshot;
use crate::cards::{CardCatalog, CardId};
use crate::core::{
    EngineError, GameRng, GameState, MatchConfig, PlayerId, PlayerMap, RoundResult, SnapshotError,
};
use crate::rules::{self, MatchOutcome, MostRoundsWon, PlayedCard, RoundResolver, WinnerPolicy};

/// Owns and advances one match.
pub struct MatchController {
    catalog: Arc<CardCatalog>,
    config: MatchConfig,
    policy: Box<dyn WinnerPolicy + Send + Sync>,
    state: GameState,
    pending: PlayerMap<Option<PlayedCard>>,
}

impl std::fmt::Debug for MatchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchController")
            .field("config", &self.config)
            .field("policy", &self.policy.name())
            .field("state", &self.state)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl MatchController {
    /// Start a match with the given hands.
    pub fn start(
        catalog: Arc<CardCatalog>,
        config: MatchConfig,
        player1_hand: Vec<CardId>,
        player2_hand: Vec<CardId>,
    ) -> Result<Self, EngineError> {
        let state = rules::start_match(&catalog, &config, player1_hand, player2_hand)?;
        info!(
            rounds = config.max_rounds,
            respect = config.starting_respect,
            "match started"
        );
        Ok(Self::from_parts(catalog, config, state))
    }

    /// Start a match with hands dealt from the catalog by a seeded RNG.
    ///
    /// Each player gets one card per round. Player1 is dealt first.
    pub fn start_dealt(
        catalog: Arc<CardCatalog>,
        config: MatchConfig,
        seed: u64,
    ) -> Result<Self, EngineError> {
        let mut rng = GameRng::new(seed);
        let size = usize::from(config.max_rounds);
        let player1_hand = catalog.deal_hand(&mut rng, size);
        let player2_hand = catalog.deal_hand(&mut rng, size);
        debug!(seed, "dealt starting hands");
        Self::start(catalog, config, player1_hand, player2_hand)
    }

    /// Restore a match from a snapshot. Pending plays are not part of a
    /// snapshot; both players resubmit for the current round.
    pub fn restore(
        catalog: Arc<CardCatalog>,
        snapshot: MatchSnapshot,
    ) -> Result<Self, SnapshotError> {
        snapshot.config.validate()?;
        snapshot.state.validate(&snapshot.config)?;
        info!(round = snapshot.state.round, "match restored");
        Ok(Self::from_parts(catalog, snapshot.config, snapshot.state))
    }

    fn from_parts(catalog: Arc<CardCatalog>, config: MatchConfig, state: GameState) -> Self {
        Self {
            catalog,
            config,
            policy: Box::new(MostRoundsWon),
            state,
            pending: PlayerMap::default(),
        }
    }

    /// Replace the policy used to decide matches that reach the round limit.
    #[must_use]
    pub fn with_policy(mut self, policy: impl WinnerPolicy + Send + Sync + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Current authoritative state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play a player has committed for the current round, if any.
    #[must_use]
    pub fn pending(&self, player: PlayerId) -> Option<PlayedCard> {
        self.pending[player]
    }

    /// Submit a play.
    ///
    /// The play is checked immediately. A player may replace their own
    /// pending play until the opponent's arrives. Returns the round
    /// result once both plays are in, `None` while waiting.
    pub fn submit(
        &mut self,
        player: PlayerId,
        card: CardId,
    ) -> Result<Option<RoundResult>, EngineError> {
        if self.state.is_complete() {
            warn!(%player, %card, "play submitted after match end");
            return Err(EngineError::MatchAlreadyComplete);
        }

        let resolver = RoundResolver::new(&self.catalog, &self.config);
        if let Err(err) = resolver.check_play(&self.state, player, card) {
            warn!(%player, %card, error = %err, "play rejected");
            return Err(err);
        }

        self.pending[player] = Some(PlayedCard::new(card));
        debug!(%player, %card, round = self.state.round, "play accepted");

        let pending = (self.pending[PlayerId::Player1], self.pending[PlayerId::Player2]);
        let (Some(play1), Some(play2)) = pending else {
            return Ok(None);
        };
        self.pending = PlayerMap::default();

        let (next, result) = resolver.resolve(&self.state, play1, play2)?;
        self.state = next;

        info!(
            round = result.round,
            winner = ?result.winner,
            player1_attack = result.player1_attack,
            player2_attack = result.player2_attack,
            damage = result.damage,
            "round resolved"
        );
        if let Some(outcome) = self.winner() {
            info!(?outcome, policy = self.policy.name(), "match complete");
        }

        Ok(Some(result))
    }

    /// Terminal check.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        rules::is_complete(&self.state)
    }

    /// Match outcome under this controller's policy; `None` while running.
    #[must_use]
    pub fn winner(&self) -> Option<MatchOutcome> {
        rules::winner(&self.state, self.policy.as_ref())
    }

    /// Capture the state and rules for storage or transport.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            config: self.config.clone(),
            state: self.state.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Faction};
    use crate::core::RoundWinner;

    fn catalog() -> Arc<CardCatalog> {
        let cards = (1..=8)
            .map(|i| Card::new(CardId::new(i), format!("C{i}"), Faction::Circuit, i as u8, 2));
        Arc::new(CardCatalog::from_cards(cards).unwrap())
    }

    fn hand(ids: [u32; 4]) -> Vec<CardId> {
        ids.into_iter().map(CardId::new).collect()
    }

    fn start() -> MatchController {
        let config = MatchConfig::default();
        MatchController::start(catalog(), config, hand([1, 2, 3, 4]), hand([5, 6, 7, 8])).unwrap()
    }

    #[test]
    fn test_waits_for_both_plays() {
        let mut controller = start();

        assert_eq!(controller.submit(PlayerId::Player1, CardId::new(4)), Ok(None));
        assert_eq!(controller.pending(PlayerId::Player1), Some(PlayedCard::new(CardId::new(4))));
        assert!(controller.state().round_history.is_empty());

        let result = controller.submit(PlayerId::Player2, CardId::new(5)).unwrap().unwrap();
        assert_eq!(result.winner, RoundWinner::Player2);
        assert_eq!(controller.pending(PlayerId::Player1), None);
        assert_eq!(controller.state().round, 2);
    }

    #[test]
    fn test_resubmit_replaces_pending() {
        let mut controller = start();

        controller.submit(PlayerId::Player1, CardId::new(1)).unwrap();
        controller.submit(PlayerId::Player1, CardId::new(3)).unwrap();
        let result = controller.submit(PlayerId::Player2, CardId::new(6)).unwrap().unwrap();

        assert_eq!(result.player1_card, CardId::new(3));
        assert!(controller.state().player(PlayerId::Player1).has_card(CardId::new(1)));
    }

    #[test]
    fn test_rejects_card_not_in_hand() {
        let mut controller = start();

        assert_eq!(
            controller.submit(PlayerId::Player2, CardId::new(1)),
            Err(EngineError::CardNotInHand {
                player: PlayerId::Player2,
                card: CardId::new(1)
            })
        );
        assert_eq!(controller.pending(PlayerId::Player2), None);
    }

    #[test]
    fn test_dealt_match_is_reproducible() {
        let a = MatchController::start_dealt(catalog(), MatchConfig::default(), 99).unwrap();
        let b = MatchController::start_dealt(catalog(), MatchConfig::default(), 99).unwrap();

        assert_eq!(a.state(), b.state());
        assert_eq!(a.state().player(PlayerId::Player1).hand.len(), 4);
    }

    #[test]
    fn test_controller_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<MatchController>();
    }
}
