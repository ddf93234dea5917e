//! Property tests over randomly generated matches.

use proptest::prelude::*;

use duel_engine::cards::{Card, CardCatalog, CardId, Faction};
use duel_engine::core::{GameState, MatchConfig, PlayerId};
use duel_engine::effects::{Effect, EffectInterpreter};
use duel_engine::rules::{self, MostRoundsWon, PlayedCard};

const CARD_COUNT: u32 = 8;

fn catalog() -> CardCatalog {
    CardCatalog::from_cards([
        Card::new(CardId::new(1), "Brawler", Faction::Crown, 5, 3),
        Card::new(CardId::new(2), "Hype", Faction::Syndicate, 4, 2)
            .with_on_enter(Effect::BoostPower { amount: 3, duration: 2 }),
        Card::new(CardId::new(3), "Spoiler", Faction::Veil, 3, 2)
            .with_on_enter(Effect::WeakenOpponent { amount: 4, duration: 1 }),
        Card::new(CardId::new(4), "Bruiser", Faction::Forge, 7, 5)
            .with_on_win(Effect::BoostDamage { amount: 2, duration: 3 }),
        Card::new(CardId::new(5), "Leech", Faction::Circuit, 2, 1)
            .with_on_enter(Effect::DrainRespect { amount: 4 })
            .with_on_lose(Effect::GainRespect { amount: 6 }),
        Card::new(CardId::new(6), "Battery", Faction::Circuit, 6, 2)
            .with_on_win(Effect::GainEnergy { amount: 9 })
            .with_on_lose(Effect::DrainEnergy { amount: 20 }),
        Card::new(CardId::new(7), "Medic", Faction::Wild, 4, 2).with_on_enter(Effect::Cleanse),
        Card::new(CardId::new(8), "Giant", Faction::Forge, 10, 10),
    ])
    .unwrap()
}

fn hand_strategy() -> impl Strategy<Value = Vec<CardId>> {
    prop::collection::vec((1..=CARD_COUNT).prop_map(CardId::new), 4)
}

/// Play each hand front to back until the match ends, yielding every state.
fn play_out(
    catalog: &CardCatalog,
    config: &MatchConfig,
    h1: Vec<CardId>,
    h2: Vec<CardId>,
) -> Vec<GameState> {
    let mut states = vec![rules::start_match(catalog, config, h1, h2).unwrap()];
    loop {
        let state = states.last().unwrap();
        if state.is_complete() {
            return states;
        }
        let play1 = PlayedCard::new(state.player(PlayerId::Player1).hand[0]);
        let play2 = PlayedCard::new(state.player(PlayerId::Player2).hand[0]);
        let (next, _) = rules::resolve_round(catalog, config, state, play1, play2).unwrap();
        states.push(next);
    }
}

proptest! {
    #[test]
    fn prop_resources_stay_in_bounds(h1 in hand_strategy(), h2 in hand_strategy()) {
        let catalog = catalog();
        let config = MatchConfig::default();

        for state in play_out(&catalog, &config, h1, h2) {
            prop_assert!(state.validate(&config).is_ok());
            for (_, player) in state.players.iter() {
                prop_assert!(player.respect <= config.max_respect);
                prop_assert!(player.energy <= config.max_energy);
            }
        }
    }

    #[test]
    fn prop_history_grows_by_one(h1 in hand_strategy(), h2 in hand_strategy()) {
        let catalog = catalog();
        let config = MatchConfig::default();
        let states = play_out(&catalog, &config, h1, h2);

        prop_assert!(states.len() >= 2);
        prop_assert!(states.len() <= usize::from(config.max_rounds) + 1);
        for (i, state) in states.iter().enumerate() {
            prop_assert_eq!(state.round_history.len(), i);
        }
        for pair in states.windows(2) {
            prop_assert!(pair[1].round >= pair[0].round);
            prop_assert!(pair[1].round <= pair[0].round + 1);
        }

        let last = states.last().unwrap();
        prop_assert!(last.is_complete());
        prop_assert!(rules::winner(last, &MostRoundsWon).is_some());
    }

    #[test]
    fn prop_resolution_is_deterministic(h1 in hand_strategy(), h2 in hand_strategy()) {
        let catalog = catalog();
        let config = MatchConfig::default();

        let first = play_out(&catalog, &config, h1.clone(), h2.clone());
        let second = play_out(&catalog, &config, h1, h2);

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(bincode::serialize(a).unwrap(), bincode::serialize(b).unwrap());
        }
    }

    #[test]
    fn prop_aging_is_idempotent_per_round(h1 in hand_strategy(), h2 in hand_strategy()) {
        let catalog = catalog();
        let config = MatchConfig::default();

        for state in play_out(&catalog, &config, h1, h2).iter().skip(1) {
            let aged = state.round_history.last().unwrap().round;
            for (_, player) in state.players.iter() {
                let mut again = player.clone();
                prop_assert_eq!(EffectInterpreter::age(&mut again, aged), 0);
                prop_assert_eq!(&again, player);
            }
        }
    }
}
