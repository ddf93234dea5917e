//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition for a match. It is
//! built once, then shared read-only (typically behind an `Arc`) by any
//! number of concurrently running matches.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::definition::{Card, CardId, CardRecord};
use crate::core::{CatalogError, EngineError, GameRng};

/// Read-only table of card definitions.
///
/// ## Example
///
/// ```
/// use duel_engine::cards::{Card, CardCatalog, CardId, Faction};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::new(CardId::new(1), "Bouncer", Faction::Crown, 6, 2)).unwrap();
///
/// let found = catalog.lookup(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Bouncer");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from card definitions.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, EngineError> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.register(card)?;
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON array of card records.
    ///
    /// Every effect name is resolved here, so an unknown effect fails the
    /// whole load rather than surfacing mid-match.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CardRecord> = serde_json::from_str(json)?;
        let count = records.len();

        let mut catalog = Self::new();
        for record in records {
            catalog.register(record.into_card()?)?;
        }

        debug!(cards = count, "loaded card catalog");
        Ok(catalog)
    }

    /// Register a card definition after validating its stats.
    pub fn register(&mut self, card: Card) -> Result<(), EngineError> {
        card.validate()?;
        if self.cards.contains_key(&card.id) {
            return Err(EngineError::DuplicateCard(card.id));
        }
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Look up a card definition.
    pub fn lookup(&self, id: CardId) -> Result<&Card, EngineError> {
        self.cards.get(&id).ok_or(EngineError::CardNotFound(id))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All card IDs in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        let mut ids: Vec<_> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over all card definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Deal a hand of `size` cards, drawn with replacement.
    ///
    /// Draws from the sorted id list so the same seed always yields
    /// the same hand regardless of map iteration order.
    pub fn deal_hand(&self, rng: &mut GameRng, size: usize) -> Vec<CardId> {
        let ids = self.ids();
        if ids.is_empty() {
            return Vec::new();
        }
        (0..size).map(|_| ids[rng.gen_index(ids.len())]).collect()
    }
}
