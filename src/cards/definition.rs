//! Card definitions - static card data.
//!
//! A `Card` holds the immutable properties of one catalog entry: combat
//! stats, flavor, and the effect lists that fire when it is played.
//! Hands hold `CardId`s, never copies of `Card`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::EngineError;
use crate::effects::{Effect, RawEffect};

/// Lowest legal value for `power` and `damage`.
pub const MIN_STAT: u8 = 1;
/// Highest legal value for `power` and `damage`.
pub const MAX_STAT: u8 = 10;

/// Unique identifier for a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The six card factions. Flavor only; combat math ignores them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    Crown,
    Syndicate,
    Circuit,
    Wild,
    Veil,
    Forge,
}

/// Effect list attached to a trigger. Most cards carry zero to two effects.
pub type EffectList = SmallVec<[Effect; 2]>;

/// Static card definition.
///
/// ## Example
///
/// ```
/// use duel_engine::cards::{Card, CardId, Faction};
/// use duel_engine::effects::Effect;
///
/// let card = Card::new(CardId::new(1), "Street Brawler", Faction::Wild, 6, 3)
///     .with_keyword("brawler")
///     .with_on_enter(Effect::BoostPower { amount: 2, duration: 1 });
///
/// assert_eq!(card.on_enter.len(), 1);
/// assert!(card.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub faction: Faction,
    /// Base attack value, 1-10.
    pub power: u8,
    /// Respect dealt when this card wins a round, 1-10.
    pub damage: u8,
    pub text: String,
    pub keywords: BTreeSet<String>,
    pub on_enter: EffectList,
    pub on_win: EffectList,
    pub on_lose: EffectList,
}

impl Card {
    /// Create a card with no text, keywords, or effects.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        faction: Faction,
        power: u8,
        damage: u8,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            faction,
            power,
            damage,
            text: String::new(),
            keywords: BTreeSet::new(),
            on_enter: EffectList::new(),
            on_win: EffectList::new(),
            on_lose: EffectList::new(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.insert(keyword.into());
        self
    }

    /// Append an effect that fires when the card is played.
    #[must_use]
    pub fn with_on_enter(mut self, effect: Effect) -> Self {
        self.on_enter.push(effect);
        self
    }

    /// Append an effect that fires when the card wins its round.
    #[must_use]
    pub fn with_on_win(mut self, effect: Effect) -> Self {
        self.on_win.push(effect);
        self
    }

    /// Append an effect that fires when the card loses its round.
    #[must_use]
    pub fn with_on_lose(mut self, effect: Effect) -> Self {
        self.on_lose.push(effect);
        self
    }

    /// Check whether a keyword tag is present.
    #[must_use]
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    /// Check stat ranges.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (stat, value) in [("power", self.power), ("damage", self.damage)] {
            if !(MIN_STAT..=MAX_STAT).contains(&value) {
                return Err(EngineError::InvalidCard {
                    card: self.id,
                    reason: format!("{stat} {value} outside {MIN_STAT}..={MAX_STAT}"),
                });
            }
        }
        Ok(())
    }
}

/// Wire form of a card as stored in catalog data.
///
/// Effects stay in their raw name-plus-params form until
/// [`CardRecord::into_card`] resolves them.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: CardId,
    pub name: String,
    pub faction: Faction,
    pub power: u8,
    pub damage: u8,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub keywords: BTreeSet<String>,
    #[serde(default)]
    pub on_enter: Vec<RawEffect>,
    #[serde(default)]
    pub on_win: Vec<RawEffect>,
    #[serde(default)]
    pub on_lose: Vec<RawEffect>,
}

impl CardRecord {
    /// Resolve raw effects and validate stats.
    pub fn into_card(self) -> Result<Card, EngineError> {
        let parse = |raw: &[RawEffect]| -> Result<EffectList, EngineError> {
            raw.iter().map(Effect::parse).collect()
        };

        let card = Card {
            on_enter: parse(&self.on_enter)?,
            on_win: parse(&self.on_win)?,
            on_lose: parse(&self.on_lose)?,
            id: self.id,
            name: self.name,
            faction: self.faction,
            power: self.power,
            damage: self.damage,
            text: self.text,
            keywords: self.keywords,
        };
        card.validate()?;
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_card_builder() {
        let card = Card::new(CardId::new(1), "Test Card", Faction::Crown, 5, 2)
            .with_text("Does a thing")
            .with_keyword("loyal")
            .with_on_win(Effect::GainRespect { amount: 1 });

        assert_eq!(card.name, "Test Card");
        assert_eq!(card.power, 5);
        assert!(card.has_keyword("loyal"));
        assert!(!card.has_keyword("sly"));
        assert_eq!(card.on_win.as_slice(), &[Effect::GainRespect { amount: 1 }]);
        assert!(card.on_enter.is_empty());
    }

    #[test]
    fn test_validate_stat_range() {
        let zero_power = Card::new(CardId::new(1), "Weak", Faction::Veil, 0, 3);
        assert!(matches!(
            zero_power.validate(),
            Err(EngineError::InvalidCard { card, .. }) if card == CardId::new(1)
        ));

        let huge_damage = Card::new(CardId::new(2), "Huge", Faction::Veil, 5, 11);
        assert!(huge_damage.validate().is_err());

        let edge = Card::new(CardId::new(3), "Edge", Faction::Veil, 1, 10);
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_record_into_card() {
        let json = r#"{
            "id": 9,
            "name": "Enforcer",
            "faction": "syndicate",
            "power": 7,
            "damage": 3,
            "keywords": ["heavy"],
            "onEnter": [{"name": "boost_power", "params": {"amount": 2, "duration": 1}}],
            "onLose": [{"name": "drain_energy", "params": {"amount": 1}}]
        }"#;

        let record: CardRecord = serde_json::from_str(json).unwrap();
        let card = record.into_card().unwrap();

        assert_eq!(card.id, CardId::new(9));
        assert_eq!(card.faction, Faction::Syndicate);
        assert_eq!(card.on_enter.as_slice(), &[Effect::BoostPower { amount: 2, duration: 1 }]);
        assert_eq!(card.on_lose.as_slice(), &[Effect::DrainEnergy { amount: 1 }]);
        assert!(card.on_win.is_empty());
        assert!(card.has_keyword("heavy"));
    }

    #[test]
    fn test_record_with_unknown_effect() {
        let json = r#"{
            "id": 1, "name": "Glitch", "faction": "circuit", "power": 3, "damage": 3,
            "onWin": [{"name": "summon_dragon"}]
        }"#;

        let record: CardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.into_card(),
            Err(EngineError::UnknownEffect("summon_dragon".to_string()))
        );
    }
}
