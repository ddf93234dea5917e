//! Card system: definitions and the read-only catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for catalog entries
//! - `Faction`: One of six fixed card categories
//! - `Card`: Static card data with effect lists
//! - `CardRecord`: Wire form of a card with unresolved effects
//! - `CardCatalog`: Card lookup, loading, and hand dealing

pub mod definition;
pub mod registry;

pub use definition::{Card, CardId, CardRecord, EffectList, Faction, MAX_STAT, MIN_STAT};
pub use registry::CardCatalog;
