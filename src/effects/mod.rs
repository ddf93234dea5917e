//! Effect system for card abilities.
//!
//! - `Effect`: Closed set of built-in effects
//! - `RawEffect`: Name-plus-params form used in card data
//! - `ActiveEffect`: A duration-bound modifier attached to a player
//! - `EffectInterpreter`: Applies effects and ages attachments
//!
//! ## Design Philosophy
//!
//! Card data stays declarative: a card lists effect names and parameters.
//! The catalog resolves names once, at load time, into `Effect` variants,
//! so the interpreter never sees a name it does not know.

mod active;
mod effect;
mod interpreter;

pub use active::{ActiveEffect, ActiveEffectId, EffectIds, Modifier};
pub use effect::{Effect, RawEffect};
pub use interpreter::EffectInterpreter;
