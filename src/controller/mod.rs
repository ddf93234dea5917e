//! Reference match controller.
//!
//! - `MatchController`: collects plays, drives the resolver, logs progress
//! - `MatchSnapshot`: serializable state plus rules for storage/transport
//!
//! The controller is the only place the crate logs. Install a `tracing`
//! subscriber in the host application to see match events.

mod session;
mod snapshot;

pub use session::MatchController;
pub use snapshot::MatchSnapshot;
