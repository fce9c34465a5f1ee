//! The stateful route engine and its notification contract.
//!
//! [`RouteEngine`] owns one tour-in-progress, enforces the selection
//! invariants, accounts distance and energy incrementally, and drives the
//! nearest-neighbor auto-completion. State changes are delivered to
//! [`RouteObserver`]s as [`RouteEvent`]s.

mod events;
mod route_engine;

pub use events::{EventKind, RouteEvent, RouteObserver};
pub use route_engine::{EngineState, RouteEngine, RouteSnapshot};
