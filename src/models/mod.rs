//! Domain model types for tour construction.
//!
//! Provides the core abstractions: waypoints with geographic coordinates,
//! the immutable catalog they live in, the tour being built, and its
//! running cost metrics.

mod catalog;
mod tour;
mod waypoint;

pub use catalog::WaypointCatalog;
pub use tour::{Tour, TourMetrics};
pub use waypoint::{Waypoint, WaypointId};
