//! Notification contract between the engine and its presentation layer.

use serde::{Deserialize, Serialize};

use crate::models::WaypointId;

/// What kind of state change an event reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A waypoint was appended to the tour.
    Selected,
    /// The tour was closed back to its first waypoint.
    Completed,
    /// The engine returned to its initial state.
    Reset,
}

/// A state-change notification.
///
/// Self-contained snapshot of the tour after the mutation, cheap to clone
/// and serializable so a presentation layer can forward it as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEvent {
    /// The state change being reported.
    pub kind: EventKind,
    /// The id sequence after the mutation.
    pub sequence: Vec<WaypointId>,
    /// Running great-circle distance in kilometers.
    pub total_distance_km: f64,
    /// Running energy units.
    pub energy_units: u64,
}

/// Receives engine notifications.
///
/// Every state-changing engine call emits exactly one event per mutation,
/// after the mutation has been applied. Closures over `&RouteEvent` are
/// observers too:
///
/// ```
/// use tour_routing::engine::{RouteEngine, RouteEvent};
/// use tour_routing::models::WaypointCatalog;
///
/// let catalog = WaypointCatalog::world_cities();
/// let mut engine = RouteEngine::new(&catalog);
/// engine.subscribe(|event: &RouteEvent| println!("{:?}", event.kind));
/// ```
pub trait RouteObserver {
    /// Called after each engine mutation.
    fn on_event(&mut self, event: &RouteEvent);
}

impl<F: FnMut(&RouteEvent)> RouteObserver for F {
    fn on_event(&mut self, event: &RouteEvent) {
        self(event)
    }
}
