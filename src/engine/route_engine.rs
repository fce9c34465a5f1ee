//! The route construction engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constructive::nearest_neighbor_order;
use crate::distance::haversine_between;
use crate::engine::{EventKind, RouteEvent, RouteObserver};
use crate::error::RouteError;
use crate::models::{Tour, TourMetrics, WaypointCatalog, WaypointId};

/// Lifecycle state of the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineState {
    /// Empty tour, nothing selected yet.
    #[default]
    Idle,
    /// One or more waypoints selected, tour not closed.
    Building,
    /// Tour closed; terminal until reset.
    Complete,
}

/// A read-only view of the engine state after some sequence of operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSnapshot {
    /// Current lifecycle state.
    pub state: EngineState,
    /// Selection order, including the closing entry once the tour is closed.
    pub sequence: Vec<WaypointId>,
    /// Running great-circle distance in kilometers.
    pub total_distance_km: f64,
    /// Running energy units.
    pub energy_units: u64,
    /// Number of distinct waypoints visited.
    pub visited_count: usize,
}

/// Builds a closed tour over a catalog of waypoints, one selection at a time.
///
/// The engine owns the tour and its metrics for one session and borrows the
/// shared, read-only catalog. All operations are synchronous and run to
/// completion on the calling thread; failed operations leave the state
/// unchanged.
///
/// # Examples
///
/// ```
/// use tour_routing::engine::{EngineState, RouteEngine};
/// use tour_routing::models::WaypointCatalog;
///
/// let catalog = WaypointCatalog::world_cities();
/// let mut engine = RouteEngine::new(&catalog);
///
/// assert!(engine.select(1).unwrap());
/// assert!(engine.select(2).unwrap());
/// assert!(!engine.select(2).unwrap()); // duplicate: silent no-op
///
/// engine.complete().unwrap();
/// let snapshot = engine.snapshot();
/// assert_eq!(snapshot.state, EngineState::Complete);
/// assert_eq!(snapshot.sequence, vec![1, 2, 1]);
/// assert!(snapshot.total_distance_km > 0.0);
/// ```
pub struct RouteEngine<'a> {
    catalog: &'a WaypointCatalog,
    tour: Tour,
    metrics: TourMetrics,
    state: EngineState,
    observers: Vec<Box<dyn RouteObserver + 'a>>,
}

impl<'a> RouteEngine<'a> {
    /// Creates an idle engine over the given catalog.
    pub fn new(catalog: &'a WaypointCatalog) -> Self {
        Self {
            catalog,
            tour: Tour::new(),
            metrics: TourMetrics::new(),
            state: EngineState::Idle,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for state-change notifications.
    ///
    /// Each state-changing call emits exactly one event per mutation, after
    /// the mutation has been applied.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: RouteObserver + 'a,
    {
        self.observers.push(Box::new(observer));
    }

    /// Appends a waypoint to the tour.
    ///
    /// Returns `Ok(true)` if the selection was applied. Selecting an
    /// already-selected waypoint, or selecting while the tour is complete,
    /// is a silent no-op returning `Ok(false)` with no event emitted.
    /// An id missing from the catalog is an upstream bug and fails with
    /// [`crate::error::CatalogError::NotFound`].
    pub fn select(&mut self, id: WaypointId) -> Result<bool, RouteError> {
        let waypoint = self.catalog.lookup(id)?;
        if self.state == EngineState::Complete || self.tour.contains(id) {
            debug!(id, state = ?self.state, "selection ignored");
            return Ok(false);
        }
        if let Some(prev_id) = self.tour.last() {
            let prev = self.catalog.lookup(prev_id)?;
            let distance_km = haversine_between(prev, waypoint);
            self.metrics.add_segment(distance_km);
        }
        self.tour.push(id);
        self.state = EngineState::Building;
        debug!(
            id,
            waypoints = self.tour.len(),
            total_distance_km = self.metrics.total_distance_km(),
            "waypoint selected"
        );
        self.emit(EventKind::Selected);
        Ok(true)
    }

    /// Closes the tour with a return edge to the first waypoint.
    ///
    /// Valid only while building with at least two selections; otherwise
    /// fails with [`RouteError::PreconditionFailed`] and changes nothing.
    pub fn complete(&mut self) -> Result<(), RouteError> {
        let actual = self.tour.visited_count();
        if self.state != EngineState::Building || actual < 2 {
            return Err(RouteError::PreconditionFailed { needed: 2, actual });
        }
        let sequence = self.tour.sequence();
        let (first_id, last_id) = (sequence[0], sequence[sequence.len() - 1]);
        let first = self.catalog.lookup(first_id)?;
        let last = self.catalog.lookup(last_id)?;
        self.metrics.add_segment(haversine_between(last, first));
        self.tour.close();
        self.state = EngineState::Complete;
        info!(
            waypoints = self.tour.visited_count(),
            total_distance_km = self.metrics.total_distance_km(),
            energy_units = self.metrics.energy_units(),
            "tour completed"
        );
        self.emit(EventKind::Completed);
        Ok(())
    }

    /// Clears the tour and returns to [`EngineState::Idle`].
    ///
    /// Valid in every state; always succeeds.
    pub fn reset(&mut self) {
        self.tour.clear();
        self.metrics.reset();
        self.state = EngineState::Idle;
        info!("engine reset");
        self.emit(EventKind::Reset);
    }

    /// Discards the current tour and rebuilds it with the nearest-neighbor
    /// heuristic, then closes it.
    ///
    /// The guard requires that the tour being discarded already has at least
    /// two selections; with fewer it fails with
    /// [`RouteError::PreconditionFailed`] and changes nothing. The rebuilt
    /// tour starts at the catalog anchor and covers every catalog waypoint.
    /// Each internal selection emits its own event, so observers see the
    /// intermediate tour states.
    pub fn optimize(&mut self) -> Result<(), RouteError> {
        let actual = self.tour.visited_count();
        if actual < 2 {
            return Err(RouteError::PreconditionFailed { needed: 2, actual });
        }
        self.reset();
        for id in nearest_neighbor_order(self.catalog) {
            self.select(id)?;
        }
        self.complete()?;
        info!(
            waypoints = self.tour.visited_count(),
            total_distance_km = self.metrics.total_distance_km(),
            energy_units = self.metrics.energy_units(),
            "tour optimized"
        );
        Ok(())
    }

    /// Returns a snapshot of the current state. Pure read, no side effects.
    pub fn snapshot(&self) -> RouteSnapshot {
        RouteSnapshot {
            state: self.state,
            sequence: self.tour.sequence().to_vec(),
            total_distance_km: self.metrics.total_distance_km(),
            energy_units: self.metrics.energy_units(),
            visited_count: self.tour.visited_count(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// The tour being built.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Running great-circle distance in kilometers.
    pub fn total_distance_km(&self) -> f64 {
        self.metrics.total_distance_km()
    }

    /// Running energy units.
    pub fn energy_units(&self) -> u64 {
        self.metrics.energy_units()
    }

    /// The catalog this engine selects from.
    pub fn catalog(&self) -> &'a WaypointCatalog {
        self.catalog
    }

    fn emit(&mut self, kind: EventKind) {
        if self.observers.is_empty() {
            return;
        }
        let event = RouteEvent {
            kind,
            sequence: self.tour.sequence().to_vec(),
            total_distance_km: self.metrics.total_distance_km(),
            energy_units: self.metrics.energy_units(),
        };
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}
