//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour ordering greedily: starting from the catalog anchor, always
//! travel to the nearest unvisited waypoint. "Nearest" compares chord
//! distances between the waypoints' 3-D sphere embeddings, not great-circle
//! distances; the engine accounts cost in great-circle kilometers regardless.
//!
//! # Complexity
//!
//! O(n²) where n = number of waypoints.
//!
//! # Reference
//!
//! The simplest constructive heuristic for TSP-style tours. Solution quality
//! is typically well above optimal, but the result is deterministic for a
//! fixed anchor and tie-break rule.

use crate::distance::SpherePoint;
use crate::models::{WaypointCatalog, WaypointId};

/// Computes a greedy nearest-neighbor ordering over the full catalog.
///
/// Starts at the catalog anchor (the first table entry) and repeatedly
/// appends the unvisited waypoint with the smallest chord distance to the
/// current tail. Ties break to the earliest catalog entry. Returns an OPEN
/// ordering: every waypoint exactly once, no closing entry.
///
/// # Examples
///
/// ```
/// use tour_routing::constructive::nearest_neighbor_order;
/// use tour_routing::models::{Waypoint, WaypointCatalog};
///
/// let catalog = WaypointCatalog::new(vec![
///     Waypoint::new(1, "A", 0.0, 0.0).unwrap(),
///     Waypoint::new(2, "far", 0.0, 10.0).unwrap(),
///     Waypoint::new(3, "near", 0.0, 1.0).unwrap(),
/// ])
/// .unwrap();
///
/// // From A the nearest is "near", then "far".
/// assert_eq!(nearest_neighbor_order(&catalog), vec![1, 3, 2]);
/// ```
pub fn nearest_neighbor_order(catalog: &WaypointCatalog) -> Vec<WaypointId> {
    let waypoints = catalog.all();
    let n = waypoints.len();
    let points: Vec<SpherePoint> = waypoints.iter().map(SpherePoint::from_waypoint).collect();

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = 0;
    visited[0] = true;
    order.push(waypoints[0].id());

    for _ in 1..n {
        // Find the nearest unvisited waypoint; strict < keeps the earliest
        // catalog entry on ties.
        let mut best: Option<(usize, f64)> = None;
        for i in 0..n {
            if visited[i] {
                continue;
            }
            let d = points[current].chord_km(&points[i]);
            if best.is_none() || d < best.expect("checked is_none").1 {
                best = Some((i, d));
            }
        }

        if let Some((next, _)) = best {
            visited[next] = true;
            order.push(waypoints[next].id());
            current = next;
        }
    }

    order
}
