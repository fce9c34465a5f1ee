//! Immutable waypoint catalog.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::models::{Waypoint, WaypointId};

/// An immutable, ordered table of waypoints, fixed for the process lifetime.
///
/// The catalog is the engine's only configuration: it is built once at
/// startup (from code or a JSON table) and shared read-only from then on.
/// Iteration order is declaration order, and the first entry doubles as the
/// anchor the nearest-neighbor heuristic starts from.
///
/// # Examples
///
/// ```
/// use tour_routing::models::{Waypoint, WaypointCatalog};
///
/// let catalog = WaypointCatalog::new(vec![
///     Waypoint::new(1, "New York", 40.7128, -74.0060).unwrap(),
///     Waypoint::new(2, "London", 51.5074, -0.1278).unwrap(),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.lookup(2).unwrap().name(), "London");
/// assert_eq!(catalog.anchor().id(), 1);
/// assert!(catalog.lookup(9).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct WaypointCatalog {
    waypoints: Vec<Waypoint>,
}

impl WaypointCatalog {
    /// Creates a catalog from a table of waypoints.
    ///
    /// Rejects an empty table and duplicate ids; declaration order is kept.
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, CatalogError> {
        if waypoints.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for waypoint in &waypoints {
            if !seen.insert(waypoint.id()) {
                return Err(CatalogError::DuplicateId { id: waypoint.id() });
            }
        }
        Ok(Self { waypoints })
    }

    /// Parses a catalog from a JSON array of waypoint records.
    ///
    /// The record format is `{"id", "name", "lat", "lng", "description"?}`.
    /// Records with out-of-range coordinates are rejected, as are the
    /// conditions checked by [`WaypointCatalog::new`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let waypoints: Vec<Waypoint> = serde_json::from_str(json)?;
        Self::new(waypoints)
    }

    /// The built-in twelve-city world table.
    pub fn world_cities() -> Self {
        Self {
            waypoints: vec![
                Waypoint::from_parts(1, "New York", 40.7128, -74.0060),
                Waypoint::from_parts(2, "London", 51.5074, -0.1278),
                Waypoint::from_parts(3, "Tokyo", 35.6762, 139.6503),
                Waypoint::from_parts(4, "Sydney", -33.8688, 151.2093),
                Waypoint::from_parts(5, "Rio de Janeiro", -22.9068, -43.1729),
                Waypoint::from_parts(6, "Cairo", 30.0444, 31.2357),
                Waypoint::from_parts(7, "Moscow", 55.7558, 37.6173),
                Waypoint::from_parts(8, "Beijing", 39.9042, 116.4074),
                Waypoint::from_parts(9, "Mumbai", 19.0760, 72.8777),
                Waypoint::from_parts(10, "Cape Town", -33.9249, 18.4241),
                Waypoint::from_parts(11, "Mexico City", 19.4326, -99.1332),
                Waypoint::from_parts(12, "Berlin", 52.5200, 13.4050),
            ],
        }
    }

    /// Returns the waypoint with the given id.
    ///
    /// Fails with [`CatalogError::NotFound`] for unknown ids. Ids normally
    /// come from this catalog, so a miss is an upstream programming error.
    pub fn lookup(&self, id: WaypointId) -> Result<&Waypoint, CatalogError> {
        self.get(id).ok_or(CatalogError::NotFound { id })
    }

    /// Returns the waypoint with the given id, or `None`.
    pub fn get(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.id() == id)
    }

    /// All waypoints in declaration order.
    pub fn all(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// The first table entry, used as the nearest-neighbor start.
    ///
    /// Catalogs are non-empty by construction.
    pub fn anchor(&self) -> &Waypoint {
        &self.waypoints[0]
    }

    /// Number of waypoints in the table.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns `true` if the table has no entries.
    ///
    /// Always `false` for a constructed catalog; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Returns `true` if the table contains the given id.
    pub fn contains(&self, id: WaypointId) -> bool {
        self.get(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;

    fn small_catalog() -> WaypointCatalog {
        WaypointCatalog::new(vec![
            Waypoint::new(1, "A", 0.0, 0.0).expect("valid"),
            Waypoint::new(2, "B", 0.0, 1.0).expect("valid"),
            Waypoint::new(3, "C", 0.0, 2.0).expect("valid"),
        ])
        .expect("valid table")
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = small_catalog();
        assert_eq!(catalog.lookup(2).expect("present").name(), "B");
        assert!(matches!(
            catalog.lookup(42),
            Err(CatalogError::NotFound { id: 42 })
        ));
    }

    #[test]
    fn test_catalog_order_is_declaration_order() {
        let catalog = small_catalog();
        let ids: Vec<_> = catalog.all().iter().map(|w| w.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.anchor().id(), 1);
    }

    #[test]
    fn test_catalog_rejects_empty() {
        assert!(matches!(
            WaypointCatalog::new(vec![]),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let result = WaypointCatalog::new(vec![
            Waypoint::new(1, "A", 0.0, 0.0).expect("valid"),
            Waypoint::new(1, "A again", 1.0, 1.0).expect("valid"),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId { id: 1 })));
    }

    #[test]
    fn test_catalog_contains() {
        let catalog = small_catalog();
        assert!(catalog.contains(1));
        assert!(!catalog.contains(4));
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog = WaypointCatalog::from_json_str(
            r#"[
                {"id": 1, "name": "New York", "lat": 40.7128, "lng": -74.0060},
                {"id": 2, "name": "London", "lat": 51.5074, "lng": -0.1278,
                 "description": "on the Thames"}
            ]"#,
        )
        .expect("valid table");
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.lookup(2).expect("present").description(),
            Some("on the Thames")
        );
    }

    #[test]
    fn test_catalog_from_json_rejects_malformed() {
        assert!(matches!(
            WaypointCatalog::from_json_str("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_catalog_from_json_rejects_bad_coordinates() {
        let result = WaypointCatalog::from_json_str(
            r#"[{"id": 1, "name": "Bad", "lat": 95.0, "lng": 0.0}]"#,
        );
        // Coordinate validation happens during record deserialization.
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_world_cities_table() {
        let catalog = WaypointCatalog::world_cities();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.anchor().name(), "New York");
        let ids: Vec<_> = catalog.all().iter().map(|w| w.id()).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
        assert_eq!(catalog.lookup(10).expect("present").name(), "Cape Town");
    }
}
