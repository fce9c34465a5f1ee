//! Waypoint type.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Identifier of a waypoint within a catalog.
pub type WaypointId = u32;

/// A fixed, named geographic point.
///
/// Coordinates are degrees: latitude in [-90, 90], longitude in [-180, 180].
/// Waypoints are created once from the catalog table and never mutated.
///
/// # Examples
///
/// ```
/// use tour_routing::models::Waypoint;
///
/// let w = Waypoint::new(1, "London", 51.5074, -0.1278).unwrap();
/// assert_eq!(w.id(), 1);
/// assert_eq!(w.name(), "London");
///
/// assert!(Waypoint::new(2, "Nowhere", 91.0, 0.0).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWaypoint")]
pub struct Waypoint {
    id: WaypointId,
    name: String,
    lat: f64,
    lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Waypoint {
    /// Creates a new waypoint.
    ///
    /// Returns `None` if either coordinate is non-finite or outside its
    /// valid range.
    pub fn new(id: WaypointId, name: impl Into<String>, lat: f64, lng: f64) -> Option<Self> {
        if !valid_coordinates(lat, lng) {
            return None;
        }
        Some(Self {
            id,
            name: name.into(),
            lat,
            lng,
            description: None,
        })
    }

    // Builds a table entry whose coordinates are known valid.
    pub(crate) fn from_parts(id: WaypointId, name: &str, lat: f64, lng: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            lat,
            lng,
            description: None,
        }
    }

    /// Sets descriptive metadata for this waypoint.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Waypoint ID, unique within a catalog.
    pub fn id(&self) -> WaypointId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Descriptive metadata, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

fn valid_coordinates(lat: f64, lng: f64) -> bool {
    lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng)
}

/// Wire form of a waypoint record, validated into [`Waypoint`] on the way in.
#[derive(Deserialize)]
struct RawWaypoint {
    id: WaypointId,
    name: String,
    lat: f64,
    lng: f64,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<RawWaypoint> for Waypoint {
    type Error = CatalogError;

    fn try_from(raw: RawWaypoint) -> Result<Self, Self::Error> {
        if !valid_coordinates(raw.lat, raw.lng) {
            return Err(CatalogError::InvalidCoordinates {
                id: raw.id,
                lat: raw.lat,
                lng: raw.lng,
            });
        }
        Ok(Self {
            id: raw.id,
            name: raw.name,
            lat: raw.lat,
            lng: raw.lng,
            description: raw.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoint_new() {
        let w = Waypoint::new(3, "Tokyo", 35.6762, 139.6503).expect("valid");
        assert_eq!(w.id(), 3);
        assert_eq!(w.name(), "Tokyo");
        assert_eq!(w.lat(), 35.6762);
        assert_eq!(w.lng(), 139.6503);
        assert!(w.description().is_none());
    }

    #[test]
    fn test_waypoint_invalid_coordinates() {
        assert!(Waypoint::new(1, "a", 90.1, 0.0).is_none());
        assert!(Waypoint::new(1, "a", -90.1, 0.0).is_none());
        assert!(Waypoint::new(1, "a", 0.0, 180.1).is_none());
        assert!(Waypoint::new(1, "a", 0.0, -180.1).is_none());
        assert!(Waypoint::new(1, "a", f64::NAN, 0.0).is_none());
        assert!(Waypoint::new(1, "a", 0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_waypoint_boundary_coordinates() {
        assert!(Waypoint::new(1, "north pole", 90.0, 0.0).is_some());
        assert!(Waypoint::new(2, "antimeridian", 0.0, -180.0).is_some());
    }

    #[test]
    fn test_waypoint_with_description() {
        let w = Waypoint::new(5, "Rio de Janeiro", -22.9068, -43.1729)
            .expect("valid")
            .with_description("host of Carnival");
        assert_eq!(w.description(), Some("host of Carnival"));
    }

    #[test]
    fn test_waypoint_deserialize() {
        let w: Waypoint =
            serde_json::from_str(r#"{"id": 2, "name": "London", "lat": 51.5074, "lng": -0.1278}"#)
                .expect("valid record");
        assert_eq!(w.id(), 2);
        assert!(w.description().is_none());
    }

    #[test]
    fn test_waypoint_deserialize_rejects_bad_coordinates() {
        let result: Result<Waypoint, _> =
            serde_json::from_str(r#"{"id": 2, "name": "Bad", "lat": 123.0, "lng": 0.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_waypoint_roundtrip() {
        let w = Waypoint::new(7, "Moscow", 55.7558, 37.6173).expect("valid");
        let json = serde_json::to_string(&w).expect("serializes");
        let back: Waypoint = serde_json::from_str(&json).expect("parses");
        assert_eq!(back, w);
    }
}
