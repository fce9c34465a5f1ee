//! Great-circle and chord distance on the Earth sphere.
//!
//! Two metrics live here on purpose. Cost accounting uses the great-circle
//! (Haversine) distance; the nearest-neighbor heuristic compares straight-line
//! chord distances between 3-D embeddings of the waypoints. The two are
//! monotonically related but not identical, and the heuristic's behavior is
//! kept as observed rather than corrected.

use crate::models::Waypoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two (lat, lng) pairs in degrees.
///
/// Standard Haversine formula over a sphere of radius
/// [`EARTH_RADIUS_KM`]. Returns kilometers; symmetric; zero iff the two
/// points coincide.
///
/// # Examples
///
/// ```
/// use tour_routing::distance::haversine_km;
///
/// // One degree of longitude on the equator is about 111.19 km.
/// let d = haversine_km(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lng2 - lng1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance between two waypoints, in kilometers.
pub fn haversine_between(a: &Waypoint, b: &Waypoint) -> f64 {
    haversine_km(a.lat(), a.lng(), b.lat(), b.lng())
}

/// A point on the Earth-radius sphere, embedded in 3-D space.
///
/// The axis convention matches the usual sphere parameterization with
/// `phi = 90° − lat` and `theta = lng + 180°`:
///
/// ```text
/// x = −R · sin(phi) · cos(theta)
/// y =  R · cos(phi)
/// z =  R · sin(phi) · sin(theta)
/// ```
///
/// Only the chord comparison uses these coordinates; the embedding never
/// feeds the cost accounting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpherePoint {
    x: f64,
    y: f64,
    z: f64,
}

impl SpherePoint {
    /// Embeds a (lat, lng) pair in degrees.
    pub fn from_lat_lng(lat: f64, lng: f64) -> Self {
        let phi = (90.0 - lat).to_radians();
        let theta = (lng + 180.0).to_radians();
        Self {
            x: -EARTH_RADIUS_KM * phi.sin() * theta.cos(),
            y: EARTH_RADIUS_KM * phi.cos(),
            z: EARTH_RADIUS_KM * phi.sin() * theta.sin(),
        }
    }

    /// Embeds a waypoint's coordinates.
    pub fn from_waypoint(waypoint: &Waypoint) -> Self {
        Self::from_lat_lng(waypoint.lat(), waypoint.lng())
    }

    /// Straight-line (chord) distance to another point, in kilometers.
    pub fn chord_km(&self, other: &SpherePoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z-coordinate.
    pub fn z(&self) -> f64 {
        self.z
    }
}
