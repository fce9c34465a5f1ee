//! Distance metrics on the Earth sphere.
//!
//! Great-circle (Haversine) distance for cost accounting, and the 3-D
//! sphere embedding with chord distance for the nearest-neighbor comparison.

mod sphere;

pub use sphere::{haversine_between, haversine_km, SpherePoint, EARTH_RADIUS_KM};
