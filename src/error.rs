//! Error types.

use thiserror::Error;

use crate::models::WaypointId;

/// Errors raised by catalog construction and lookup.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Lookup with an id that is not in the table. Ids reaching the engine
    /// come from the catalog itself, so this indicates an upstream bug
    /// rather than a user-facing condition.
    #[error("waypoint {id} is not in the catalog")]
    NotFound {
        /// The unknown id.
        id: WaypointId,
    },
    /// Two table entries share an id.
    #[error("duplicate waypoint id {id} in catalog table")]
    DuplicateId {
        /// The repeated id.
        id: WaypointId,
    },
    /// The table has no entries.
    #[error("catalog table is empty")]
    Empty,
    /// A record carries a latitude or longitude outside the valid range.
    #[error("invalid coordinates ({lat}, {lng}) for waypoint {id}")]
    InvalidCoordinates {
        /// The offending record's id.
        id: WaypointId,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },
    /// The JSON table could not be parsed.
    #[error("malformed catalog table")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by route engine operations.
#[derive(Error, Debug)]
pub enum RouteError {
    /// The operation needs more selected waypoints than the tour has.
    /// The engine state is left unchanged.
    #[error("need at least {needed} waypoints, have {actual}")]
    PreconditionFailed {
        /// Minimum number of selected waypoints required.
        needed: usize,
        /// Number currently selected.
        actual: usize,
    },
    /// A catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_message() {
        let err = RouteError::PreconditionFailed {
            needed: 2,
            actual: 1,
        };
        assert_eq!(err.to_string(), "need at least 2 waypoints, have 1");
    }

    #[test]
    fn test_catalog_error_wraps() {
        let err = RouteError::from(CatalogError::NotFound { id: 99 });
        assert_eq!(err.to_string(), "waypoint 99 is not in the catalog");
    }
}
