//! # tour-routing
//!
//! Closed-tour construction over a fixed catalog of geographic waypoints:
//! incremental selection with Haversine cost accounting, explicit tour
//! closing, and a greedy nearest-neighbor auto-completion heuristic.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Waypoint, WaypointCatalog, Tour, TourMetrics)
//! - [`distance`] — Great-circle and chord distance on the Earth sphere
//! - [`constructive`] — Constructive heuristics (Nearest Neighbor)
//! - [`engine`] — The stateful route engine and its notification contract
//! - [`error`] — Error types

pub mod constructive;
pub mod distance;
pub mod engine;
pub mod error;
pub mod models;
