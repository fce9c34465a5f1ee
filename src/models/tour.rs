//! Tour and metrics types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::WaypointId;

/// The ordered sequence of waypoint ids selected in one session.
///
/// While open, the sequence holds each id at most once. Closing appends the
/// first id a second time at the end to represent the return edge, after
/// which the sequence stays fixed until [`Tour::clear`].
///
/// # Examples
///
/// ```
/// use tour_routing::models::Tour;
///
/// let mut tour = Tour::new();
/// tour.push(1);
/// tour.push(2);
/// tour.close();
/// assert_eq!(tour.sequence(), &[1, 2, 1]);
/// assert_eq!(tour.visited_count(), 2);
/// assert!(tour.is_closed());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    sequence: Vec<WaypointId>,
    is_closed: bool,
}

impl Tour {
    /// Creates an empty, open tour.
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            is_closed: false,
        }
    }

    /// Appends a waypoint id.
    ///
    /// The caller keeps the no-duplicates-while-open invariant; the engine
    /// checks [`Tour::contains`] before pushing.
    pub fn push(&mut self, id: WaypointId) {
        debug_assert!(!self.is_closed, "push on a closed tour");
        self.sequence.push(id);
    }

    /// Closes the tour by appending the first id again.
    ///
    /// No-op on an empty or already-closed tour.
    pub fn close(&mut self) {
        if self.is_closed {
            return;
        }
        if let Some(first) = self.sequence.first().copied() {
            self.sequence.push(first);
            self.is_closed = true;
        }
    }

    /// Empties the sequence and reopens the tour.
    pub fn clear(&mut self) {
        self.sequence.clear();
        self.is_closed = false;
    }

    /// Returns `true` if the id has already been selected.
    pub fn contains(&self, id: WaypointId) -> bool {
        self.sequence.contains(&id)
    }

    /// The id sequence in selection order (including the closing entry).
    pub fn sequence(&self) -> &[WaypointId] {
        &self.sequence
    }

    /// First selected id, if any.
    pub fn first(&self) -> Option<WaypointId> {
        self.sequence.first().copied()
    }

    /// Most recently appended id, if any.
    pub fn last(&self) -> Option<WaypointId> {
        self.sequence.last().copied()
    }

    /// Sequence length, counting the closing entry once added.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns `true` if nothing has been selected.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Number of distinct waypoints visited (the closing entry not counted).
    pub fn visited_count(&self) -> usize {
        if self.is_closed {
            self.sequence.len() - 1
        } else {
            self.sequence.len()
        }
    }

    /// Returns `true` once the return edge has been appended.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.sequence.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

/// Running travel cost of a tour.
///
/// Distance and energy only ever move together through
/// [`TourMetrics::add_segment`], so the two stay consistent with the
/// sequence they account for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TourMetrics {
    total_distance_km: f64,
    energy_units: u64,
}

impl TourMetrics {
    /// Creates zeroed metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts one segment: adds its distance and `round(distance / 100)`
    /// energy units.
    ///
    /// Energy is rounded per segment, not on the running total.
    pub fn add_segment(&mut self, distance_km: f64) {
        self.total_distance_km += distance_km;
        self.energy_units += (distance_km / 100.0).round() as u64;
    }

    /// Zeroes both metrics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sum of segment distances in kilometers.
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Sum of per-segment energy units.
    pub fn energy_units(&self) -> u64 {
        self.energy_units
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_empty() {
        let tour = Tour::new();
        assert!(tour.is_empty());
        assert!(!tour.is_closed());
        assert_eq!(tour.len(), 0);
        assert_eq!(tour.visited_count(), 0);
        assert_eq!(tour.first(), None);
        assert_eq!(tour.last(), None);
    }

    #[test]
    fn test_tour_push_order() {
        let mut tour = Tour::new();
        tour.push(3);
        tour.push(1);
        tour.push(2);
        assert_eq!(tour.sequence(), &[3, 1, 2]);
        assert_eq!(tour.first(), Some(3));
        assert_eq!(tour.last(), Some(2));
        assert!(tour.contains(1));
        assert!(!tour.contains(4));
    }

    #[test]
    fn test_tour_close_appends_first() {
        let mut tour = Tour::new();
        tour.push(5);
        tour.push(9);
        tour.close();
        assert!(tour.is_closed());
        assert_eq!(tour.sequence(), &[5, 9, 5]);
        assert_eq!(tour.len(), 3);
        assert_eq!(tour.visited_count(), 2);
    }

    #[test]
    fn test_tour_close_empty_is_noop() {
        let mut tour = Tour::new();
        tour.close();
        assert!(!tour.is_closed());
        assert!(tour.is_empty());
    }

    #[test]
    fn test_tour_close_twice_is_noop() {
        let mut tour = Tour::new();
        tour.push(1);
        tour.push(2);
        tour.close();
        tour.close();
        assert_eq!(tour.sequence(), &[1, 2, 1]);
    }

    #[test]
    fn test_tour_clear_reopens() {
        let mut tour = Tour::new();
        tour.push(1);
        tour.push(2);
        tour.close();
        tour.clear();
        assert!(tour.is_empty());
        assert!(!tour.is_closed());
    }

    #[test]
    fn test_tour_display() {
        let mut tour = Tour::new();
        assert_eq!(tour.to_string(), "");
        tour.push(1);
        tour.push(2);
        tour.close();
        assert_eq!(tour.to_string(), "1 → 2 → 1");
    }

    #[test]
    fn test_metrics_add_segment() {
        let mut metrics = TourMetrics::new();
        metrics.add_segment(250.0);
        assert!((metrics.total_distance_km() - 250.0).abs() < 1e-10);
        assert_eq!(metrics.energy_units(), 3);
    }

    #[test]
    fn test_metrics_energy_rounds_per_segment() {
        let mut metrics = TourMetrics::new();
        // Three 49 km segments: each rounds to 0, while the 147 km total
        // would round to 1.
        metrics.add_segment(49.0);
        metrics.add_segment(49.0);
        metrics.add_segment(49.0);
        assert_eq!(metrics.energy_units(), 0);
        assert!((metrics.total_distance_km() - 147.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_energy_rounds_half_up() {
        let mut metrics = TourMetrics::new();
        metrics.add_segment(50.0);
        assert_eq!(metrics.energy_units(), 1);
    }

    #[test]
    fn test_metrics_reset() {
        let mut metrics = TourMetrics::new();
        metrics.add_segment(1234.0);
        metrics.reset();
        assert_eq!(metrics.total_distance_km(), 0.0);
        assert_eq!(metrics.energy_units(), 0);
    }
}
