//! In-memory departure store.
//!
//! The store keeps departures ordered by destination. Ordering is restored
//! after every insertion with a stable sort, so departures sharing a
//! destination stay in the order they were added.

use tracing::debug;

use crate::domain::{Departure, DepartureTime};

/// Ordered collection of departures for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartureStore {
    departures: Vec<Departure>,
}

impl DepartureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from departures read elsewhere.
    ///
    /// The given order is kept as is until the next insertion.
    pub fn from_departures(departures: Vec<Departure>) -> Self {
        Self { departures }
    }

    /// Add a departure and re-sort by destination.
    pub fn insert(&mut self, departure: Departure) {
        debug!(
            destination = %departure.destination,
            number = departure.number,
            time = %departure.time,
            "inserting departure"
        );
        self.departures.push(departure);
        self.departures.sort_by(|a, b| a.destination.cmp(&b.destination));
    }

    /// Replace the whole contents of the store.
    pub fn replace(&mut self, departures: Vec<Departure>) {
        self.departures = departures;
    }

    /// Drop every departure.
    pub fn clear(&mut self) {
        self.departures.clear();
    }

    /// All departures in store order.
    pub fn departures(&self) -> &[Departure] {
        &self.departures
    }

    /// Departures leaving strictly after `time`, in store order.
    pub fn later_than(&self, time: DepartureTime) -> impl Iterator<Item = &Departure> {
        self.departures.iter().filter(move |d| d.departs_after(time))
    }

    /// Number of departures.
    pub fn len(&self) -> usize {
        self.departures.len()
    }

    /// Whether the store holds no departures.
    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }
}
