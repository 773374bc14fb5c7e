#![forbid(unsafe_code)]

//! Insertion-ordered storage for accepted events.

use std::collections::HashMap;

use dayview_core::{EventId, Interval};

/// A stored event and its current placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub interval: Interval,
    /// Horizontal lane; events sharing a column never collide.
    pub column: usize,
    /// Number of lanes the event's cluster is split into.
    pub lanes: usize,
}

impl Event {
    /// Endpoint-inclusive collision with another event.
    #[inline]
    #[must_use]
    pub fn collides_with(&self, other: &Event) -> bool {
        self.interval.collides_with(&other.interval)
    }
}

/// All events on a track, in insertion order.
///
/// Positions in the store are stable (events are never removed), so they
/// double as cheap handles for the cluster and column passes.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    occurrences: HashMap<(i64, i64), u32>,
    positions: HashMap<EventId, usize>,
}

impl EventStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an interval as a single-lane event in column 0. The new event
    /// always lands at position `len()` before the call; the caller is
    /// expected to place it afterwards.
    pub fn insert(&mut self, interval: Interval) -> EventId {
        let counter = self
            .occurrences
            .entry((interval.start(), interval.end()))
            .or_insert(0);
        let id = EventId::new(interval.start(), interval.end(), *counter);
        *counter += 1;

        let index = self.events.len();
        self.events.push(Event {
            id,
            interval,
            column: 0,
            lanes: 1,
        });
        self.positions.insert(id, index);
        id
    }

    /// All events in insertion order.
    #[inline]
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    /// Event at an insertion position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Event> {
        self.events.get_mut(index)
    }

    /// Insertion position of an event id.
    #[inline]
    pub fn position(&self, id: EventId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Look an event up by id.
    pub fn find(&self, id: EventId) -> Option<&Event> {
        self.position(id).and_then(|index| self.events.get(index))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: i64, end: i64) -> Interval {
        Interval::new(start, end).expect("valid interval")
    }

    #[test]
    fn insert_appends_in_order() {
        let mut store = EventStore::new();
        assert!(store.is_empty());
        let first = store.insert(iv(30, 150));
        let second = store.insert(iv(540, 600));
        assert_eq!(store.position(first), Some(0));
        assert_eq!(store.position(second), Some(1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[1].interval, iv(540, 600));
    }

    #[test]
    fn duplicate_intervals_get_distinct_ids() {
        let mut store = EventStore::new();
        let ids: Vec<String> = [iv(10, 20), iv(10, 20), iv(10, 30)]
            .into_iter()
            .map(|interval| store.insert(interval).to_string())
            .collect();
        assert_eq!(ids, ["10-20-0", "10-20-1", "10-30-0"]);
    }

    #[test]
    fn lookup_by_id_round_trips() {
        let mut store = EventStore::new();
        store.insert(iv(0, 10));
        let id = store.insert(iv(5, 15));
        assert_eq!(store.find(id).map(|e| e.interval), Some(iv(5, 15)));
        assert_eq!(store.find(EventId::new(5, 15, 9)), None);
    }

    #[test]
    fn fresh_events_start_unplaced() {
        let mut store = EventStore::new();
        let id = store.insert(iv(0, 10));
        let event = store.find(id).expect("stored");
        assert_eq!((event.column, event.lanes), (0, 1));
    }
}
