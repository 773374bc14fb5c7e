#![forbid(unsafe_code)]

//! Column occupancy derived from a cluster.
//!
//! Answers "which columns are held at minute `m`" and "which columns are held
//! anywhere within a span" without materializing a per-minute table. A
//! member holds its column at every minute of its closed interval, so a
//! column is held somewhere inside `span` exactly when its holder collides
//! with `span`.

use std::collections::BTreeSet;

use dayview_core::Interval;

use crate::cluster::Cluster;
use crate::store::EventStore;

/// Snapshot of `(interval, column)` pairs for a set of cluster members.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    slots: Vec<(Interval, usize)>,
}

impl Occupancy {
    /// Occupancy of every member of `cluster`.
    pub fn of_cluster(store: &EventStore, cluster: &Cluster) -> Self {
        Self::collect(store, cluster, None)
    }

    /// Occupancy of every member of `cluster` except the one at `excluded`.
    pub fn of_cluster_without(store: &EventStore, cluster: &Cluster, excluded: usize) -> Self {
        Self::collect(store, cluster, Some(excluded))
    }

    fn collect(store: &EventStore, cluster: &Cluster, excluded: Option<usize>) -> Self {
        let slots = cluster
            .members()
            .iter()
            .filter(|&&index| Some(index) != excluded)
            .filter_map(|&index| store.get(index))
            .map(|event| (event.interval, event.column))
            .collect();
        Self { slots }
    }

    /// Columns held at a single minute.
    pub fn columns_at(&self, minute: i64) -> BTreeSet<usize> {
        self.slots
            .iter()
            .filter(|(interval, _)| interval.contains(minute))
            .map(|&(_, column)| column)
            .collect()
    }

    /// Columns held at any minute of `span`.
    pub fn columns_within(&self, span: &Interval) -> BTreeSet<usize> {
        self.slots
            .iter()
            .filter(|(interval, _)| interval.collides_with(span))
            .map(|&(_, column)| column)
            .collect()
    }

    /// Highest column held at any minute of `span`, if any.
    pub fn max_column_within(&self, span: &Interval) -> Option<usize> {
        self.slots
            .iter()
            .filter(|(interval, _)| interval.collides_with(span))
            .map(|&(_, column)| column)
            .max()
    }

    /// Lowest column not held at any minute of `span`.
    pub fn first_free_within(&self, span: &Interval) -> usize {
        let taken = self.columns_within(span);
        (0..).find(|column| !taken.contains(column)).unwrap_or(taken.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::cluster;

    fn iv(start: i64, end: i64) -> Interval {
        Interval::new(start, end).expect("valid interval")
    }

    /// Store with explicit columns, all in one cluster.
    fn placed(spans: &[(i64, i64, usize)]) -> (EventStore, Cluster) {
        let mut store = EventStore::new();
        for (index, &(start, end, column)) in spans.iter().enumerate() {
            store.insert(iv(start, end));
            if let Some(event) = store.get_mut(index) {
                event.column = column;
            }
        }
        let found = cluster(&store, 0);
        (store, found)
    }

    #[test]
    fn columns_at_matches_closed_intervals() {
        let (store, found) = placed(&[(540, 600, 0), (560, 620, 1), (610, 670, 0)]);
        let occ = Occupancy::of_cluster(&store, &found);
        assert_eq!(occ.columns_at(540), BTreeSet::from([0]));
        assert_eq!(occ.columns_at(600), BTreeSet::from([0, 1]));
        assert_eq!(occ.columns_at(605), BTreeSet::from([1]));
        assert_eq!(occ.columns_at(615), BTreeSet::from([0, 1]));
        assert!(occ.columns_at(700).is_empty());
    }

    #[test]
    fn columns_within_agrees_with_minute_scan() {
        let (store, found) = placed(&[(0, 30, 0), (20, 60, 1), (50, 90, 2), (85, 120, 0)]);
        let occ = Occupancy::of_cluster(&store, &found);
        for (start, end) in [(0, 10), (25, 55), (60, 84), (90, 200)] {
            let span = iv(start, end);
            let scanned: BTreeSet<usize> =
                (start..=end).flat_map(|m| occ.columns_at(m)).collect();
            assert_eq!(occ.columns_within(&span), scanned, "span {span}");
        }
    }

    #[test]
    fn exclusion_hides_one_member() {
        let (store, found) = placed(&[(0, 100, 0), (50, 150, 1)]);
        let occ = Occupancy::of_cluster_without(&store, &found, 1);
        assert_eq!(occ.columns_within(&iv(50, 150)), BTreeSet::from([0]));
        assert_eq!(occ.first_free_within(&iv(50, 150)), 1);
    }

    #[test]
    fn first_free_fills_gaps() {
        let (store, found) = placed(&[(0, 100, 0), (0, 100, 2)]);
        let occ = Occupancy::of_cluster(&store, &found);
        assert_eq!(occ.first_free_within(&iv(10, 20)), 1);
        assert_eq!(occ.max_column_within(&iv(10, 20)), Some(2));
        assert_eq!(occ.max_column_within(&iv(200, 300)), None);
    }
}
