#![forbid(unsafe_code)]

//! Cluster-wide width sharing.
//!
//! Every member of a cluster gets the same column width. For each member the
//! highest column held anywhere within its span decides a candidate width
//! `track.width / (max_column + 1)`; the cluster uses the narrowest
//! candidate so that all of its columns line up, even where local crowding
//! is lower than in the busiest sub-range.

use dayview_core::{EventGeometry, Track};

use crate::cluster::Cluster;
use crate::occupancy::Occupancy;
use crate::store::EventStore;

/// Number of lanes the cluster must be split into.
///
/// Equivalent to picking the minimum candidate width: `track.width / lanes`.
/// An empty or singleton cluster has one lane.
pub fn lanes(store: &EventStore, cluster: &Cluster) -> usize {
    let occupancy = Occupancy::of_cluster(store, cluster);
    cluster
        .events(store)
        .filter_map(|event| occupancy.max_column_within(&event.interval))
        .map(|max_column| max_column + 1)
        .max()
        .unwrap_or(1)
}

/// Recompute the shared width for `cluster`, store each member's lane count,
/// and return the new geometry of every member in insertion order.
pub fn recompute(store: &mut EventStore, cluster: &Cluster, track: &Track) -> Vec<EventGeometry> {
    let lanes = lanes(store, cluster);
    let mut placed = Vec::with_capacity(cluster.len());
    for &index in cluster.members() {
        if let Some(event) = store.get_mut(index) {
            event.lanes = lanes;
            placed.push(track.place(event.id, event.interval, event.column, lanes));
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::cluster;
    use dayview_core::Interval;

    fn track() -> Track {
        Track::new(600.0, 1440.0, 0, 1440)
    }

    fn placed(spans: &[(i64, i64, usize)]) -> EventStore {
        let mut store = EventStore::new();
        for (index, &(start, end, column)) in spans.iter().enumerate() {
            store.insert(Interval::new(start, end).expect("valid interval"));
            if let Some(event) = store.get_mut(index) {
                event.column = column;
            }
        }
        store
    }

    #[test]
    fn singleton_gets_full_width() {
        let mut store = placed(&[(30, 150, 0)]);
        let found = cluster(&store, 0);
        let geometry = recompute(&mut store, &found, &track());
        assert_eq!(geometry.len(), 1);
        assert_eq!(geometry[0].width, 600.0);
        assert_eq!(geometry[0].left, 0.0);
    }

    #[test]
    fn pair_shares_width() {
        let mut store = placed(&[(540, 600, 0), (560, 620, 1)]);
        let found = cluster(&store, 1);
        let geometry = recompute(&mut store, &found, &track());
        let boxes: Vec<(f64, f64)> = geometry.iter().map(|g| (g.left, g.width)).collect();
        assert_eq!(boxes, [(0.0, 300.0), (300.0, 300.0)]);
        assert!(store.all().iter().all(|e| e.lanes == 2));
    }

    #[test]
    fn busiest_subrange_sets_width_for_everyone() {
        // Four columns are only in use around minutes 55..60, yet the late
        // member that sits alone in column 0 still gets a quarter.
        let mut store = placed(&[
            (0, 60, 0),
            (0, 60, 1),
            (0, 60, 2),
            (55, 200, 3),
            (150, 300, 0),
        ]);
        let found = cluster(&store, 0);
        assert_eq!(lanes(&store, &found), 4);
        let geometry = recompute(&mut store, &found, &track());
        assert!(geometry.iter().all(|g| g.width == 150.0));
        assert_eq!(geometry[3].left, 450.0);
        assert_eq!(geometry[4].left, 0.0);
    }

    #[test]
    fn unrelated_clusters_are_untouched() {
        let mut store = placed(&[(0, 10, 0), (5, 15, 1), (500, 600, 0)]);
        let first = cluster(&store, 0);
        recompute(&mut store, &first, &track());
        assert_eq!(store.all()[2].lanes, 1);
        assert_eq!(store.all()[0].lanes, 2);
    }

    #[test]
    fn empty_cluster_has_one_lane() {
        let store = EventStore::new();
        assert_eq!(lanes(&store, &Cluster::default()), 1);
    }
}
