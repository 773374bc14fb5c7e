#![forbid(unsafe_code)]

//! First-fit column assignment.

use crate::cluster::Cluster;
use crate::occupancy::Occupancy;
use crate::store::EventStore;

/// Pick the lowest column that no other member of `cluster` holds at any
/// minute of the event at `index`.
///
/// Other members keep their columns; nothing is compacted. Since at most
/// `cluster.len() - 1` other members can be in the way, the result is always
/// below `cluster.len()`.
pub fn assign(store: &EventStore, index: usize, cluster: &Cluster) -> usize {
    let Some(event) = store.get(index) else {
        return 0;
    };
    let column =
        Occupancy::of_cluster_without(store, cluster, index).first_free_within(&event.interval);
    debug_assert!(column < cluster.len().max(1));
    column
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::cluster;
    use dayview_core::Interval;

    /// Insert spans one by one, assigning each a column as it arrives.
    fn assign_all(spans: &[(i64, i64)]) -> Vec<usize> {
        let mut store = EventStore::new();
        for &(start, end) in spans {
            let index = store.len();
            store.insert(Interval::new(start, end).expect("valid interval"));
            let found = cluster(&store, index);
            let column = assign(&store, index, &found);
            if let Some(event) = store.get_mut(index) {
                event.column = column;
            }
        }
        store.all().iter().map(|e| e.column).collect()
    }

    #[test]
    fn lone_event_takes_column_zero() {
        assert_eq!(assign_all(&[(30, 150)]), [0]);
    }

    #[test]
    fn overlapping_pair_splits() {
        assert_eq!(assign_all(&[(540, 600), (560, 620)]), [0, 1]);
    }

    #[test]
    fn non_colliding_cluster_member_reuses_column() {
        // (610, 670) only collides with (560, 620), so column 0 is free again.
        assert_eq!(assign_all(&[(540, 600), (560, 620), (610, 670)]), [0, 1, 0]);
    }

    #[test]
    fn touching_endpoints_need_separate_columns() {
        assert_eq!(assign_all(&[(0, 100), (100, 200)]), [0, 1]);
    }

    #[test]
    fn gap_below_is_filled_first() {
        // Column 1 frees up after 50; the last event fits there, not in 3.
        let columns = assign_all(&[(0, 100), (0, 50), (0, 100), (60, 90)]);
        assert_eq!(columns, [0, 1, 2, 1]);
    }

    #[test]
    fn columns_are_not_compacted() {
        let columns = assign_all(&[(0, 100), (0, 100), (0, 100), (200, 300)]);
        assert_eq!(columns, [0, 1, 2, 0]);
    }

    #[test]
    fn out_of_range_index_defaults_to_zero() {
        let store = EventStore::new();
        assert_eq!(assign(&store, 3, &Cluster::default()), 0);
    }
}
