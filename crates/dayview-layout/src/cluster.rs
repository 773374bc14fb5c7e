#![forbid(unsafe_code)]

//! Transitive collision clusters.
//!
//! A cluster is the connected component of the collision graph that contains
//! a given event. Membership can grow as events arrive (a new event may
//! bridge two previously separate clusters), so clusters are never cached:
//! they are recomputed from the store on every insertion.

use std::collections::BTreeSet;

use crate::store::{Event, EventStore};

/// Store positions of the events in one cluster, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cluster {
    members: Vec<usize>,
}

impl Cluster {
    /// Member positions, ascending (insertion order).
    #[inline]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the event at `index` belongs to the cluster.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.members.binary_search(&index).is_ok()
    }

    /// Member events in insertion order.
    pub fn events<'a>(&'a self, store: &'a EventStore) -> impl Iterator<Item = &'a Event> + 'a {
        self.members.iter().filter_map(|&index| store.get(index))
    }
}

/// Collect every event reachable from `seed` through the collision relation,
/// `seed` included.
///
/// Uses an explicit worklist and visited set, so long chains cannot blow the
/// stack and cycles terminate. Each step scans the whole store, giving
/// O(n²) work per call in the worst case.
pub fn cluster(store: &EventStore, seed: usize) -> Cluster {
    let events = store.all();
    if seed >= events.len() {
        return Cluster::default();
    }

    let mut visited = BTreeSet::from([seed]);
    let mut worklist = vec![seed];
    while let Some(current) = worklist.pop() {
        let event = &events[current];
        for (index, other) in events.iter().enumerate() {
            if !visited.contains(&index) && event.collides_with(other) {
                visited.insert(index);
                worklist.push(index);
            }
        }
    }

    dayview_core::trace!(
        seed = %events[seed].id,
        size = visited.len(),
        "cluster resolved"
    );

    Cluster {
        members: visited.into_iter().collect(),
    }
}
