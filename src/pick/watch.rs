//! Post-pick notifications for objects whose expensive work depends on being picked

use std::collections::{HashMap, HashSet};

use crate::scene::ObjectId;

/// Told after each scan whether its object ended up in the hit set.
pub trait PickWatcher {
    fn set_needs_processing(&mut self, needs_processing: bool);
}

impl<F: FnMut(bool)> PickWatcher for F {
    fn set_needs_processing(&mut self, needs_processing: bool) {
        self(needs_processing)
    }
}

/// Watchers registered for a single pick call, keyed by the object they watch.
#[derive(Default)]
pub struct WatchList<'w> {
    watchers: HashMap<ObjectId, Vec<&'w mut dyn PickWatcher>>,
}

impl<'w> WatchList<'w> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Watch `id`; an object may have several watchers.
    pub fn register(&mut self, id: ObjectId, watcher: &'w mut dyn PickWatcher) {
        self.watchers.entry(id).or_default().push(watcher);
    }

    /// Drop every watcher of `id`, returning how many there were.
    pub fn unregister(&mut self, id: ObjectId) -> usize {
        self.watchers.remove(&id).map_or(0, |list| list.len())
    }

    pub fn is_watched(&self, id: ObjectId) -> bool {
        self.watchers.contains_key(&id)
    }

    pub fn watched_ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.watchers.keys().copied()
    }

    /// Number of watched objects.
    pub fn len(&self) -> usize {
        self.watchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watchers.is_empty()
    }

    /// Tell every watcher whether its object is in `picked`.
    pub(crate) fn notify(&mut self, picked: &HashSet<ObjectId>) {
        for (id, list) in &mut self.watchers {
            let needs_processing = picked.contains(id);
            for watcher in list.iter_mut() {
                watcher.set_needs_processing(needs_processing);
            }
        }
    }
}

impl std::fmt::Debug for WatchList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchList")
            .field("watched", &self.watchers.len())
            .finish()
    }
}
