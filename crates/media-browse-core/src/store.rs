use media_browse_models::{MediaKind, MediaRecord};
use tracing::{debug, warn};

use crate::storage::WatchlistStorage;

/// Emitted after every effective mutation, in subscription order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchlistChange {
    Added(u64),
    Removed(u64),
}

type ChangeHandler = Box<dyn Fn(&WatchlistChange) + Send + Sync>;

/// Single source of truth for the saved list: an ordered sequence of
/// records with unique ids, written through to durable storage after
/// every mutation.
///
/// One instance is constructed at startup and handed by reference to
/// the views that need it; consumers only ever see read snapshots.
///
/// Membership is keyed by bare `id`. The provider scopes ids per kind,
/// so a movie and a show sharing an id collide here and the first
/// entry wins.
pub struct WatchlistStore {
    items: Vec<MediaRecord>,
    storage: WatchlistStorage,
    handlers: Vec<ChangeHandler>,
}

impl WatchlistStore {
    /// Load the persisted list once at construction. Never fails:
    /// storage problems degrade to an empty list.
    pub fn open(storage: WatchlistStorage) -> Self {
        let items = storage.load();
        Self {
            items,
            storage,
            handlers: Vec::new(),
        }
    }

    /// Append an item, defaulting `media_type` to movie when the
    /// payload omits it. Adding an id that is already present is a
    /// no-op; the stored payload is not replaced.
    pub fn add(&mut self, item: MediaRecord) {
        if self.contains(item.id) {
            debug!("Item {} already in watchlist, ignoring", item.id);
            return;
        }
        let item = item.with_kind(MediaKind::Movie);
        let id = item.id;
        self.items.push(item);
        self.persist();
        self.notify(WatchlistChange::Added(id));
    }

    /// Drop the entry with this id, if any. Idempotent.
    pub fn remove(&mut self, id: u64) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            debug!("Item {} not in watchlist, nothing to remove", id);
            return;
        }
        self.persist();
        self.notify(WatchlistChange::Removed(id));
    }

    /// Membership query. O(n) scan; the list is user-curated and small.
    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Read-only view of the list in insertion order.
    pub fn items(&self) -> &[MediaRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Register a change handler. Handlers run synchronously after each
    /// effective mutation, in subscription order.
    pub fn subscribe(&mut self, handler: impl Fn(&WatchlistChange) + Send + Sync + 'static) {
        self.handlers.push(Box::new(handler));
    }

    // Write-through. A failed write leaves memory ahead of disk until
    // the next mutation; it is logged, never propagated.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.items) {
            warn!("Failed to persist watchlist: {}", e);
        }
    }

    fn notify(&self, change: WatchlistChange) {
        for handler in &self.handlers {
            handler(&change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn record(id: u64, title: &str) -> MediaRecord {
        serde_json::from_value(serde_json::json!({"id": id, "title": title})).unwrap()
    }

    fn open_store(dir: &tempfile::TempDir) -> WatchlistStore {
        WatchlistStore::open(WatchlistStorage::new(dir.path().join("watchlist.json")))
    }

    #[test]
    fn test_add_enforces_unique_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);

        store.add(record(550, "Fight Club"));
        store.add(record(550, "A different payload, same id"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].display_title(), "Fight Club");
    }

    #[test]
    fn test_membership_tracks_mutations() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);

        store.add(record(550, "Fight Club"));
        assert!(store.contains(550));

        store.remove(550);
        assert!(!store.contains(550));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);

        store.add(record(550, "Fight Club"));
        store.remove(999);
        assert_eq!(store.len(), 1);

        store.remove(550);
        store.remove(550);
        assert!(store.is_empty());
    }

    #[test]
    fn test_insertion_order_survives_removal() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);

        store.add(record(1, "A"));
        store.add(record(2, "B"));
        store.add(record(3, "C"));
        store.remove(2);

        let ids: Vec<u64> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_media_type_defaults_to_movie_on_add() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);

        store.add(record(550, "Fight Club"));
        assert_eq!(store.items()[0].media_type, Some(MediaKind::Movie));

        let show: MediaRecord = serde_json::from_value(
            serde_json::json!({"id": 1396, "name": "Breaking Bad", "media_type": "tv"}),
        )
        .unwrap();
        store.add(show);
        assert_eq!(store.items()[1].media_type, Some(MediaKind::Tv));
    }

    #[test]
    fn test_persistence_round_trip_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut store = open_store(&dir);
            store.add(record(550, "Fight Club"));
            store.add(record(603, "The Matrix"));
            store.remove(550);
        }

        let reopened = open_store(&dir);
        let ids: Vec<u64> = reopened.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![603]);
    }

    #[test]
    fn test_corrupt_storage_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watchlist.json");
        std::fs::write(&path, "not-json").unwrap();

        let store = WatchlistStore::open(WatchlistStorage::new(path));
        assert!(store.is_empty());
    }

    #[test]
    fn test_change_notification_fires_for_effective_mutations_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |change| sink.lock().unwrap().push(*change));

        store.add(record(550, "Fight Club"));
        store.add(record(550, "Duplicate")); // no-op
        store.remove(999); // no-op
        store.remove(550);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                WatchlistChange::Added(550),
                WatchlistChange::Removed(550)
            ]
        );
    }

    #[test]
    fn test_duplicate_add_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let mut store = open_store(&dir);
            store.add(record(550, "Fight Club"));
            store.add(record(550, "Fight Club"));
            assert_eq!(store.len(), 1);
        }

        let reopened = open_store(&dir);
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.items()[0].display_title(), "Fight Club");
        assert_eq!(reopened.items()[0].media_type, Some(MediaKind::Movie));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);
        assert!(store.is_empty());

        store.add(record(550, "Fight Club"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].id, 550);
        assert_eq!(store.items()[0].media_type, Some(MediaKind::Movie));

        store.add(record(550, "Fight Club"));
        assert_eq!(store.len(), 1);

        store.remove(550);
        assert!(store.items().is_empty());
    }
}
