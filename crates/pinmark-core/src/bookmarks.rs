//! Bookmark store
//!
//! Owns the list of user bookmarks: add/remove/clear/list over an
//! insertion-ordered list, persisting the full list after every mutation.
//!
//! Failure semantics are availability over durability: a load failure
//! degrades to an empty list and a save failure keeps the in-memory list
//! authoritative; both are logged, neither reaches the caller.

use tracing::{error, warn};

use crate::config::Config;
use crate::models::{Bookmark, Location};
use crate::storage::{JsonPersistence, BOOKMARKS_NAMESPACE};

/// The list of user bookmarks, backed by one persisted JSON record
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
    persistence: JsonPersistence,
}

impl BookmarkStore {
    /// Open the store, loading any persisted bookmarks
    ///
    /// A missing record starts the store empty; an unreadable or corrupt
    /// record is logged and also starts the store empty.
    pub fn open(config: &Config) -> Self {
        let persistence = JsonPersistence::new(config);
        let bookmarks = match persistence.load(BOOKMARKS_NAMESPACE) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                warn!("Failed to load bookmarks, starting empty: {e}");
                Vec::new()
            }
        };

        Self {
            bookmarks,
            persistence,
        }
    }

    /// Add a bookmark at the given location
    ///
    /// Constructs a bookmark with a fresh unique id and current timestamp,
    /// appends it, persists the full list, and returns the created bookmark.
    /// Any label string is accepted; validation belongs to the caller.
    pub fn add(&mut self, location: Location, label: impl Into<String>) -> Bookmark {
        let bookmark = Bookmark::new(location, label);
        self.bookmarks.push(bookmark.clone());
        self.save();
        bookmark
    }

    /// Remove the bookmark with the given id
    ///
    /// Removing an unknown id is a silent no-op.
    pub fn remove(&mut self, id: &str) {
        self.bookmarks.retain(|b| b.id != id);
        self.save();
    }

    /// Remove all bookmarks
    pub fn clear_all(&mut self) {
        self.bookmarks.clear();
        self.save();
    }

    /// Get a snapshot of all bookmarks, in insertion order
    ///
    /// The returned list is a copy; later mutations of the store are not
    /// observable through it. Any recency sorting shown to users is a
    /// presentation concern, not a store guarantee.
    pub fn list(&self) -> Vec<Bookmark> {
        self.bookmarks.clone()
    }

    /// Number of bookmarks in the store
    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    fn save(&self) {
        if let Err(e) = self.persistence.save(BOOKMARKS_NAMESPACE, &self.bookmarks) {
            error!("Failed to save bookmarks: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        }
    }

    fn loc(uri: &str, line: u32) -> Location {
        Location::new(uri, line, 0)
    }

    #[test]
    fn test_add_returns_created_bookmark() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = BookmarkStore::open(&test_config(&temp_dir));

        let bookmark = store.add(loc("file:///src/main.rs", 10), "x");
        assert_eq!(bookmark.label, "x");
        assert_eq!(bookmark.display_line, 11);
        assert_eq!(store.list(), vec![bookmark]);
    }

    #[test]
    fn test_ids_are_pairwise_distinct() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = BookmarkStore::open(&test_config(&temp_dir));

        for i in 0..50 {
            store.add(loc("file:///src/main.rs", i), format!("b{i}"));
        }

        let ids: HashSet<String> = store.list().into_iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = BookmarkStore::open(&test_config(&temp_dir));

        let a = store.add(loc("file:///a.rs", 1), "a");
        let b = store.add(loc("file:///b.rs", 2), "b");
        assert_eq!(store.list(), vec![a, b]);
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = BookmarkStore::open(&test_config(&temp_dir));

        store.add(loc("file:///a.rs", 1), "a");
        let snapshot = store.list();
        store.add(loc("file:///b.rs", 2), "b");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = BookmarkStore::open(&test_config(&temp_dir));

        let bookmark = store.add(loc("file:///a.rs", 10), "x");
        store.remove(&bookmark.id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = BookmarkStore::open(&test_config(&temp_dir));

        let keep = store.add(loc("file:///a.rs", 1), "keep");
        let gone = store.add(loc("file:///b.rs", 2), "gone");

        store.remove(&gone.id);
        store.remove(&gone.id);
        store.remove("no-such-id");

        assert_eq!(store.list(), vec![keep]);
    }

    #[test]
    fn test_clear_all() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = BookmarkStore::open(&test_config(&temp_dir));

        store.add(loc("file:///a.rs", 1), "a");
        store.add(loc("file:///b.rs", 2), "b");
        store.clear_all();

        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_bookmarks_persist_across_reopens() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        let added = {
            let mut store = BookmarkStore::open(&config);
            store.add(loc("file:///src/main.rs", 41), "checkpoint")
        };

        let store = BookmarkStore::open(&config);
        assert_eq!(store.list(), vec![added]);
    }

    #[test]
    fn test_corrupt_record_falls_back_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        std::fs::write(config.bookmarks_path(), b"{ not json").unwrap();

        let mut store = BookmarkStore::open(&config);
        assert!(store.is_empty());

        // The store keeps operating and the next save repairs the record
        store.add(loc("file:///a.rs", 0), "fresh");
        let reopened = BookmarkStore::open(&config);
        assert_eq!(reopened.len(), 1);
    }
}
