//! Navigation history store
//!
//! A bounded, deduplicated log of recently visited locations. Entries are
//! stored oldest-first and read most-recent-first; when the log exceeds the
//! configured maximum, the oldest entries are dropped (FIFO).
//!
//! Deduplication is consecutive-only: recording the same `(uri, line,
//! column)` as the most recent entry is a silent no-op, but revisiting a
//! location after going somewhere else is kept.

use tracing::{error, warn};

use crate::config::Config;
use crate::models::{HistoryEntry, Location};
use crate::storage::{JsonPersistence, HISTORY_NAMESPACE};

/// The navigation history log, backed by one persisted JSON record
pub struct HistoryStore {
    /// Entries, oldest-first
    entries: Vec<HistoryEntry>,
    /// Maximum number of entries, read once at construction
    max_size: usize,
    persistence: JsonPersistence,
}

impl HistoryStore {
    /// Open the store, loading any persisted history
    ///
    /// The maximum size comes from `config.max_history`; changing the
    /// configuration later does not retroactively trim an open store.
    /// Load failures degrade to an empty log with a logged warning.
    pub fn open(config: &Config) -> Self {
        let persistence = JsonPersistence::new(config);
        let entries = match persistence.load(HISTORY_NAMESPACE) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(e) => {
                warn!("Failed to load history, starting empty: {e}");
                Vec::new()
            }
        };

        Self {
            entries,
            max_size: config.max_history,
            persistence,
        }
    }

    /// Record a visit to a location
    ///
    /// A location identical to the most recently recorded entry is dropped
    /// silently. Otherwise the visit is appended with the current timestamp
    /// and the log is trimmed from the front down to the maximum size.
    pub fn record(&mut self, location: Location) {
        if let Some(last) = self.entries.last() {
            if last.location == location {
                return;
            }
        }

        self.entries.push(HistoryEntry::new(location));

        if self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(..excess);
        }

        self.save();
    }

    /// Get a snapshot of the history, most recent first
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    /// Remove all history entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.save();
    }

    /// Number of entries in the log
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn save(&self) {
        if let Err(e) = self.persistence.save(HISTORY_NAMESPACE, &self.entries) {
            error!("Failed to save history: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        }
    }

    fn loc(uri: &str, line: u32, column: u32) -> Location {
        Location::new(uri, line, column)
    }

    #[test]
    fn test_record_appends() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = HistoryStore::open(&test_config(&temp_dir));

        store.record(loc("file:///a.rs", 1, 0));
        store.record(loc("file:///b.rs", 2, 0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_consecutive_duplicate_is_suppressed() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = HistoryStore::open(&test_config(&temp_dir));

        store.record(loc("file:///a.rs", 1, 2));
        store.record(loc("file:///a.rs", 1, 2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_same_line_different_column_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = HistoryStore::open(&test_config(&temp_dir));

        store.record(loc("file:///a.rs", 1, 2));
        store.record(loc("file:///a.rs", 1, 3));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_non_consecutive_repeat_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = HistoryStore::open(&test_config(&temp_dir));

        store.record(loc("file:///a.rs", 1, 0));
        store.record(loc("file:///b.rs", 2, 0));
        store.record(loc("file:///a.rs", 1, 0));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_list_is_most_recent_first() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = HistoryStore::open(&test_config(&temp_dir));

        store.record(loc("file:///a.rs", 1, 0));
        store.record(loc("file:///b.rs", 2, 0));
        store.record(loc("file:///c.rs", 3, 0));

        let listed = store.list();
        assert_eq!(listed[0].file_name, "c.rs");
        assert_eq!(listed[1].file_name, "b.rs");
        assert_eq!(listed[2].file_name, "a.rs");
    }

    #[test]
    fn test_oldest_entries_are_dropped_at_the_bound() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            max_history: 10,
            ..test_config(&temp_dir)
        };
        let mut store = HistoryStore::open(&config);

        for i in 0..15 {
            store.record(loc("file:///a.rs", i, 0));
        }

        assert_eq!(store.len(), 10);
        // The 5 oldest visits (lines 0..5) were evicted
        let listed = store.list();
        assert_eq!(listed.first().unwrap().location.line, 14);
        assert_eq!(listed.last().unwrap().location.line, 5);
    }

    #[test]
    fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = HistoryStore::open(&test_config(&temp_dir));

        store.record(loc("file:///a.rs", 1, 0));
        store.clear();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_history_persists_oldest_first_across_reopens() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        {
            let mut store = HistoryStore::open(&config);
            store.record(loc("file:///a.rs", 1, 0));
            store.record(loc("file:///b.rs", 2, 0));
        }

        let store = HistoryStore::open(&config);
        assert_eq!(store.len(), 2);
        // Reversal happens on read, not on write
        let listed = store.list();
        assert_eq!(listed[0].file_name, "b.rs");

        // Dedup state survives the reopen too
        let mut store = store;
        store.record(loc("file:///b.rs", 2, 0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_corrupt_record_falls_back_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        std::fs::write(config.history_path(), b"[oops").unwrap();

        let store = HistoryStore::open(&config);
        assert!(store.is_empty());
    }

    #[test]
    fn test_max_size_is_read_once_at_construction() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            max_history: 3,
            ..test_config(&temp_dir)
        };
        let mut store = HistoryStore::open(&config);

        for i in 0..5 {
            store.record(loc("file:///a.rs", i, 0));
        }
        assert_eq!(store.len(), 3);
    }
}
