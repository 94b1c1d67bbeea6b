//! Editor session facade
//!
//! `Session` owns the bookmark store, the history store, and the activity
//! tracker, and is the single surface a presentation layer talks to. Editor
//! activity arrives as explicit [`EditorEvent`]s; view re-rendering is driven
//! by registered refresh listeners, so the stores themselves stay passive.
//!
//! All mutation happens through `&mut self`, which serializes operations:
//! two sequential calls always observe a consistent, linearly ordered list.

use chrono::Utc;

use crate::activity::{is_last_activity_label, last_activity_label, ActivityTracker};
use crate::bookmarks::BookmarkStore;
use crate::config::Config;
use crate::export::{self, ExportDocument, ImportError, ImportReport};
use crate::history::HistoryStore;
use crate::models::{Bookmark, HistoryEntry, Location};

/// Editor activity the surrounding application feeds into the session
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The cursor or selection moved within the active editor
    SelectionChanged { location: Location },
    /// A different editor became active
    EditorActivated { location: Location },
    /// A document was closed
    DocumentClosed { uri: String },
}

/// Which view needs re-rendering after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    Bookmarks,
    History,
}

/// The in-editor session: both stores, the activity cache, and the
/// refresh listeners
pub struct Session {
    bookmarks: BookmarkStore,
    history: HistoryStore,
    activity: ActivityTracker,
    listeners: Vec<Box<dyn Fn(RefreshKind)>>,
}

impl Session {
    /// Open a session, loading both persisted stores
    pub fn open(config: &Config) -> Self {
        Self {
            bookmarks: BookmarkStore::open(config),
            history: HistoryStore::open(config),
            activity: ActivityTracker::new(),
            listeners: Vec::new(),
        }
    }

    /// Register a refresh listener
    ///
    /// Called after every mutation with the view that changed.
    pub fn on_refresh(&mut self, listener: impl Fn(RefreshKind) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self, kind: RefreshKind) {
        for listener in &self.listeners {
            listener(kind);
        }
    }

    // ==================== Bookmark Operations ====================

    /// Add a bookmark and return it
    pub fn add_bookmark(&mut self, location: Location, label: impl Into<String>) -> Bookmark {
        let bookmark = self.bookmarks.add(location, label);
        self.notify(RefreshKind::Bookmarks);
        bookmark
    }

    /// Remove a bookmark by id (unknown ids are a no-op)
    pub fn remove_bookmark(&mut self, id: &str) {
        self.bookmarks.remove(id);
        self.notify(RefreshKind::Bookmarks);
    }

    /// Remove all bookmarks
    pub fn clear_all_bookmarks(&mut self) {
        self.bookmarks.clear_all();
        self.notify(RefreshKind::Bookmarks);
    }

    /// Snapshot of all bookmarks, insertion order
    pub fn list_bookmarks(&self) -> Vec<Bookmark> {
        self.bookmarks.list()
    }

    // ==================== History Operations ====================

    /// Record a visit to a location
    pub fn record_visit(&mut self, location: Location) {
        self.history.record(location);
        self.notify(RefreshKind::History);
    }

    /// Snapshot of the history, most recent first
    pub fn list_history(&self) -> Vec<HistoryEntry> {
        self.history.list()
    }

    /// Remove all history entries
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.notify(RefreshKind::History);
    }

    // ==================== Export / Import ====================

    /// Build an export document from the current bookmarks
    pub fn export_bookmarks(&self) -> ExportDocument {
        export::export_bookmarks(&self.bookmarks.list())
    }

    /// Import bookmarks from an export document (best-effort)
    pub fn import_bookmarks(&mut self, json: &str) -> Result<ImportReport, ImportError> {
        let report = export::import_bookmarks(&mut self.bookmarks, json)?;
        self.notify(RefreshKind::Bookmarks);
        Ok(report)
    }

    // ==================== Events ====================

    /// Feed one editor event into the session
    ///
    /// Cursor moves and editor switches update the last-activity cache and
    /// record a history visit; a document close drops the synthetic
    /// last-activity bookmark for that file.
    pub fn handle_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::SelectionChanged { location }
            | EditorEvent::EditorActivated { location } => {
                self.activity.update(location.clone());
                self.record_visit(location);
            }
            EditorEvent::DocumentClosed { uri } => {
                self.save_last_activity(&uri);
            }
        }
    }

    /// Replace the last-activity bookmark for a closed file
    ///
    /// Consumes the cached cursor position (read-once); if none exists the
    /// close is ignored. Older last-activity bookmarks for the same file are
    /// removed so only the most recent survives.
    fn save_last_activity(&mut self, uri: &str) {
        let Some(position) = self.activity.take(uri) else {
            return;
        };

        let stale: Vec<String> = self
            .bookmarks
            .list()
            .into_iter()
            .filter(|b| b.location.uri == uri && is_last_activity_label(&b.label))
            .map(|b| b.id)
            .collect();
        for id in stale {
            self.bookmarks.remove(&id);
        }

        let label = last_activity_label(position.display_name(), Utc::now());
        self.bookmarks.add(position, label);
        self.notify(RefreshKind::Bookmarks);
    }
}
