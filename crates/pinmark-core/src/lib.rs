//! Pinmark Core Library
//!
//! This crate provides the core functionality for Pinmark, an
//! editor-agnostic store for labeled source-location bookmarks and a
//! bounded navigation-history log.
//!
//! # Architecture
//!
//! Two independent stores own their in-memory lists and persist to
//! namespaced JSON records; a [`Session`] facade wires them to editor
//! events and refresh listeners. Persistence failures degrade to logged
//! warnings and an empty list - no store operation fails the caller.
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let mut session = Session::open(&config);
//!
//! // Mark a location
//! let bookmark = session.add_bookmark(Location::new("file:///src/main.rs", 41, 0), "fixme");
//!
//! // Feed editor activity
//! session.handle_event(EditorEvent::SelectionChanged {
//!     location: Location::new("file:///src/lib.rs", 9, 4),
//! });
//! let recent = session.list_history();
//! ```
//!
//! # Modules
//!
//! - `session`: editor session facade (main entry point)
//! - `models`: locations, bookmarks, and history entries
//! - `bookmarks`: the user bookmark store
//! - `history`: the bounded navigation log
//! - `activity`: last-activity position cache
//! - `export`: versioned export/import wire format
//! - `storage`: namespaced JSON persistence
//! - `config`: application configuration

pub mod activity;
pub mod bookmarks;
pub mod config;
pub mod export;
pub mod history;
pub mod models;
pub mod session;
pub mod storage;

pub use activity::ActivityTracker;
pub use bookmarks::BookmarkStore;
pub use config::Config;
pub use export::{ExportDocument, ImportError, ImportReport};
pub use history::HistoryStore;
pub use models::{Bookmark, HistoryEntry, Location};
pub use session::{EditorEvent, RefreshKind, Session};
pub use storage::{JsonPersistence, StorageError};
