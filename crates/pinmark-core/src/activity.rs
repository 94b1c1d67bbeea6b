//! Last-activity position tracking
//!
//! Supports the synthetic "Last Activity" bookmark dropped when a file is
//! closed: every cursor move updates the cached position for that file, and
//! closing the file consumes the cached entry. Consumption is
//! read-once-then-delete, so a close never produces duplicate synthetic
//! bookmarks for the same cached position.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::Location;

/// Label prefix identifying synthetic last-activity bookmarks
pub const LAST_ACTIVITY_PREFIX: &str = "Last Activity:";

/// The last known cursor position per open file
///
/// An explicit, owned map - whichever component tracks active-editor
/// changes owns one of these and drives it from its events.
#[derive(Debug, Default)]
pub struct ActivityTracker {
    positions: HashMap<String, Location>,
}

impl ActivityTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current cursor position for a file
    ///
    /// Untracked resources (untitled buffers, non-file schemes, `.git`
    /// paths, anything under `node_modules`) are ignored.
    pub fn update(&mut self, location: Location) {
        if !is_trackable(&location.uri) {
            return;
        }
        self.positions.insert(location.uri.clone(), location);
    }

    /// Consume the cached position for a file
    ///
    /// The entry is removed; a second call for the same file returns `None`
    /// until the position is updated again.
    pub fn take(&mut self, uri: &str) -> Option<Location> {
        self.positions.remove(uri)
    }

    /// Number of files with a cached position
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether any positions are cached
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Build the label for a synthetic last-activity bookmark
pub fn last_activity_label(file_name: &str, at: DateTime<Utc>) -> String {
    format!("{LAST_ACTIVITY_PREFIX} {file_name} ({})", at.format("%H:%M"))
}

/// Whether a bookmark label marks a synthetic last-activity bookmark
pub fn is_last_activity_label(label: &str) -> bool {
    label.starts_with(LAST_ACTIVITY_PREFIX)
}

/// Whether a resource participates in last-activity tracking
fn is_trackable(uri: &str) -> bool {
    if uri.starts_with("untitled:") {
        return false;
    }
    // Only file resources are tracked; bare paths count as files
    if uri.contains("://") && !uri.starts_with("file://") {
        return false;
    }
    if uri.ends_with(".git") || uri.contains("node_modules") {
        return false;
    }
    true
}
