//! Data models for Pinmark
//!
//! Defines the core data structures: Location, Bookmark, and HistoryEntry.
//! All three are plain serde values; a `Location` is immutable once created
//! and does not track edits made to the underlying file afterwards.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point in a source file: resource identifier plus 0-based line/column
///
/// Equality is structural. Locations are value types - they are never
/// updated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Location {
    /// URI-like resource identifier (canonical string form)
    pub uri: String,
    /// 0-based line
    pub line: u32,
    /// 0-based column
    pub column: u32,
}

impl Location {
    /// Create a new location
    pub fn new(uri: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            uri: uri.into(),
            line,
            column,
        }
    }

    /// Derive a display name: the last path segment, splitting on both
    /// `/` and `\`. An identifier with no separator is its own display name.
    pub fn display_name(&self) -> &str {
        self.uri
            .rsplit(['/', '\\'])
            .find(|segment| !segment.is_empty())
            .unwrap_or(&self.uri)
    }

    /// The 1-based line number shown to users
    pub fn display_line(&self) -> u32 {
        self.line + 1
    }
}

/// A user-created, labeled bookmark at a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    /// Opaque unique identifier; generation order matches creation order
    pub id: String,
    /// The bookmarked location
    #[serde(flatten)]
    pub location: Location,
    /// User-supplied label (length limits are enforced at the edge)
    pub label: String,
    /// Derived file display name
    pub file_name: String,
    /// 1-based line number for display
    pub display_line: u32,
    /// When this bookmark was created
    pub created_at: chrono::DateTime<Utc>,
}

impl Bookmark {
    /// Create a new bookmark with a fresh id and current timestamp
    pub fn new(location: Location, label: impl Into<String>) -> Self {
        let file_name = location.display_name().to_string();
        let display_line = location.display_line();
        Self {
            id: generate_id(),
            location,
            label: label.into(),
            file_name,
            display_line,
            created_at: Utc::now(),
        }
    }
}

/// An automatically recorded visit to a location
///
/// No identity field; entries are compared by `(uri, line, column)` only,
/// for consecutive-duplicate suppression.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    /// The visited location
    #[serde(flatten)]
    pub location: Location,
    /// Derived file display name
    pub file_name: String,
    /// 1-based line number for display
    pub display_line: u32,
    /// When this location was visited
    pub visited_at: chrono::DateTime<Utc>,
}

impl HistoryEntry {
    /// Create a new entry for a visit happening now
    pub fn new(location: Location) -> Self {
        let file_name = location.display_name().to_string();
        let display_line = location.display_line();
        Self {
            location,
            file_name,
            display_line,
            visited_at: Utc::now(),
        }
    }
}

/// Generate a unique bookmark id
///
/// Millisecond timestamp component plus a random component, so ids stay
/// unique under rapid successive calls without any coordination, and
/// lexical generation order follows creation order within the process.
pub(crate) fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    format!("{millis:x}-{:x}", Uuid::new_v4().as_u128())
}
