//! Bookmark export and import
//!
//! The export file is a versioned JSON document meant for moving bookmarks
//! between machines by hand. Import is best-effort: the `bookmarks` field
//! must be an array or the whole document is rejected, but individual
//! malformed entries are skipped and counted rather than aborting the batch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::bookmarks::BookmarkStore;
use crate::models::{Bookmark, Location};

/// Version tag written into every export document
pub const EXPORT_VERSION: &str = "1.0.0";

/// A complete export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub bookmarks: Vec<ExportedBookmark>,
}

/// One bookmark in the export wire format
///
/// `line` is the 1-based display line; `position` carries the 0-based
/// coordinates used to reconstruct the location on import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedBookmark {
    pub label: String,
    pub file_name: String,
    pub line: u32,
    pub uri: String,
    pub position: ExportedPosition,
    pub timestamp: DateTime<Utc>,
}

/// 0-based cursor coordinates in the export wire format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedPosition {
    pub line: u32,
    pub character: u32,
}

/// Errors that reject an import wholesale
#[derive(Error, Debug)]
pub enum ImportError {
    /// The document is not parseable JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The document has no `bookmarks` array
    #[error("Invalid bookmark file format: 'bookmarks' must be an array")]
    InvalidFormat,
}

/// Outcome of a best-effort import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    /// Entries that became bookmarks
    pub imported: usize,
    /// Malformed entries that were skipped
    pub skipped: usize,
}

/// Build an export document from a bookmark snapshot
pub fn export_bookmarks(bookmarks: &[Bookmark]) -> ExportDocument {
    ExportDocument {
        version: EXPORT_VERSION.to_string(),
        timestamp: Utc::now(),
        bookmarks: bookmarks
            .iter()
            .map(|b| ExportedBookmark {
                label: b.label.clone(),
                file_name: b.file_name.clone(),
                line: b.display_line,
                uri: b.location.uri.clone(),
                position: ExportedPosition {
                    line: b.location.line,
                    character: b.location.column,
                },
                timestamp: b.created_at,
            })
            .collect(),
    }
}

/// Import bookmarks from an export document
///
/// Each well-formed entry is added to the store as a new bookmark (fresh id
/// and timestamp). An entry must carry a string `uri` and numeric
/// `position.line` / `position.character`; anything else is skipped. A
/// missing label falls back to the derived `file:line` default.
pub fn import_bookmarks(store: &mut BookmarkStore, json: &str) -> Result<ImportReport, ImportError> {
    let document: Value = serde_json::from_str(json)?;

    let entries = document
        .get("bookmarks")
        .and_then(Value::as_array)
        .ok_or(ImportError::InvalidFormat)?;

    let mut imported = 0;
    let mut skipped = 0;

    for entry in entries {
        match parse_entry(entry) {
            Some((location, label)) => {
                store.add(location, label);
                imported += 1;
            }
            None => {
                warn!("Skipping malformed bookmark entry: {entry}");
                skipped += 1;
            }
        }
    }

    Ok(ImportReport { imported, skipped })
}

/// Validate one entry, returning its location and label
fn parse_entry(entry: &Value) -> Option<(Location, String)> {
    let uri = entry.get("uri")?.as_str()?;
    let position = entry.get("position")?;
    let line = u32::try_from(position.get("line")?.as_u64()?).ok()?;
    let character = u32::try_from(position.get("character")?.as_u64()?).ok()?;

    let location = Location::new(uri, line, character);
    let label = match entry.get("label").and_then(Value::as_str) {
        Some(label) => label.to_string(),
        None => format!("{}:{}", location.display_name(), location.display_line()),
    };

    Some((location, label))
}
