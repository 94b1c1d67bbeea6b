//! Export and import command handlers

use std::path::PathBuf;

use anyhow::{Context, Result};

use pinmark_core::Session;

use crate::output::Output;

/// Export all bookmarks to a JSON file
pub fn export(session: &Session, path: PathBuf, output: &Output) -> Result<()> {
    let bookmarks = session.list_bookmarks();
    if bookmarks.is_empty() {
        output.message("No bookmarks to export.");
        return Ok(());
    }

    let document = session.export_bookmarks();
    let content =
        serde_json::to_string_pretty(&document).context("Failed to serialize export document")?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write export file: {:?}", path))?;

    output.success(&format!(
        "Exported {} bookmark(s) to {}",
        bookmarks.len(),
        path.display()
    ));
    Ok(())
}

/// Import bookmarks from a JSON export file
///
/// Malformed entries are skipped individually; only an unreadable file or a
/// document without a `bookmarks` array fails the command.
pub fn import(session: &mut Session, path: PathBuf, output: &Output) -> Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read import file: {:?}", path))?;

    let report = session
        .import_bookmarks(&content)
        .with_context(|| format!("Failed to import bookmarks from {:?}", path))?;

    if report.skipped > 0 {
        output.message(&format!("Skipped {} malformed entries", report.skipped));
    }
    output.success(&format!("Imported {} bookmark(s)", report.imported));
    Ok(())
}
