//! Bookmark command handlers

use anyhow::{bail, Result};

use pinmark_core::{Location, Session};

use crate::output::Output;

/// Maximum label length, enforced here at the edge - the store itself
/// accepts any string
const MAX_LABEL_LEN: usize = 100;

/// Add a bookmark at a location
///
/// `line` and `column` are 1-based as typed by the user; a missing label
/// defaults to `file:line`.
pub fn add(
    session: &mut Session,
    uri: String,
    line: u32,
    column: u32,
    label: Option<String>,
    output: &Output,
) -> Result<()> {
    if line == 0 {
        bail!("Line numbers are 1-based");
    }

    let location = Location::new(uri, line - 1, column.saturating_sub(1));
    let label = match label {
        // The limit counts characters, not bytes
        Some(label) if label.chars().count() > MAX_LABEL_LEN => {
            bail!("Label is too long (max {} characters)", MAX_LABEL_LEN)
        }
        Some(label) if !label.trim().is_empty() => label.trim().to_string(),
        _ => format!("{}:{}", location.display_name(), location.display_line()),
    };

    let bookmark = session.add_bookmark(location, label);

    output.success(&format!("Bookmark \"{}\" added", bookmark.label));
    output.print_bookmark(&bookmark);
    Ok(())
}

/// List all bookmarks in insertion order
pub fn list(session: &Session, output: &Output) -> Result<()> {
    output.print_bookmarks(&session.list_bookmarks());
    Ok(())
}

/// Remove a bookmark by id
///
/// Unknown ids are reported, not errored - removal in the store is a no-op.
pub fn remove(session: &mut Session, id: String, output: &Output) -> Result<()> {
    let known = session.list_bookmarks().iter().any(|b| b.id == id);
    session.remove_bookmark(&id);

    if known {
        output.success(&format!("Bookmark {} removed", id));
    } else {
        output.message(&format!("No bookmark with id {}", id));
    }
    Ok(())
}

/// Remove all bookmarks, prompting unless --yes was given
pub fn clear(session: &mut Session, yes: bool, output: &Output) -> Result<()> {
    let count = session.list_bookmarks().len();
    if count == 0 {
        output.message("No bookmarks to clear.");
        return Ok(());
    }

    if !yes && output.should_prompt() && !confirm(&format!("Clear all {} bookmark(s)?", count))? {
        output.message("Aborted.");
        return Ok(());
    }

    session.clear_all_bookmarks();
    output.success(&format!("Cleared {} bookmark(s)", count));
    Ok(())
}

/// Ask a yes/no question on stdin
fn confirm(question: &str) -> Result<bool> {
    use std::io::{self, Write};

    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim(), "y" | "Y" | "yes"))
}
