//! History command handlers

use anyhow::{bail, Result};

use pinmark_core::{Location, Session};

use crate::output::Output;

/// Record a visit to a location (1-based line/column)
pub fn visit(
    session: &mut Session,
    uri: String,
    line: u32,
    column: u32,
    output: &Output,
) -> Result<()> {
    if line == 0 {
        bail!("Line numbers are 1-based");
    }

    let location = Location::new(uri, line - 1, column.saturating_sub(1));
    session.record_visit(location.clone());

    output.success(&format!(
        "Visit recorded: {}:{}",
        location.display_name(),
        location.display_line()
    ));
    Ok(())
}

/// List history entries, most recent first
pub fn list(session: &Session, limit: Option<usize>, output: &Output) -> Result<()> {
    let mut entries = session.list_history();
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    output.print_history(&entries);
    Ok(())
}

/// Remove all history entries
pub fn clear(session: &mut Session, output: &Output) -> Result<()> {
    session.clear_history();
    output.success("History cleared");
    Ok(())
}
