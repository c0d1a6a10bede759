//! `tally --add` handling: parse the priority, tag list, and due date, then
//! append the task

use anyhow::{bail, Result};
use chrono::NaiveDate;

use crate::task::{Priority, TaskList};

pub fn run(
    tasks: &mut TaskList,
    title: &str,
    priority: &str,
    tags: Option<&str>,
    due: Option<&str>,
) -> Result<()> {
    // Unrecognized priority labels fall back to medium rather than failing.
    let priority = Priority::parse(priority).unwrap_or_default();
    let tags = tags.map(parse_tags).unwrap_or_default();
    let due = due.map(parse_due_date).transpose()?;

    let task = tasks.add(title, priority, tags, due);
    println!("✓ Added: {} (priority: {})", task.title, task.priority);
    Ok(())
}

/// Split a comma-separated tag list, trimming whitespace and dropping empty
/// segments
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a YYYY-MM-DD due date
pub fn parse_due_date(raw: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(_) => bail!("Invalid due date: {} (expected YYYY-MM-DD)", raw),
    }
}
