//! Command-line flag definitions

use clap::{Parser, ValueEnum};

/// Command-line task tracker
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
pub struct Cli {
    /// List all tasks
    #[arg(short, long)]
    pub list: bool,

    /// Show task statistics
    #[arg(long)]
    pub stats: bool,

    /// Search tasks by title (case-insensitive)
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Show tasks carrying the given tag
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Sort tasks in place
    #[arg(long, value_enum, value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Add a new task with the given title
    #[arg(short, long, value_name = "TITLE")]
    pub add: Option<String>,

    /// Priority for --add: low, medium, high
    #[arg(short, long, default_value = "medium", value_name = "PRIORITY")]
    pub priority: String,

    /// Comma-separated tags for --add
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// Due date for --add (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub due: Option<String>,

    /// Edit a task title, formatted INDEX:NEW_TITLE
    #[arg(short, long, value_name = "INDEX:TITLE")]
    pub edit: Option<String>,

    /// Toggle completion for the task at INDEX
    #[arg(short, long, value_name = "INDEX")]
    pub toggle: Option<usize>,

    /// Delete the task at INDEX
    #[arg(short, long, value_name = "INDEX")]
    pub delete: Option<usize>,

    /// Delete every completed task
    #[arg(long)]
    pub clear_done: bool,
}

/// Sort key for --sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Highest priority first
    Priority,
    /// Earliest created first
    Date,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_add_flags() {
        let cli = Cli::try_parse_from([
            "tally", "--add", "Buy Milk", "--priority", "high", "--tags", "errands,home",
            "--due", "2026-08-06",
        ])
        .unwrap();

        assert_eq!(cli.add.as_deref(), Some("Buy Milk"));
        assert_eq!(cli.priority, "high");
        assert_eq!(cli.tags.as_deref(), Some("errands,home"));
        assert_eq!(cli.due.as_deref(), Some("2026-08-06"));
    }

    #[test]
    fn test_cli_rejects_unknown_sort_key() {
        assert!(Cli::try_parse_from(["tally", "--sort", "title"]).is_err());
        assert!(Cli::try_parse_from(["tally", "--sort", "priority"]).is_ok());
        assert!(Cli::try_parse_from(["tally", "--sort", "date"]).is_ok());
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::try_parse_from(["tally", "-t", "2"]).unwrap();
        assert_eq!(cli.toggle, Some(2));

        let cli = Cli::try_parse_from(["tally", "-d", "0"]).unwrap();
        assert_eq!(cli.delete, Some(0));
    }

    #[test]
    fn test_cli_rejects_negative_index() {
        assert!(Cli::try_parse_from(["tally", "--toggle", "-1"]).is_err());
    }
}
