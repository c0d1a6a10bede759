//! CLI command implementations

pub mod add;
pub mod definition;
pub mod edit;
pub mod list;

pub use definition::{Cli, SortKey};

use anyhow::{bail, Result};

use crate::task::TaskList;

/// Run exactly one operation for the parsed flag set.
///
/// When several operation flags are supplied at once, the first match below
/// wins: list, stats, search, tag, sort, add, edit, toggle, delete,
/// clear-done.
pub fn execute(cli: Cli, tasks: &mut TaskList) -> Result<()> {
    if cli.list {
        list::run(tasks);
    } else if cli.stats {
        list::print_stats(tasks);
    } else if let Some(query) = &cli.search {
        let results = tasks.search(query);
        if results.is_empty() {
            println!("No tasks matching: {}", query);
        } else {
            println!("Search results for: {}\n", query);
            list::print_table(&results);
        }
    } else if let Some(tag) = &cli.tag {
        let results = tasks.filter_by_tag(tag);
        if results.is_empty() {
            println!("No tasks tagged: {}", tag);
        } else {
            println!("Tasks tagged: {}\n", tag);
            list::print_table(&results);
        }
    } else if let Some(key) = cli.sort {
        let label = match key {
            SortKey::Priority => {
                tasks.sort_by_priority();
                "priority"
            }
            SortKey::Date => {
                tasks.sort_by_date();
                "creation date"
            }
        };
        println!("Sorted by {}", label);
    } else if let Some(title) = &cli.add {
        add::run(
            tasks,
            title,
            &cli.priority,
            cli.tags.as_deref(),
            cli.due.as_deref(),
        )?;
    } else if let Some(spec) = &cli.edit {
        edit::run(tasks, spec)?;
    } else if let Some(index) = cli.toggle {
        let task = tasks.toggle(index)?;
        if task.completed {
            println!("✓ Completed: {}", task.title);
        } else {
            println!("Reopened: {}", task.title);
        }
    } else if let Some(index) = cli.delete {
        let task = tasks.delete(index)?;
        println!("Deleted: {}", task.title);
    } else if cli.clear_done {
        let removed = tasks.delete_completed();
        println!(
            "Removed {} completed task{}",
            removed,
            if removed == 1 { "" } else { "s" }
        );
    } else {
        bail!("No command given. Run with --help to see the available flags");
    }

    Ok(())
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else if max <= 3 {
        s[..max].to_string()
    } else {
        format!("{}...", &s[..max - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    fn flags() -> Cli {
        Cli {
            list: false,
            stats: false,
            search: None,
            tag: None,
            sort: None,
            add: None,
            priority: "medium".to_string(),
            tags: None,
            due: None,
            edit: None,
            toggle: None,
            delete: None,
            clear_done: false,
        }
    }

    #[test]
    fn test_execute_add() {
        let mut tasks = TaskList::new();
        let cli = Cli {
            add: Some("Buy Milk".to_string()),
            priority: "high".to_string(),
            ..flags()
        };

        execute(cli, &mut tasks).unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks.get(0).unwrap().priority, Priority::High);
    }

    #[test]
    fn test_execute_prefers_list_over_add() {
        let mut tasks = TaskList::new();
        let cli = Cli {
            list: true,
            add: Some("should not land".to_string()),
            ..flags()
        };

        execute(cli, &mut tasks).unwrap();

        assert!(tasks.is_empty(), "list must win over add");
    }

    #[test]
    fn test_execute_prefers_sort_over_delete() {
        let mut tasks = TaskList::new();
        tasks.add("a", Priority::Low, Vec::new(), None);
        tasks.add("b", Priority::High, Vec::new(), None);

        let cli = Cli {
            sort: Some(SortKey::Priority),
            delete: Some(0),
            ..flags()
        };

        execute(cli, &mut tasks).unwrap();

        assert_eq!(tasks.len(), 2, "sort must win over delete");
        assert_eq!(tasks.get(0).unwrap().title, "b");
    }

    #[test]
    fn test_execute_toggle_out_of_range_is_an_error() {
        let mut tasks = TaskList::new();
        let cli = Cli {
            toggle: Some(5),
            ..flags()
        };

        assert!(execute(cli, &mut tasks).is_err());
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_execute_without_flags_fails() {
        let mut tasks = TaskList::new();
        assert!(execute(flags(), &mut tasks).is_err());
    }

    #[test]
    fn test_execute_clear_done() {
        let mut tasks = TaskList::new();
        tasks.add("open", Priority::Medium, Vec::new(), None);
        tasks.add("done", Priority::Medium, Vec::new(), None);
        tasks.toggle(1).unwrap();

        let cli = Cli {
            clear_done: true,
            ..flags()
        };
        execute(cli, &mut tasks).unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks.get(0).unwrap().title, "open");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("", 5), "");
    }
}
