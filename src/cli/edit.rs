//! `tally --edit` handling: parse `INDEX:NEW_TITLE` specs

use anyhow::{bail, Result};

use crate::task::TaskList;

pub fn run(tasks: &mut TaskList, spec: &str) -> Result<()> {
    let (index, title) = parse_edit_spec(spec)?;
    let task = tasks.edit(index, title)?;
    println!("✓ Renamed task {}: {}", index, task.title);
    Ok(())
}

/// Split an `INDEX:NEW_TITLE` edit spec into its parts
pub fn parse_edit_spec(spec: &str) -> Result<(usize, &str)> {
    let (index_str, title) = match spec.split_once(':') {
        Some(parts) => parts,
        None => bail!("Invalid edit format: {} (expected INDEX:NEW_TITLE)", spec),
    };

    let index = match index_str.trim().parse() {
        Ok(index) => index,
        Err(_) => bail!("Invalid index in edit spec: {}", index_str),
    };

    Ok((index, title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    #[test]
    fn test_parse_edit_spec() {
        assert_eq!(parse_edit_spec("2:New title").unwrap(), (2, "New title"));
        assert_eq!(parse_edit_spec("0:a:b").unwrap(), (0, "a:b"));
    }

    #[test]
    fn test_parse_edit_spec_rejects_malformed_input() {
        assert!(parse_edit_spec("no colon here").is_err());
        assert!(parse_edit_spec("abc:title").is_err());
        assert!(parse_edit_spec("-1:title").is_err());
    }

    #[test]
    fn test_run_edits_in_place() {
        let mut tasks = TaskList::new();
        tasks.add("Old", Priority::Low, Vec::new(), None);

        run(&mut tasks, "0:New").unwrap();

        assert_eq!(tasks.get(0).unwrap().title, "New");
        assert_eq!(tasks.get(0).unwrap().priority, Priority::Low);
    }

    #[test]
    fn test_run_out_of_range_index() {
        let mut tasks = TaskList::new();
        assert!(run(&mut tasks, "3:New").is_err());
    }
}
