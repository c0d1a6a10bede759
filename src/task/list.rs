//! Ordered task list and its operations

use chrono::{NaiveDate, Utc};
use tracing::debug;

use super::error::{Result, TaskError};
use super::model::{Priority, Task};

/// Summary counts over a task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub high_priority: usize,
}

/// The in-memory task collection.
///
/// Tasks are addressed by position (0-based). Positions are reassigned after
/// every deletion, so an index is only a stable handle between mutations;
/// there are no persistent task IDs.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Get the task at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// All tasks, in list order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn validate_index(&self, index: usize) -> Result<()> {
        if index >= self.tasks.len() {
            return Err(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }

    /// Append a new task and return a reference to it
    pub fn add(
        &mut self,
        title: impl Into<String>,
        priority: Priority,
        tags: Vec<String>,
        due: Option<NaiveDate>,
    ) -> &Task {
        let mut task = Task::new(title);
        task.priority = priority;
        task.tags = tags;
        task.due = due;

        debug!(title = %task.title, priority = %task.priority, "adding task");
        self.tasks.push(task);
        self.tasks.last().expect("just pushed")
    }

    /// Remove and return the task at `index`, shifting later tasks down one
    /// position
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        self.validate_index(index)?;
        let task = self.tasks.remove(index);
        debug!(title = %task.title, index, "deleted task");
        Ok(task)
    }

    /// Flip completion for the task at `index`.
    ///
    /// Completing a task stamps `completed_at`. Reopening it leaves the stamp
    /// in place: the field records the most recent completion.
    pub fn toggle(&mut self, index: usize) -> Result<&Task> {
        self.validate_index(index)?;
        let task = &mut self.tasks[index];
        if !task.completed {
            task.completed_at = Some(Utc::now());
        }
        task.completed = !task.completed;
        Ok(&self.tasks[index])
    }

    /// Replace the title of the task at `index`; every other field is left
    /// untouched
    pub fn edit(&mut self, index: usize, title: impl Into<String>) -> Result<&Task> {
        self.validate_index(index)?;
        self.tasks[index].title = title.into();
        Ok(&self.tasks[index])
    }

    /// Tasks whose title contains `query` as a case-insensitive substring,
    /// in list order
    pub fn search(&self, query: &str) -> Vec<&Task> {
        let query = query.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| t.title.to_lowercase().contains(&query))
            .collect()
    }

    /// Tasks carrying an exact tag match, in list order
    pub fn filter_by_tag(&self, tag: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.has_tag(tag)).collect()
    }

    /// Reorder in place, highest priority first. The sort is stable: tasks of
    /// equal priority keep their relative order.
    pub fn sort_by_priority(&mut self) {
        self.tasks.sort_by_key(|t| t.priority.rank());
    }

    /// Reorder in place, earliest created first. Stable, like
    /// [`sort_by_priority`](Self::sort_by_priority).
    pub fn sort_by_date(&mut self) {
        self.tasks.sort_by_key(|t| t.created_at);
    }

    /// Drop every completed task, preserving the order of the rest. Returns
    /// how many tasks were removed.
    pub fn delete_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            debug!(removed, "cleared completed tasks");
        }
        removed
    }

    /// Compute summary counts over the whole list
    pub fn statistics(&self) -> Stats {
        let mut stats = Stats {
            total: self.tasks.len(),
            ..Stats::default()
        };

        for task in &self.tasks {
            if task.completed {
                stats.completed += 1;
            } else {
                stats.pending += 1;
            }
            if task.priority == Priority::High {
                stats.high_priority += 1;
            }
        }

        stats
    }

    /// Open tasks due today, in list order
    pub fn due_today(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| !t.completed && t.is_due_today())
            .collect()
    }

    /// Open tasks past their due date, in list order
    pub fn overdue(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_overdue()).collect()
    }
}
