//! Task data model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parse priority from text
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "med" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Get the text label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Sort rank: high priority sorts first
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A tracked task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task title
    pub title: String,

    /// Whether the task is done
    #[serde(default)]
    pub completed: bool,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Free-form tags, in the order they were given
    #[serde(default)]
    pub tags: Vec<String>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last completed
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,

    /// Due date (if any)
    #[serde(default)]
    pub due: Option<NaiveDate>,
}

impl Task {
    /// Create a new task with default priority and no tags or due date
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            priority: Priority::default(),
            tags: Vec::new(),
            created_at: Utc::now(),
            completed_at: None,
            due: None,
        }
    }

    /// Check if the task is due today
    pub fn is_due_today(&self) -> bool {
        if let Some(due) = &self.due {
            due == &Utc::now().date_naive()
        } else {
            false
        }
    }

    /// Check if the task is past its due date
    pub fn is_overdue(&self) -> bool {
        if let Some(due) = &self.due {
            due < &Utc::now().date_naive() && !self.completed
        } else {
            false
        }
    }

    /// Check for an exact, case-sensitive tag match
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
