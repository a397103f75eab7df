//! Frontend Models
//!
//! Tasks, columns and their fixed ordering.

use serde::{Deserialize, Serialize};

/// Task identifier
pub type TaskId = String;

/// Task priority, always shown as text next to any colour cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Urgent => "Urgent",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

/// Horizontal direction for keyboard moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Column identity. Declaration order is the board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    Backlog,
    Todo,
    InProgress,
    Done,
}

impl ColumnId {
    /// All columns, left to right
    pub const ALL: [ColumnId; 4] = [
        ColumnId::Backlog,
        ColumnId::Todo,
        ColumnId::InProgress,
        ColumnId::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnId::Backlog => "backlog",
            ColumnId::Todo => "todo",
            ColumnId::InProgress => "in-progress",
            ColumnId::Done => "done",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ColumnId::Backlog => "Backlog",
            ColumnId::Todo => "To Do",
            ColumnId::InProgress => "In Progress",
            ColumnId::Done => "Done",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ColumnId::Backlog => "📋",
            ColumnId::Todo => "📝",
            ColumnId::InProgress => "🚧",
            ColumnId::Done => "✅",
        }
    }

    /// Position in the board, 0-based
    pub fn ordinal(&self) -> usize {
        match self {
            ColumnId::Backlog => 0,
            ColumnId::Todo => 1,
            ColumnId::InProgress => 2,
            ColumnId::Done => 3,
        }
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }

    /// Adjacent column, or None at the board edge
    pub fn neighbor(&self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Left => self.ordinal().checked_sub(1).and_then(Self::from_ordinal),
            Direction::Right => Self::from_ordinal(self.ordinal() + 1),
        }
    }
}

/// A unit of work on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub priority: Priority,
}

impl Task {
    /// Create a task with the default priority
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            priority: Priority::default(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Accessible name: title plus textual priority
    pub fn accessible_label(&self) -> String {
        format!("{}, priority: {}", self.title, self.priority.label())
    }
}

/// A fixed column and its tasks in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: ColumnId, tasks: Vec<Task>) -> Self {
        Self { id, tasks }
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.tasks.iter().any(|t| t.id == task_id)
    }

    /// Task count with its unit, e.g. "3 tasks"
    pub fn count_label(&self) -> String {
        count_label(self.tasks.len())
    }
}

pub fn count_label(n: usize) -> String {
    if n == 1 {
        "1 task".to_string()
    } else {
        format!("{} tasks", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_order_and_neighbors() {
        assert_eq!(ColumnId::Backlog.neighbor(Direction::Left), None);
        assert_eq!(ColumnId::Backlog.neighbor(Direction::Right), Some(ColumnId::Todo));
        assert_eq!(ColumnId::Todo.neighbor(Direction::Right), Some(ColumnId::InProgress));
        assert_eq!(ColumnId::InProgress.neighbor(Direction::Left), Some(ColumnId::Todo));
        assert_eq!(ColumnId::Done.neighbor(Direction::Right), None);
        for (i, id) in ColumnId::ALL.iter().enumerate() {
            assert_eq!(id.ordinal(), i);
        }
    }

    #[test]
    fn test_column_id_wire_name() {
        assert_eq!(ColumnId::InProgress.as_str(), "in-progress");
        assert_eq!(serde_json::to_string(&ColumnId::InProgress).unwrap(), "\"in-progress\"");
    }

    #[test]
    fn test_priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
        let task: Task = serde_json::from_str(r#"{"id":"9","title":"No priority"}"#).unwrap();
        assert_eq!(task.priority, Priority::Medium);
    }

    #[test]
    fn test_accessible_label_includes_priority_text() {
        let task = Task::new("3", "Design card layout").with_priority(Priority::High);
        assert_eq!(task.accessible_label(), "Design card layout, priority: High");
    }

    #[test]
    fn test_count_label_has_units() {
        assert_eq!(count_label(0), "0 tasks");
        assert_eq!(count_label(1), "1 task");
        assert_eq!(count_label(3), "3 tasks");
    }
}
