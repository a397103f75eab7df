//! Board Value
//!
//! The four fixed columns and their tasks. Every operation returns a new
//! `Board`; the receiver is never modified, so older snapshots stay valid.

use serde::Serialize;

use crate::models::{Column, ColumnId, Priority, Task, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// All four columns, no tasks
    pub fn empty() -> Self {
        Self {
            columns: ColumnId::ALL.iter().map(|id| Column::new(*id, Vec::new())).collect(),
        }
    }

    /// Starting board shown on page load
    pub fn seeded() -> Self {
        Self::empty()
            .with_task_appended(
                ColumnId::Backlog,
                Task::new("1", "Research competitor boards").with_priority(Priority::Low),
            )
            .with_task_appended(ColumnId::Backlog, Task::new("2", "Draft onboarding copy"))
            .with_task_appended(
                ColumnId::Todo,
                Task::new("3", "Design card layout").with_priority(Priority::High),
            )
            .with_task_appended(
                ColumnId::InProgress,
                Task::new("4", "Implement drag and drop").with_priority(Priority::Urgent),
            )
            .with_task_appended(ColumnId::Done, Task::new("5", "Set up project skeleton"))
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: ColumnId) -> &Column {
        // Columns are built from ColumnId::ALL, so the ordinal always indexes its own column
        &self.columns[id.ordinal()]
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Ids of every task, in board order
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter().map(|t| t.id.clone()))
            .collect()
    }

    pub fn contains_task(&self, task_id: &str) -> bool {
        self.columns.iter().any(|c| c.contains(task_id))
    }

    /// Locate a task and its owning column
    pub fn find_task(&self, task_id: &str) -> Option<(ColumnId, &Task)> {
        self.columns.iter().find_map(|c| {
            c.tasks.iter().find(|t| t.id == task_id).map(|t| (c.id, t))
        })
    }

    /// Card that should take focus once `task_id` leaves `column`: the next
    /// card, else the previous one. None when the column would be empty.
    pub fn focus_after_removal(&self, column: ColumnId, task_id: &str) -> Option<TaskId> {
        let tasks = &self.column(column).tasks;
        let index = tasks.iter().position(|t| t.id == task_id)?;
        tasks
            .get(index + 1)
            .or_else(|| index.checked_sub(1).and_then(|i| tasks.get(i)))
            .map(|t| t.id.clone())
    }

    /// Replace one column's task sequence, sharing nothing with `self`
    fn with_column_tasks(&self, id: ColumnId, tasks: Vec<Task>) -> Self {
        let mut columns = self.columns.clone();
        columns[id.ordinal()] = Column::new(id, tasks);
        Self { columns }
    }

    /// Append a task to the tail of a column
    pub fn with_task_appended(&self, id: ColumnId, task: Task) -> Self {
        let mut tasks = self.column(id).tasks.clone();
        tasks.push(task);
        self.with_column_tasks(id, tasks)
    }

    /// Remove a task from the named column only. Unchanged if it is not there.
    pub fn with_task_removed(&self, id: ColumnId, task_id: &str) -> Self {
        if !self.column(id).contains(task_id) {
            return self.clone();
        }
        let tasks = self
            .column(id)
            .tasks
            .iter()
            .filter(|t| t.id != task_id)
            .cloned()
            .collect();
        self.with_column_tasks(id, tasks)
    }

    /// Move a task from `from` to the tail of `to`.
    ///
    /// Unchanged when `from == to` or when the task is not in `from`.
    pub fn with_task_moved(&self, task_id: &str, from: ColumnId, to: ColumnId) -> Self {
        if from == to {
            return self.clone();
        }
        let Some(task) = self.column(from).tasks.iter().find(|t| t.id == task_id).cloned() else {
            return self.clone();
        };
        self.with_task_removed(from, task_id).with_task_appended(to, task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(board: &Board, id: ColumnId) -> Vec<&str> {
        board.column(id).tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_seeded_board() {
        let board = Board::seeded();
        assert_eq!(board.columns().len(), 4);
        assert_eq!(ids(&board, ColumnId::Backlog), vec!["1", "2"]);
        assert_eq!(ids(&board, ColumnId::Todo), vec!["3"]);
        assert_eq!(ids(&board, ColumnId::InProgress), vec!["4"]);
        assert_eq!(ids(&board, ColumnId::Done), vec!["5"]);
        assert_eq!(board.task_count(), 5);
    }

    #[test]
    fn test_move_appends_to_target_tail() {
        let board = Board::seeded();
        let moved = board.with_task_moved("1", ColumnId::Backlog, ColumnId::Done);
        assert_eq!(ids(&moved, ColumnId::Backlog), vec!["2"]);
        assert_eq!(ids(&moved, ColumnId::Done), vec!["5", "1"]);
        assert_eq!(moved.task_count(), board.task_count());
        // Original snapshot untouched
        assert_eq!(ids(&board, ColumnId::Backlog), vec!["1", "2"]);
    }

    #[test]
    fn test_move_from_wrong_column_is_noop() {
        let board = Board::seeded();
        assert_eq!(board.with_task_moved("3", ColumnId::Backlog, ColumnId::Done), board);
        assert_eq!(board.with_task_moved("3", ColumnId::Todo, ColumnId::Todo), board);
    }

    #[test]
    fn test_remove_is_column_scoped() {
        let board = Board::seeded();
        assert_eq!(board.with_task_removed(ColumnId::Done, "3"), board);
        let removed = board.with_task_removed(ColumnId::Todo, "3");
        assert!(!removed.contains_task("3"));
        assert_eq!(removed.task_count(), 4);
    }

    #[test]
    fn test_focus_after_removal() {
        let board = Board::seeded().with_task_appended(ColumnId::Backlog, Task::new("6", "Write tests"));
        assert_eq!(board.focus_after_removal(ColumnId::Backlog, "1"), Some("2".to_string()));
        assert_eq!(board.focus_after_removal(ColumnId::Backlog, "2"), Some("6".to_string()));
        assert_eq!(board.focus_after_removal(ColumnId::Backlog, "6"), Some("2".to_string()));
        // Last card in its column: nothing left to focus
        assert_eq!(board.focus_after_removal(ColumnId::Todo, "3"), None);
        assert_eq!(board.focus_after_removal(ColumnId::Done, "3"), None);
    }

    #[test]
    fn test_find_task() {
        let board = Board::seeded();
        let (col, task) = board.find_task("4").unwrap();
        assert_eq!(col, ColumnId::InProgress);
        assert_eq!(task.title, "Implement drag and drop");
        assert!(board.find_task("99").is_none());
    }
}
