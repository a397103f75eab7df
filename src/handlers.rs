//! Interaction Handlers
//!
//! Pure transitions `&BoardState -> BoardState`. Invalid or boundary input
//! returns an equal state instead of failing.

use std::collections::HashSet;

use crate::models::{ColumnId, Direction, Task};
use crate::store::{BoardState, DragPayload};

/// Record the drag payload. The board is untouched.
pub fn start_drag(state: &BoardState, task: Task, source: ColumnId) -> BoardState {
    BoardState {
        drag: Some(DragPayload { task, source }),
        ..state.clone()
    }
}

/// Pointer released away from every column
pub fn cancel_drag(state: &BoardState) -> BoardState {
    BoardState {
        drag: None,
        ..state.clone()
    }
}

/// Drop the dragged task onto `target`, appending it to the tail
pub fn drop_on(state: &BoardState, target: ColumnId) -> BoardState {
    let Some(payload) = &state.drag else {
        return state.clone();
    };
    let board = state.board.with_task_moved(&payload.task.id, payload.source, target);
    let announcement = if board != state.board {
        state.announce(format!("Moved \"{}\" to {}.", payload.task.title, target.title()))
    } else {
        state.announcement.clone()
    };
    BoardState {
        board,
        drag: None,
        announcement,
        ..state.clone()
    }
}

/// Create a task from the column's draft
pub fn add_task(state: &BoardState, column: ColumnId) -> BoardState {
    let title = state.draft(column).trim();
    if title.is_empty() {
        return state.clone();
    }

    let taken: HashSet<_> = state.board.task_ids().into_iter().collect();
    let mut next_id = state.next_id;
    let mut id = next_id.to_string();
    while taken.contains(&id) {
        next_id += 1;
        id = next_id.to_string();
    }

    let task = Task::new(id, title);
    let announcement = format!("Added \"{}\" to {}.", task.title, column.title());
    let mut drafts = state.drafts.clone();
    drafts.remove(&column);

    BoardState {
        board: state.board.with_task_appended(column, task),
        drafts,
        open_input: state.open_input.filter(|c| *c != column),
        next_id: next_id + 1,
        announcement: state.announce(announcement),
        ..state.clone()
    }
}

/// Remove a task from the column that owns it. A wrong column means not found.
pub fn delete_task(state: &BoardState, column: ColumnId, task_id: &str) -> BoardState {
    let Some(task) = state.board.column(column).tasks.iter().find(|t| t.id == task_id) else {
        return state.clone();
    };
    BoardState {
        board: state.board.with_task_removed(column, task_id),
        selected: state.selected.clone().filter(|s| s != task_id),
        announcement: state.announce(format!("Deleted \"{}\" from {}.", task.title, column.title())),
        ..state.clone()
    }
}

/// Keyboard equivalent of dragging to the adjacent column
pub fn keyboard_move(state: &BoardState, task: Task, source: ColumnId, direction: Direction) -> BoardState {
    let Some(target) = source.neighbor(direction) else {
        let edge = match direction {
            Direction::Left => "first",
            Direction::Right => "last",
        };
        return BoardState {
            announcement: state.announce(format!("\"{}\" is already in the {} column.", task.title, edge)),
            ..state.clone()
        };
    };
    drop_on(&start_drag(state, task, source), target)
}

/// Mark a task as selected
pub fn select_task(state: &BoardState, task_id: &str) -> BoardState {
    BoardState {
        selected: Some(task_id.to_string()),
        ..state.clone()
    }
}

// ========================
// Add-task input: hidden <-> editing
// ========================

/// hidden -> editing. Only one column edits at a time.
pub fn open_input(state: &BoardState, column: ColumnId) -> BoardState {
    BoardState {
        open_input: Some(column),
        ..state.clone()
    }
}

pub fn set_draft(state: &BoardState, column: ColumnId, text: String) -> BoardState {
    let mut drafts = state.drafts.clone();
    drafts.insert(column, text);
    BoardState {
        drafts,
        ..state.clone()
    }
}

/// Escape: discard the draft and hide the input
pub fn cancel_input(state: &BoardState, column: ColumnId) -> BoardState {
    let mut drafts = state.drafts.clone();
    drafts.remove(&column);
    BoardState {
        drafts,
        open_input: state.open_input.filter(|c| *c != column),
        ..state.clone()
    }
}

/// Focus left the input: hide only when the draft is blank
pub fn blur_input(state: &BoardState, column: ColumnId) -> BoardState {
    if !state.draft(column).trim().is_empty() {
        return state.clone();
    }
    cancel_input(state, column)
}
