//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::models::{ColumnId, Task, TaskId};

/// Board-wide signals provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Pointer drag state: dragged task id, hovered column
    pub dnd: DndSignals<TaskId, ColumnId>,
    /// Card that should take focus once it is mounted in its column
    pub focus_request: RwSignal<Option<TaskId>>,
    /// Column whose add-task button should take focus (its last card was deleted)
    pub add_focus_request: RwSignal<Option<ColumnId>>,
    /// Fired when a card is opened
    on_open: Callback<Task>,
}

impl BoardContext {
    pub fn new(dnd: DndSignals<TaskId, ColumnId>, on_open: Callback<Task>) -> Self {
        Self {
            dnd,
            focus_request: RwSignal::new(None),
            add_focus_request: RwSignal::new(None),
            on_open,
        }
    }

    /// Ask the card with this id to focus itself
    pub fn request_focus(&self, task_id: TaskId) {
        self.focus_request.set(Some(task_id));
    }

    pub fn request_add_focus(&self, column: ColumnId) {
        self.add_focus_request.set(Some(column));
    }

    /// Notify the open-task hook
    pub fn open(&self, task: Task) {
        self.on_open.run(task);
    }
}

pub fn use_board_context() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
