//! Board State Store
//!
//! One `BoardState` record held in a reactive_stores `Store` and replaced
//! wholesale on every event.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::Board;
use crate::models::{ColumnId, Task, TaskId};

/// First id handed out by add-task; the seed uses "1" through "5"
pub const FIRST_GENERATED_ID: u64 = 6;

/// Task being dragged and the column it came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragPayload {
    pub task: Task,
    pub source: ColumnId,
}

/// Live region message. `seq` grows with every announcement so repeating
/// the same sentence is still a change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    pub seq: u64,
    pub text: String,
}

/// Board plus transient UI state
#[derive(Clone, Debug, PartialEq, Store)]
pub struct BoardState {
    pub board: Board,
    /// In-flight drag, if any
    pub drag: Option<DragPayload>,
    /// Draft input text per column
    pub drafts: HashMap<ColumnId, String>,
    /// Column whose add-task input is showing
    pub open_input: Option<ColumnId>,
    pub selected: Option<TaskId>,
    /// Counter for generated task ids
    pub next_id: u64,
    /// Message for the screen-reader live region
    pub announcement: Option<Announcement>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(Board::seeded())
    }
}

impl BoardState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            drag: None,
            drafts: HashMap::new(),
            open_input: None,
            selected: None,
            next_id: FIRST_GENERATED_ID,
            announcement: None,
        }
    }

    /// Current draft for a column ("" when none)
    pub fn draft(&self, column: ColumnId) -> &str {
        self.drafts.get(&column).map(String::as_str).unwrap_or("")
    }

    pub fn is_editing(&self, column: ColumnId) -> bool {
        self.open_input == Some(column)
    }

    /// Next announcement carrying `text`
    pub fn announce(&self, text: String) -> Option<Announcement> {
        let seq = self.announcement.as_ref().map_or(1, |a| a.seq + 1);
        Some(Announcement { seq, text })
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run a handler against the current state and store its result.
///
/// Nothing is written when the handler returns an identical state.
pub fn store_apply<F>(store: &BoardStore, action: &str, handler: F)
where
    F: FnOnce(&BoardState) -> BoardState,
{
    let current = store.get_untracked();
    let next = handler(&current);
    if next == current {
        return;
    }
    if next.board != current.board {
        web_sys::console::log_1(
            &format!("[BOARD] {}: {} tasks on board", action, next.board.task_count()).into(),
        );
    }
    store.set(next);
}
