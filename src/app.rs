//! Kanban Board App
//!
//! Root component: four columns, pointer DnD wiring and the live region.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use reactive_stores::Store;

use crate::components::{BoardColumn, LiveRegion};
use crate::context::BoardContext;
use crate::handlers;
use crate::models::{count_label, ColumnId, Task, TaskId};
use crate::store::{store_apply, BoardState, BoardStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(BoardState::default());
    provide_context(store);

    let dnd = create_dnd_signals::<TaskId, ColumnId>();

    // Opening a task has no detail view yet; the hook only reports it
    let on_open = Callback::new(move |task: Task| {
        let json = serde_json::to_string(&task).unwrap_or_default();
        web_sys::console::log_1(&format!("[BOARD] Open task: {}", json).into());
    });
    provide_context(BoardContext::new(dnd, on_open));

    bind_global_mouseup(
        dnd,
        move |task_id: TaskId| {
            web_sys::console::log_1(&format!("[DND] Drag start: task={}", task_id).into());
            store_apply(&store, "start drag", |s| match s.board.find_task(&task_id) {
                Some((source, task)) => handlers::start_drag(s, task.clone(), source),
                None => s.clone(),
            });
        },
        move |task_id: TaskId, target: ColumnId| {
            web_sys::console::log_1(&format!("[DND] Drop: task={}, column={}", task_id, target.as_str()).into());
            store_apply(&store, "drop", |s| handlers::drop_on(s, target));
        },
        move |task_id: TaskId| {
            web_sys::console::log_1(&format!("[DND] Cancelled: task={}", task_id).into());
            store_apply(&store, "cancel drag", handlers::cancel_drag);
        },
    );

    // The column set is fixed for the lifetime of the board
    let column_ids: Vec<ColumnId> =
        store.board().with_untracked(|b| b.columns().iter().map(|c| c.id).collect());

    let board_class = move || {
        if dnd.is_active() { "board dragging" } else { "board" }
    };

    view! {
        <div class="app-layout">
            <main class="board-page">
                <h1>"Kanban Board"</h1>
                <p class="board-hint" id="board-hint">
                    "Focus a card, then use Left and Right arrows to move it, Enter to open it, or Delete to remove it."
                </p>

                <div class=board_class>
                    {column_ids
                        .into_iter()
                        .map(|column_id| view! { <BoardColumn column_id=column_id /> })
                        .collect_view()}
                </div>

                <p class="item-count">
                    {move || format!("{} on the board", count_label(store.board().with(|b| b.task_count())))}
                </p>

                <LiveRegion />
            </main>
        </div>
    }
}
