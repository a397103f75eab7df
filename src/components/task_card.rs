//! Task Card Component
//!
//! A focusable, draggable card. Everything the pointer can do is also
//! reachable from the keyboard:
//! - Enter / Space: open
//! - ArrowLeft / ArrowRight: move to the adjacent column
//! - Delete: remove, focusing the next card (or the add button when the
//!   column empties)

use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::make_on_mousedown;
use wasm_bindgen::JsCast;

use crate::context::use_board_context;
use crate::handlers;
use crate::models::{ColumnId, Direction, Task};
use crate::store::{store_apply, use_board_store, BoardStateStoreFields};

#[component]
pub fn TaskCard(task: Task, column_id: ColumnId) -> impl IntoView {
    let store = use_board_store();
    let ctx = use_board_context();
    let dnd = ctx.dnd;
    let card_ref = NodeRef::<html::Div>::new();

    let id = task.id.clone();
    let title = task.title.clone();
    let priority = task.priority;
    let label = task.accessible_label();

    // Focus follows the card into its new column after a keyboard move.
    // The copy still mounted in the old column must not grab it.
    {
        let id = id.clone();
        Effect::new(move |_| {
            let requested = ctx.focus_request.with(|r| r.as_deref() == Some(id.as_str()));
            let owns = store.board().with(|b| b.find_task(&id).map(|(c, _)| c) == Some(column_id));
            if requested && owns {
                if let Some(el) = card_ref.get() {
                    let _ = el.focus();
                    ctx.focus_request.set(None);
                }
            }
        });
    }

    let open = {
        let task = task.clone();
        move || {
            store_apply(&store, "select", |s| handlers::select_task(s, &task.id));
            ctx.open(task.clone());
        }
    };

    let remove = {
        let id = id.clone();
        move || {
            let (present, next) = store.board().with_untracked(|b| {
                (b.column(column_id).contains(&id), b.focus_after_removal(column_id, &id))
            });
            if !present {
                return;
            }
            store_apply(&store, "delete", |s| handlers::delete_task(s, column_id, &id));
            match next {
                Some(next) => ctx.request_focus(next),
                None => ctx.request_add_focus(column_id),
            }
        }
    };

    let on_click = {
        let open = open.clone();
        move |_: web_sys::MouseEvent| {
            // The click that ends a drag is not an open
            if dnd.drag_just_ended_read.get_untracked() {
                return;
            }
            open();
        }
    };

    let on_keydown = {
        let task = task.clone();
        let remove = remove.clone();
        move |ev: web_sys::KeyboardEvent| {
            // Keys on the delete button belong to the button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            let direction = match ev.key().as_str() {
                "Enter" | " " => {
                    ev.prevent_default();
                    open();
                    return;
                }
                "Delete" => {
                    ev.prevent_default();
                    remove();
                    return;
                }
                "ArrowLeft" => Direction::Left,
                "ArrowRight" => Direction::Right,
                _ => return,
            };
            ev.prevent_default();
            web_sys::console::log_1(&format!("[BOARD] Keyboard move: task={}, {:?}", task.id, direction).into());
            store_apply(&store, "keyboard move", |s| {
                handlers::keyboard_move(s, task.clone(), column_id, direction)
            });
            ctx.request_focus(task.id.clone());
        }
    };

    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        remove();
    };

    let card_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("task-card");
            if store.selected().with(|s| s.as_deref() == Some(id.as_str())) { c.push_str(" selected"); }
            if dnd.is_dragging(&id) { c.push_str(" dragging"); }
            c
        }
    };

    view! {
        <div
            node_ref=card_ref
            class=card_class
            tabindex="0"
            role="group"
            aria-label=label
            aria-roledescription="task card"
            aria-describedby="board-hint"
            data-task-id=id.clone()
            on:mousedown=make_on_mousedown(dnd, id.clone())
            on:click=on_click
            on:keydown=on_keydown
        >
            <span class="task-title">{title.clone()}</span>
            <span class=format!("priority-badge priority-{}", priority.as_str())>
                {priority.label()}
            </span>
            <button
                type="button"
                class="delete-btn"
                aria-label=format!("Delete task: {}", title)
                on:click=on_delete
            >
                <span aria-hidden="true">"×"</span>
            </button>
        </div>
    }
}
