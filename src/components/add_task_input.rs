//! Add Task Input Component
//!
//! Per-column "add task" affordance with two states, hidden and editing.
//! Revealing focuses the input; Enter submits, Escape discards, and blur
//! hides only a blank draft.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_board_context;
use crate::handlers;
use crate::models::ColumnId;
use crate::store::{store_apply, use_board_store, BoardStateStoreFields};

#[component]
pub fn AddTaskInput(column_id: ColumnId) -> impl IntoView {
    let store = use_board_store();
    let ctx = use_board_context();

    let input_ref = NodeRef::<html::Input>::new();
    let reveal_ref = NodeRef::<html::Button>::new();
    // Set when submit/cancel should hand focus back to the reveal button
    let (restore_focus, set_restore_focus) = signal(false);

    let is_editing = move || store.with(|s| s.is_editing(column_id));
    let draft = move || store.drafts().with(|d| d.get(&column_id).cloned().unwrap_or_default());

    Effect::new(move |_| {
        if is_editing() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    Effect::new(move |_| {
        if restore_focus.get() && !is_editing() {
            if let Some(button) = reveal_ref.get() {
                let _ = button.focus();
                set_restore_focus.set(false);
            }
        }
    });

    // The column's last card was deleted; focus lands here instead of on body
    Effect::new(move |_| {
        if ctx.add_focus_request.get() != Some(column_id) {
            return;
        }
        let focused = if is_editing() {
            input_ref.get().map(|input| input.focus())
        } else {
            reveal_ref.get().map(|button| button.focus())
        };
        if focused.is_some() {
            ctx.add_focus_request.set(None);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let accepted = store.with_untracked(|s| !s.draft(column_id).trim().is_empty());
        if !accepted {
            return;
        }
        web_sys::console::log_1(&format!("[INPUT] Submit in {}", column_id.as_str()).into());
        set_restore_focus.set(true);
        store_apply(&store, "add task", |s| handlers::add_task(s, column_id));
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            web_sys::console::log_1(&format!("[INPUT] Cancel in {}", column_id.as_str()).into());
            set_restore_focus.set(true);
            store_apply(&store, "cancel input", |s| handlers::cancel_input(s, column_id));
        }
    };

    let reveal = move |_: web_sys::MouseEvent| {
        store_apply(&store, "open input", |s| handlers::open_input(s, column_id));
    };

    view! {
        <div class="add-task">
            <Show
                when=is_editing
                fallback=move || view! {
                    <button
                        node_ref=reveal_ref
                        type="button"
                        class="add-task-btn"
                        aria-label=format!("Add task to {}", column_id.title())
                        on:click=reveal
                    >
                        "+ Add task"
                    </button>
                }
            >
                <form class="add-task-form" on:submit=on_submit>
                    <input
                        node_ref=input_ref
                        type="text"
                        class="add-task-input"
                        placeholder="Task title..."
                        aria-label=format!("New task title for {}", column_id.title())
                        prop:value=draft
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            store_apply(&store, "edit draft", |s| handlers::set_draft(s, column_id, text));
                        }
                        on:keydown=on_keydown
                        on:blur=move |_| {
                            store_apply(&store, "blur input", |s| handlers::blur_input(s, column_id));
                        }
                    />
                    <button type="submit" class="add-task-submit">"Add"</button>
                </form>
            </Show>
        </div>
    }
}
