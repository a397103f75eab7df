//! Board Column Component
//!
//! A labelled group holding one column's cards and its add-task input.
//! The whole column is a pointer drop target.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseenter};

use crate::components::{AddTaskInput, TaskCard};
use crate::context::use_board_context;
use crate::models::ColumnId;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn BoardColumn(column_id: ColumnId) -> impl IntoView {
    let store = use_board_store();
    let dnd = use_board_context().dnd;

    let heading_id = format!("column-{}-heading", column_id.as_str());
    let tasks = move || store.board().with(|b| b.column(column_id).tasks.clone());
    let count = move || store.board().with(|b| b.column(column_id).count_label());

    let on_mouseenter = make_on_target_mouseenter(dnd, column_id);
    let on_mouseleave = make_on_mouseleave(dnd);

    let column_class = move || {
        let mut c = String::from("board-column");
        if dnd.is_drop_target(&column_id) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <section
            class=column_class
            role="group"
            aria-labelledby=heading_id.clone()
            data-column=column_id.as_str()
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <header class="column-header">
                <h2 id=heading_id.clone() class="column-title">
                    <span class="column-icon" aria-hidden="true">{column_id.icon()}</span>
                    " "
                    {column_id.title()}
                </h2>
                <span class="column-count">{count}</span>
            </header>

            <ul class="task-list" aria-label=format!("{} tasks", column_id.title())>
                <For
                    each=tasks
                    key=|task| task.id.clone()
                    children=move |task| {
                        view! {
                            <li class="task-list-item">
                                <TaskCard task=task column_id=column_id />
                            </li>
                        }
                    }
                />
            </ul>

            <AddTaskInput column_id=column_id />
        </section>
    }
}
