//! Todo List Component
//!
//! Rows of the page model, or the empty-state message.

use leptos::prelude::*;
use todo_core::render::{ListBody, RowModel, EMPTY_MESSAGE};

use crate::components::TodoRow;
use crate::context::use_todo_context;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_todo_context();

    let rows = move || {
        ctx.page().with(|p| match &p.body {
            ListBody::Rows(rows) => rows.clone(),
            ListBody::Empty => Vec::<RowModel>::new(),
        })
    };
    let is_empty = move || ctx.page().with(|p| p.body == ListBody::Empty);

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! { <p class="empty-state">{EMPTY_MESSAGE}</p> }
        >
            <div class="todo-list">
                <For
                    each=rows
                    // Edit drafts stay out of the key so typing keeps the field
                    key=|row| (row.id.clone(), row.text.clone(), row.completed, row.is_editing())
                    children=move |row| view! { <TodoRow row=row /> }
                />
            </div>
        </Show>
    }
}
