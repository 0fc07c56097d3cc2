//! Summary footer, hidden while the list is empty.

use leptos::prelude::*;

use crate::context::use_todo_context;

#[component]
pub fn TodoSummary() -> impl IntoView {
    let ctx = use_todo_context();

    move || {
        ctx.page().with(|p| p.summary).map(|summary| {
            view! {
                <div class="summary">
                    <p>{summary.to_string()}</p>
                </div>
            }
        })
    }
}
