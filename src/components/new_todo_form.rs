//! New Todo Form Component
//!
//! Text field plus button; Enter in the field adds too.

use leptos::prelude::*;
use todo_core::render::{add_key_intent, ADD_LABEL, ADD_PLACEHOLDER};

use crate::context::use_todo_context;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todo_context();
    let input_value = move || ctx.page().with(|p| p.input_value.clone());

    view! {
        <div class="new-todo-row">
            <input
                type="text"
                class="new-todo-input"
                placeholder=ADD_PLACEHOLDER
                prop:value=input_value
                on:input=move |ev| ctx.set_input(event_target_value(&ev))
                on:keydown=move |ev| {
                    if add_key_intent(&ev.key()) {
                        ctx.add();
                    }
                }
            />
            <button class="add-btn" on:click=move |_| ctx.add()>
                {ADD_LABEL}
            </button>
        </div>
    }
}
