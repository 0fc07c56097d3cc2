//! Todo Row Component
//!
//! Toggle, text or inline edit field, and the row's two actions.

use leptos::prelude::*;
use todo_core::render::{edit_key_intent, EditIntent, RowMode, RowModel};

use crate::context::use_todo_context;

#[component]
pub fn TodoRow(row: RowModel) -> impl IntoView {
    let ctx = use_todo_context();

    let id = row.id.clone();
    let completed = row.completed;

    let body = match &row.mode {
        RowMode::Editing { draft } => view! {
            <input
                type="text"
                class="edit-input"
                autofocus=true
                prop:value=draft.clone()
                on:input=move |ev| ctx.set_edit_value(event_target_value(&ev))
                on:keydown=move |ev| {
                    match edit_key_intent(&ev.key()) {
                        Some(EditIntent::Save) => ctx.save_edit(),
                        Some(EditIntent::Cancel) => ctx.cancel_edit(),
                        None => {}
                    }
                }
            />
        }
        .into_any(),
        RowMode::Display => view! {
            <span class=row.text_class()>{row.text.clone()}</span>
        }
        .into_any(),
    };

    let actions = row
        .actions()
        .into_iter()
        .map(|action| {
            let id = id.clone();
            let text = row.text.clone();
            view! {
                <button
                    class=action.class()
                    title=action.title()
                    on:click=move |_| ctx.run_action(action, id.clone(), text.clone())
                >
                    {action.icon()}
                </button>
            }
        })
        .collect_view();

    let toggle_id = id.clone();

    view! {
        <div class=row.row_class()>
            <button
                class=row.toggle_class()
                on:click=move |_| ctx.toggle(toggle_id.clone(), completed)
            >
                {row.check_mark()}
            </button>

            {body}

            <div class="row-actions">{actions}</div>
        </div>
    }
}
