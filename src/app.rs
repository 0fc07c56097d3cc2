//! Todo List Frontend App
//!
//! Single page: add form, todo rows and summary footer.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::render::TITLE;

use crate::components::{NewTodoForm, TodoList, TodoSummary};
use crate::config;
use crate::context::TodoContext;

#[component]
pub fn App() -> impl IntoView {
    let config = config::load();
    let ctx = TodoContext::new(&config);

    // Provide context to all children
    provide_context(ctx);

    if ctx.is_persisted() {
        // Load the remote collection on mount
        Effect::new(move |_| ctx.refresh());

        if let Some(every) = config.refetch_interval {
            log::info!("polling remote todos every {}s", every.as_secs());
            spawn_local(poll(ctx, every));
        }
    }

    view! {
        <div class="page">
            <div class="card">
                <h1>{TITLE}</h1>

                <NewTodoForm />

                <TodoList />

                <TodoSummary />
            </div>
        </div>
    }
}

/// Refetch on a fixed interval for the lifetime of the page
async fn poll(ctx: TodoContext, every: Duration) {
    let millis = every.as_millis().min(u32::MAX as u128) as u32;
    loop {
        TimeoutFuture::new(millis).await;
        ctx.refresh();
    }
}
