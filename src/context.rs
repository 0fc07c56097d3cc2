//! Application Context
//!
//! Shared page model and event handlers provided via Leptos Context API.
//! Handlers dispatch to whichever store backs the page.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_core::render::{render_page, RowAction};
use todo_core::{
    AppConfig, BackendKind, CacheUpdate, FirestoreRepository, LocalStore, PageModel,
    PersistedStore, TodoId, TodoState,
};

type RemoteStore = Rc<PersistedStore<FirestoreRepository>>;

#[derive(Clone, Copy)]
enum Driver {
    /// In-memory todos, mutated synchronously
    Local(RwSignal<LocalStore>),
    /// Cached listing of the remote collection
    Persisted {
        state: RwSignal<TodoState>,
        store: StoredValue<RemoteStore, LocalStorage>,
    },
}

/// App-wide page model and handlers
#[derive(Clone, Copy)]
pub struct TodoContext {
    page: Memo<PageModel>,
    driver: Driver,
}

impl TodoContext {
    pub fn new(config: &AppConfig) -> Self {
        match config.backend {
            BackendKind::Local => {
                let store = if config.seed_samples {
                    LocalStore::with_samples()
                } else {
                    LocalStore::new()
                };
                let local = RwSignal::new(store);
                let page = Memo::new(move |_| local.with(|s| render_page(s.todos(), s.view())));
                Self {
                    page,
                    driver: Driver::Local(local),
                }
            }
            BackendKind::Firestore => {
                let store = PersistedStore::new(FirestoreRepository::from_config(config))
                    .with_toggle_mode(config.toggle_mode);
                let state = RwSignal::new(TodoState::default());
                let page = Memo::new(move |_| state.with(|s| render_page(&s.todos, &s.view)));
                Self {
                    page,
                    driver: Driver::Persisted {
                        state,
                        store: StoredValue::new_local(Rc::new(store)),
                    },
                }
            }
        }
    }

    pub fn page(&self) -> Memo<PageModel> {
        self.page
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self.driver, Driver::Persisted { .. })
    }

    pub fn set_input(&self, value: String) {
        match self.driver {
            Driver::Local(local) => local.update(|s| s.set_input(value)),
            Driver::Persisted { state, .. } => state.update(|s| s.view.set_input(value)),
        }
    }

    /// Add the input draft
    pub fn add(&self) {
        match self.driver {
            Driver::Local(local) => local.update(|s| {
                s.submit_input();
            }),
            Driver::Persisted { state, store } => {
                let text = state.with_untracked(|s| s.view.input_value.clone());
                run_remote(state, store, move |store| async move { store.add(&text).await });
            }
        }
    }

    pub fn delete(&self, id: TodoId) {
        match self.driver {
            Driver::Local(local) => local.update(|s| s.delete(&id)),
            Driver::Persisted { state, store } => {
                run_remote(state, store, move |store| async move { store.delete(&id).await });
            }
        }
    }

    pub fn toggle(&self, id: TodoId, completed: bool) {
        match self.driver {
            Driver::Local(local) => local.update(|s| s.toggle_complete(&id)),
            Driver::Persisted { state, store } => {
                run_remote(state, store, move |store| async move {
                    store.toggle_complete(&id, completed).await
                });
            }
        }
    }

    pub fn start_edit(&self, id: TodoId, text: String) {
        match self.driver {
            Driver::Local(local) => local.update(|s| s.start_edit(id, text)),
            Driver::Persisted { state, .. } => state.update(|s| s.view.start_edit(id, text)),
        }
    }

    pub fn set_edit_value(&self, value: String) {
        match self.driver {
            Driver::Local(local) => local.update(|s| s.set_edit_value(value)),
            Driver::Persisted { state, .. } => state.update(|s| s.view.set_edit_value(value)),
        }
    }

    /// Save the edit draft
    pub fn save_edit(&self) {
        match self.driver {
            Driver::Local(local) => local.update(|s| {
                s.save_edit_draft();
            }),
            Driver::Persisted { state, store } => {
                let Some(draft) = state.with_untracked(|s| s.view.editing.clone()) else {
                    return;
                };
                run_remote(state, store, move |store| async move {
                    store.save_edit(&draft.id, &draft.value).await
                });
            }
        }
    }

    pub fn cancel_edit(&self) {
        match self.driver {
            Driver::Local(local) => local.update(|s| s.cancel_edit()),
            Driver::Persisted { state, .. } => state.update(|s| s.view.cancel_edit()),
        }
    }

    /// Refetch the remote collection; nothing to do for the local store
    pub fn refresh(&self) {
        if let Driver::Persisted { state, store } = self.driver {
            run_remote(state, store, |store| async move { store.fetch_all().await });
        }
    }

    pub fn run_action(&self, action: RowAction, id: TodoId, text: String) {
        match action {
            RowAction::Edit => self.start_edit(id, text),
            RowAction::Delete => self.delete(id),
            RowAction::Save => self.save_edit(),
            RowAction::Cancel => self.cancel_edit(),
        }
    }
}

/// Run a remote call in the background and apply its cache updates
fn run_remote<F, Fut>(state: RwSignal<TodoState>, store: StoredValue<RemoteStore, LocalStorage>, op: F)
where
    F: FnOnce(RemoteStore) -> Fut + 'static,
    Fut: Future<Output = Vec<CacheUpdate>> + 'static,
{
    let store = store.get_value();
    spawn_local(async move {
        let updates = op(store).await;
        if !updates.is_empty() {
            state.update(|s| s.apply_all(updates));
        }
    });
}

pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
