//! Persisted Store
//!
//! Todos live in a remote collection; the page keeps a cache of the last
//! listing. Each operation talks to the repository and returns the cache
//! updates to apply. Remote failures are logged and yield no updates, so
//! the cache may drift from the remote copy until the next refetch.

use chrono::Utc;

use super::state::CacheUpdate;
use crate::config::ToggleMode;
use crate::domain::{is_committable, NewTodo, TodoId, TodoPatch};
use crate::repository::TodoRepository;

pub struct PersistedStore<R> {
    repo: R,
    toggle_mode: ToggleMode,
}

impl<R: TodoRepository> PersistedStore<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            toggle_mode: ToggleMode::default(),
        }
    }

    pub fn with_toggle_mode(mut self, mode: ToggleMode) -> Self {
        self.toggle_mode = mode;
        self
    }

    /// List the whole collection; on failure the previous cache stays.
    pub async fn fetch_all(&self) -> Vec<CacheUpdate> {
        match self.repo.list().await {
            Ok(todos) => vec![CacheUpdate::Replace(todos)],
            Err(e) => {
                log::error!("Error fetching todos: {}", e);
                Vec::new()
            }
        }
    }

    /// Write a new todo, then clear the draft and refetch.
    pub async fn add(&self, text: &str) -> Vec<CacheUpdate> {
        if !is_committable(text) {
            return Vec::new();
        }
        match self.repo.add(&NewTodo::new(text, Utc::now())).await {
            Ok(id) => {
                log::info!("Todo added with id {}", id);
                let mut updates = vec![CacheUpdate::ClearInput];
                updates.extend(self.fetch_all().await);
                updates
            }
            Err(e) => {
                log::error!("Error adding todo: {}", e);
                Vec::new()
            }
        }
    }

    /// Delete remotely and drop from the cache without a refetch.
    pub async fn delete(&self, id: &TodoId) -> Vec<CacheUpdate> {
        match self.repo.delete(id).await {
            Ok(()) => vec![CacheUpdate::Remove(id.clone())],
            Err(e) => {
                log::error!("Error deleting todo {}: {}", id, e);
                Vec::new()
            }
        }
    }

    /// Write the completion flag; the refetch carries the new state back.
    ///
    /// With [`ToggleMode::CompleteOnly`] this always writes `true`, so a
    /// completed todo stays completed.
    pub async fn toggle_complete(&self, id: &TodoId, currently_completed: bool) -> Vec<CacheUpdate> {
        let completed = match self.toggle_mode {
            ToggleMode::CompleteOnly => true,
            ToggleMode::Flip => !currently_completed,
        };
        match self.repo.update(id, &TodoPatch::completed(completed)).await {
            Ok(()) => self.fetch_all().await,
            Err(e) => {
                log::error!("Error updating todo {}: {}", id, e);
                Vec::new()
            }
        }
    }

    /// Write new text, leave edit mode and refetch. Blank text is ignored.
    pub async fn save_edit(&self, id: &TodoId, text: &str) -> Vec<CacheUpdate> {
        if !is_committable(text) {
            return Vec::new();
        }
        match self.repo.update(id, &TodoPatch::text(text)).await {
            Ok(()) => {
                let mut updates = vec![CacheUpdate::FinishEdit];
                updates.extend(self.fetch_all().await);
                updates
            }
            Err(e) => {
                log::error!("Error editing todo {}: {}", id, e);
                Vec::new()
            }
        }
    }
}
