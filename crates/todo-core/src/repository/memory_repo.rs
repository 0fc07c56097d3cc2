//! In-Memory Repository
//!
//! Keeps the collection in a vector; ids imitate database document ids.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::traits::TodoRepository;
use crate::domain::{DomainError, DomainResult, Entity, NewTodo, Todo, TodoId, TodoPatch};

#[derive(Default)]
struct Inner {
    todos: Vec<Todo>,
    next_id: u64,
}

/// Todo repository backed by process memory
#[derive(Default)]
pub struct InMemoryRepository {
    inner: Mutex<Inner>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing collection; new ids continue after the
    /// highest `mem-N` already present.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos
            .iter()
            .filter_map(|t| memory_suffix(t.id()))
            .max()
            .unwrap_or(0);
        Self {
            inner: Mutex::new(Inner { todos, next_id }),
        }
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| DomainError::Internal(format!("repository lock poisoned: {}", e)))
    }
}

fn memory_suffix(id: &TodoId) -> Option<u64> {
    match id {
        TodoId::Document(doc) => doc.strip_prefix("mem-")?.parse().ok(),
        TodoId::Local(_) => None,
    }
}

#[async_trait(?Send)]
impl TodoRepository for InMemoryRepository {
    async fn add(&self, todo: &NewTodo) -> DomainResult<TodoId> {
        let mut inner = self.lock()?;
        inner.next_id += 1;
        let id = TodoId::document(format!("mem-{}", inner.next_id));
        inner.todos.push(Todo {
            id: id.clone(),
            text: todo.text.clone(),
            completed: todo.completed,
        });
        Ok(id)
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        Ok(self.lock()?.todos.clone())
    }

    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> DomainResult<()> {
        let mut inner = self.lock()?;
        let todo = inner
            .todos
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        patch.apply_to(todo);
        Ok(())
    }

    async fn delete(&self, id: &TodoId) -> DomainResult<()> {
        self.lock()?.todos.retain(|t| t.id() != id);
        Ok(())
    }
}
