//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for todo storage.
//! Implementations can use a remote document database, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, NewTodo, Todo, TodoId, TodoPatch};

/// CRUD over a todo collection
///
/// Futures are not required to be `Send`: the browser build drives them
/// on a single-threaded executor.
#[async_trait(?Send)]
pub trait TodoRepository {
    /// Create a todo and return the id the store assigned
    async fn add(&self, todo: &NewTodo) -> DomainResult<TodoId>;

    /// List the whole collection in store order
    async fn list(&self) -> DomainResult<Vec<Todo>>;

    /// Write the fields present in `patch`
    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> DomainResult<()>;

    /// Delete a todo; deleting a missing id is not an error
    async fn delete(&self, id: &TodoId) -> DomainResult<()>;
}

#[async_trait(?Send)]
impl<R: TodoRepository + ?Sized> TodoRepository for std::rc::Rc<R> {
    async fn add(&self, todo: &NewTodo) -> DomainResult<TodoId> {
        (**self).add(todo).await
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        (**self).list().await
    }

    async fn update(&self, id: &TodoId, patch: &TodoPatch) -> DomainResult<()> {
        (**self).update(id, patch).await
    }

    async fn delete(&self, id: &TodoId) -> DomainResult<()> {
        (**self).delete(id).await
    }
}
