//! Domain Layer
//!
//! Contains the todo entity and core abstractions.

mod entity;
mod summary;
mod todo;

pub use entity::{DomainError, DomainResult, Entity};
pub use summary::Summary;
pub use todo::{is_committable, sample_todos, NewTodo, Todo, TodoId, TodoPatch};
