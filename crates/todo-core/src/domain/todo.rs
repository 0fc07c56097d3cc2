//! Todo Entity
//!
//! A single task entry with text, completion flag and identity.

use std::fmt;

use chrono::{DateTime, Utc};

use super::entity::Entity;

/// Identity of a todo.
///
/// Local todos carry a timestamp-derived number, remote todos carry the
/// document id assigned by the database. The two schemes never mix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TodoId {
    Local(u64),
    Document(String),
}

impl TodoId {
    pub fn document(id: impl Into<String>) -> Self {
        TodoId::Document(id.into())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Local(n) => write!(f, "{}", n),
            TodoId::Document(id) => f.write_str(id),
        }
    }
}

/// A todo item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Text as entered by the user
    pub text: String,
    /// Completion status
    pub completed: bool,
}

impl Todo {
    /// Create a new, not yet completed todo
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }
}

impl Entity for Todo {
    type Id = TodoId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Text is committable when something other than whitespace remains.
pub fn is_committable(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Payload for creating a todo in a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub text: String,
    pub completed: bool,
    /// Written once, never read back
    pub created_at: DateTime<Utc>,
}

impl NewTodo {
    pub fn new(text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            created_at,
        }
    }
}

/// Partial update: only the `Some` fields are written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.completed.is_none()
    }

    /// Apply the patch to an existing todo
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(text) = &self.text {
            todo.text = text.clone();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

/// The todos a fresh local page starts with
pub fn sample_todos() -> Vec<Todo> {
    vec![
        Todo::new(TodoId::Local(1), "Sample todo - Click edit to modify"),
        Todo::new(TodoId::Local(2), "Click the checkmark to mark as complete"),
        Todo::new(TodoId::Local(3), "This one is completed").completed(),
    ]
}
