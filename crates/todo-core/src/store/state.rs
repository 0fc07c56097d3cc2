//! Page state shared by both store variants

use crate::domain::{Summary, Todo, TodoId};
use crate::view_state::ViewState;

/// A change the persisted store asks the page to make after a remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheUpdate {
    /// Replace the cached sequence with a fresh listing
    Replace(Vec<Todo>),
    /// The add draft was committed
    ClearInput,
    /// Drop one todo from the cache
    Remove(TodoId),
    /// The edit draft was committed
    FinishEdit,
}

/// Todos plus the transient view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    pub todos: Vec<Todo>,
    pub view: ViewState,
}

impl TodoState {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            view: ViewState::default(),
        }
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.todos)
    }

    pub fn find(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| &t.id == id)
    }

    pub fn apply(&mut self, update: CacheUpdate) {
        match update {
            CacheUpdate::Replace(todos) => {
                self.todos = todos;
                self.drop_stale_edit();
            }
            CacheUpdate::ClearInput => self.view.clear_input(),
            CacheUpdate::Remove(id) => {
                self.todos.retain(|t| t.id != id);
                self.drop_stale_edit();
            }
            CacheUpdate::FinishEdit => self.view.cancel_edit(),
        }
    }

    pub fn apply_all(&mut self, updates: impl IntoIterator<Item = CacheUpdate>) {
        for update in updates {
            self.apply(update);
        }
    }

    /// Leave edit mode when the edited todo is gone
    fn drop_stale_edit(&mut self) {
        let stale = match self.view.editing_id() {
            Some(id) => self.find(id).is_none(),
            None => false,
        };
        if stale {
            self.view.cancel_edit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_updates() {
        let mut state = TodoState::default();
        state.view.set_input("draft");

        state.apply_all(vec![
            CacheUpdate::ClearInput,
            CacheUpdate::Replace(vec![
                Todo::new(TodoId::document("a"), "A"),
                Todo::new(TodoId::document("b"), "B"),
            ]),
            CacheUpdate::Remove(TodoId::document("a")),
        ]);

        assert_eq!(state.view.input_value, "");
        assert_eq!(state.todos, vec![Todo::new(TodoId::document("b"), "B")]);
    }

    #[test]
    fn test_removing_edited_todo_leaves_edit_mode() {
        let mut state = TodoState::new(vec![Todo::new(TodoId::document("a"), "A")]);
        state.view.start_edit(TodoId::document("a"), "A");

        state.apply(CacheUpdate::Remove(TodoId::document("a")));

        assert!(state.view.editing.is_none());
    }

    #[test]
    fn test_refetch_keeps_edit_of_surviving_todo() {
        let mut state = TodoState::new(vec![Todo::new(TodoId::document("a"), "A")]);
        state.view.start_edit(TodoId::document("a"), "A!");

        state.apply(CacheUpdate::Replace(vec![Todo::new(TodoId::document("a"), "A")]));

        assert!(state.view.is_editing(&TodoId::document("a")));
    }
}
