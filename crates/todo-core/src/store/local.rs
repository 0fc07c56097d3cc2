//! Local Store
//!
//! Todos live in memory for the lifetime of the page. Every operation is
//! synchronous and total: an unknown id is simply a no-op.

use super::ids::IdGenerator;
use super::state::TodoState;
use crate::domain::{is_committable, sample_todos, Summary, Todo, TodoId};
use crate::view_state::ViewState;

#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    state: TodoState,
    ids: IdGenerator,
}

impl LocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let last = todos
            .iter()
            .filter_map(|t| match t.id {
                TodoId::Local(n) => Some(n),
                TodoId::Document(_) => None,
            })
            .max()
            .unwrap_or(0);
        Self {
            state: TodoState::new(todos),
            ids: IdGenerator::starting_after(last),
        }
    }

    /// Start with the sample todos
    pub fn with_samples() -> Self {
        Self::with_todos(sample_todos())
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn todos(&self) -> &[Todo] {
        &self.state.todos
    }

    pub fn view(&self) -> &ViewState {
        &self.state.view
    }

    pub fn summary(&self) -> Summary {
        self.state.summary()
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.state.view.set_input(value);
    }

    /// Add the current input draft
    pub fn submit_input(&mut self) -> Option<TodoId> {
        let text = self.state.view.input_value.clone();
        self.add(&text)
    }

    /// Append a todo and clear the input draft. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<TodoId> {
        if !is_committable(text) {
            return None;
        }
        let id = self.ids.next();
        self.state.todos.push(Todo::new(id.clone(), text));
        self.state.view.clear_input();
        log::debug!("added todo {}", id);
        Some(id)
    }

    pub fn delete(&mut self, id: &TodoId) {
        self.state.todos.retain(|t| &t.id != id);
        if self.state.view.is_editing(id) {
            self.state.view.cancel_edit();
        }
    }

    pub fn toggle_complete(&mut self, id: &TodoId) {
        if let Some(todo) = self.state.todos.iter_mut().find(|t| &t.id == id) {
            todo.completed = !todo.completed;
        }
    }

    pub fn start_edit(&mut self, id: TodoId, current_text: impl Into<String>) {
        self.state.view.start_edit(id, current_text);
    }

    pub fn set_edit_value(&mut self, value: impl Into<String>) {
        self.state.view.set_edit_value(value);
    }

    /// Overwrite the text and leave edit mode.
    ///
    /// Returns `false` and changes nothing when `new_text` is blank.
    pub fn save_edit(&mut self, id: &TodoId, new_text: &str) -> bool {
        if !is_committable(new_text) {
            return false;
        }
        if let Some(todo) = self.state.todos.iter_mut().find(|t| &t.id == id) {
            todo.text = new_text.to_string();
        }
        self.state.view.cancel_edit();
        true
    }

    /// Save the current edit draft
    pub fn save_edit_draft(&mut self) -> bool {
        match self.state.view.editing.clone() {
            Some(draft) => self.save_edit(&draft.id, &draft.value),
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.state.view.cancel_edit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(store: &LocalStore) -> Vec<&str> {
        store.todos().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_blank_add_is_ignored() {
        let mut store = LocalStore::new();
        store.set_input("   ");

        assert_eq!(store.submit_input(), None);
        assert_eq!(store.add(""), None);
        assert!(store.todos().is_empty());
        assert_eq!(store.view().input_value, "   ");
    }

    #[test]
    fn test_add_appends_one_incomplete_todo() {
        let mut store = LocalStore::with_samples();
        store.set_input("Buy milk");

        let id = store.submit_input().expect("added");

        assert_eq!(store.todos().len(), 4);
        let added = store.todos().last().unwrap();
        assert_eq!(added.id, id);
        assert_eq!(added.text, "Buy milk");
        assert!(!added.completed);
        assert_eq!(store.view().input_value, "");
        assert_eq!(store.todos().iter().filter(|t| t.id == id).count(), 1);
    }

    #[test]
    fn test_text_is_kept_as_entered() {
        let mut store = LocalStore::new();
        store.add("  spaced  ");
        assert_eq!(texts(&store), vec!["  spaced  "]);
    }

    #[test]
    fn test_toggle_is_symmetric() {
        let mut store = LocalStore::new();
        let id = store.add("Flip me").unwrap();

        store.toggle_complete(&id);
        assert!(store.todos()[0].completed);
        store.toggle_complete(&id);
        assert!(!store.todos()[0].completed);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = LocalStore::with_samples();
        let before = store.todos().to_vec();

        store.delete(&TodoId::Local(42));
        store.toggle_complete(&TodoId::Local(42));

        assert_eq!(store.todos(), before.as_slice());
    }

    #[test]
    fn test_blank_edit_keeps_text_and_edit_mode() {
        let mut store = LocalStore::new();
        let id = store.add("Keep me").unwrap();
        store.start_edit(id.clone(), "Keep me");
        store.set_edit_value("  ");

        assert!(!store.save_edit_draft());
        assert_eq!(texts(&store), vec!["Keep me"]);
        assert!(store.view().is_editing(&id));
    }

    #[test]
    fn test_save_edit() {
        let mut store = LocalStore::new();
        let id = store.add("Old").unwrap();
        store.start_edit(id.clone(), "Old");
        store.set_edit_value("New");

        assert!(store.save_edit_draft());
        assert_eq!(texts(&store), vec!["New"]);
        assert!(store.view().editing.is_none());
    }

    #[test]
    fn test_cancel_edit_discards_draft() {
        let mut store = LocalStore::new();
        let id = store.add("Stay").unwrap();
        store.start_edit(id, "Stay");
        store.set_edit_value("Changed");

        store.cancel_edit();

        assert_eq!(texts(&store), vec!["Stay"]);
        assert!(store.view().editing.is_none());
    }

    #[test]
    fn test_seeded_ids_are_not_reused() {
        let mut store = LocalStore::with_samples();
        let id = store.add("Fresh").unwrap();
        assert!(matches!(id, TodoId::Local(n) if n > 3));
    }

    #[test]
    fn test_scenario() {
        let mut store = LocalStore::new();
        let a = store.add("A").unwrap();
        let b = store.add("B").unwrap();
        store.toggle_complete(&a);
        store.delete(&b);

        assert_eq!(store.todos().len(), 1);
        assert_eq!(store.todos()[0].text, "A");
        assert!(store.todos()[0].completed);
        assert_eq!(store.summary(), Summary { total: 1, completed: 1, pending: 0 });
    }

    #[test]
    fn test_summary_always_adds_up() {
        let mut store = LocalStore::with_samples();
        let check = |store: &LocalStore| {
            let s = store.summary();
            assert_eq!(s.total, s.completed + s.pending);
        };
        check(&store);
        let id = store.add("x").unwrap();
        check(&store);
        store.toggle_complete(&id);
        check(&store);
        store.delete(&TodoId::Local(1));
        check(&store);
    }
}
