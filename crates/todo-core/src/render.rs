//! Page Model
//!
//! `render_page` turns the todos and the view state into everything the
//! page shows. Components only read the model; they never look at the
//! store directly.

use crate::domain::{Summary, Todo, TodoId};
use crate::view_state::ViewState;

pub const TITLE: &str = "ToDo List";
pub const ADD_PLACEHOLDER: &str = "Add your new todo";
pub const ADD_LABEL: &str = "Add Todo";
pub const EMPTY_MESSAGE: &str = "No todos yet. Add one above!";
pub const CHECK_MARK: &str = "✓";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    pub input_value: String,
    pub body: ListBody,
    /// Hidden while the list is empty
    pub summary: Option<Summary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Empty,
    Rows(Vec<RowModel>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowMode {
    Display,
    Editing { draft: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
    Save,
    Cancel,
}

impl RowAction {
    pub fn title(&self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
            RowAction::Save => "Save",
            RowAction::Cancel => "Cancel",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RowAction::Edit => "✎",
            RowAction::Delete => "🗑",
            RowAction::Save => CHECK_MARK,
            RowAction::Cancel => "✕",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            RowAction::Edit => "action-btn edit-btn",
            RowAction::Delete => "action-btn delete-btn",
            RowAction::Save => "action-btn save-btn",
            RowAction::Cancel => "action-btn cancel-btn",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    pub mode: RowMode,
}

impl RowModel {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, RowMode::Editing { .. })
    }

    pub fn row_class(&self) -> &'static str {
        if self.completed { "todo-row completed" } else { "todo-row" }
    }

    pub fn toggle_class(&self) -> &'static str {
        if self.completed { "toggle-btn checked" } else { "toggle-btn" }
    }

    /// Shown inside the toggle control
    pub fn check_mark(&self) -> Option<&'static str> {
        self.completed.then_some(CHECK_MARK)
    }

    /// Completed text is struck through and dimmed
    pub fn text_class(&self) -> &'static str {
        if self.completed { "todo-text done" } else { "todo-text" }
    }

    pub fn actions(&self) -> [RowAction; 2] {
        if self.is_editing() {
            [RowAction::Save, RowAction::Cancel]
        } else {
            [RowAction::Edit, RowAction::Delete]
        }
    }
}

pub fn render_page(todos: &[Todo], view: &ViewState) -> PageModel {
    if todos.is_empty() {
        return PageModel {
            input_value: view.input_value.clone(),
            body: ListBody::Empty,
            summary: None,
        };
    }

    let rows = todos
        .iter()
        .map(|todo| {
            let mode = match &view.editing {
                Some(draft) if draft.id == todo.id => RowMode::Editing {
                    draft: draft.value.clone(),
                },
                _ => RowMode::Display,
            };
            RowModel {
                id: todo.id.clone(),
                text: todo.text.clone(),
                completed: todo.completed,
                mode,
            }
        })
        .collect();

    PageModel {
        input_value: view.input_value.clone(),
        body: ListBody::Rows(rows),
        summary: Some(Summary::of(todos)),
    }
}

/// What a key press in an edit field asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditIntent {
    Save,
    Cancel,
}

/// Enter in the add field adds the draft
pub fn add_key_intent(key: &str) -> bool {
    key == "Enter"
}

pub fn edit_key_intent(key: &str) -> Option<EditIntent> {
    match key {
        "Enter" => Some(EditIntent::Save),
        "Escape" => Some(EditIntent::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_todos;

    fn rows(page: &PageModel) -> &[RowModel] {
        match &page.body {
            ListBody::Rows(rows) => rows.as_slice(),
            ListBody::Empty => &[],
        }
    }

    #[test]
    fn test_empty_page() {
        let page = render_page(&[], &ViewState::default());
        assert_eq!(page.body, ListBody::Empty);
        assert_eq!(page.summary, None);
    }

    #[test]
    fn test_rows_follow_todo_order() {
        let page = render_page(&sample_todos(), &ViewState::default());
        let texts: Vec<_> = rows(&page).iter().map(|r| r.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Sample todo - Click edit to modify",
                "Click the checkmark to mark as complete",
                "This one is completed",
            ]
        );
        assert_eq!(page.summary.unwrap().to_string(), "Total: 3 | Completed: 1 | Pending: 2");
    }

    #[test]
    fn test_completed_row() {
        let page = render_page(&sample_todos(), &ViewState::default());
        let done = &rows(&page)[2];
        assert_eq!(done.check_mark(), Some(CHECK_MARK));
        assert_eq!(done.text_class(), "todo-text done");
        assert_eq!(rows(&page)[0].check_mark(), None);
    }

    #[test]
    fn test_only_edited_row_swaps_controls() {
        let mut view = ViewState::default();
        view.start_edit(TodoId::Local(2), "Click the checkmark to mark as complete");
        view.set_edit_value("Changed");

        let page = render_page(&sample_todos(), &view);
        let rows = rows(&page);

        assert_eq!(rows[0].actions(), [RowAction::Edit, RowAction::Delete]);
        assert_eq!(rows[1].mode, RowMode::Editing { draft: "Changed".to_string() });
        assert_eq!(rows[1].actions(), [RowAction::Save, RowAction::Cancel]);
        assert_eq!(rows.iter().filter(|r| r.is_editing()).count(), 1);
    }

    #[test]
    fn test_input_draft_is_rendered() {
        let mut view = ViewState::default();
        view.set_input("half typed");
        assert_eq!(render_page(&[], &view).input_value, "half typed");
    }

    #[test]
    fn test_key_intents() {
        assert!(add_key_intent("Enter"));
        assert!(!add_key_intent("a"));
        assert_eq!(edit_key_intent("Enter"), Some(EditIntent::Save));
        assert_eq!(edit_key_intent("Escape"), Some(EditIntent::Cancel));
        assert_eq!(edit_key_intent("Tab"), None);
    }
}
