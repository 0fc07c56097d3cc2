//! Transient UI state: the add draft and the single row being edited.

use crate::domain::TodoId;

/// Unsaved text of the row in edit mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: TodoId,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Draft of the add field
    pub input_value: String,
    /// At most one row is edited at a time
    pub editing: Option<EditDraft>,
}

impl ViewState {
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input_value = value.into();
    }

    pub fn clear_input(&mut self) {
        self.input_value.clear();
    }

    /// Enter edit mode for `id`, replacing any other edit in progress
    pub fn start_edit(&mut self, id: TodoId, current_text: impl Into<String>) {
        self.editing = Some(EditDraft {
            id,
            value: current_text.into(),
        });
    }

    /// Update the edit draft; ignored when nothing is being edited
    pub fn set_edit_value(&mut self, value: impl Into<String>) {
        if let Some(draft) = self.editing.as_mut() {
            draft.value = value.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn editing_id(&self) -> Option<&TodoId> {
        self.editing.as_ref().map(|d| &d.id)
    }

    pub fn is_editing(&self, id: &TodoId) -> bool {
        self.editing_id() == Some(id)
    }
}
