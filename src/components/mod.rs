//! UI Components
//!
//! Leptos components rendering the page model.

mod new_todo_form;
mod todo_list;
mod todo_row;
mod todo_summary;

pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use todo_summary::TodoSummary;
