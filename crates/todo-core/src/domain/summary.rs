//! Completion counts shown under the list.

use std::fmt;

use super::todo::Todo;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl Summary {
    pub fn of(todos: &[Todo]) -> Self {
        let completed = todos.iter().filter(|t| t.completed).count();
        Self {
            total: todos.len(),
            completed,
            pending: todos.len() - completed,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {} | Completed: {} | Pending: {}",
            self.total, self.completed, self.pending
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{sample_todos, TodoId};

    #[test]
    fn test_counts_add_up() {
        let summary = Summary::of(&sample_todos());
        assert_eq!(summary, Summary { total: 3, completed: 1, pending: 2 });
        assert_eq!(summary.total, summary.completed + summary.pending);
    }

    #[test]
    fn test_empty() {
        assert_eq!(Summary::of(&[]), Summary::default());
    }

    #[test]
    fn test_display() {
        let todos = vec![Todo::new(TodoId::Local(1), "A").completed()];
        assert_eq!(Summary::of(&todos).to_string(), "Total: 1 | Completed: 1 | Pending: 0");
    }
}
