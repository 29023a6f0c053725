//! Todo List Projection
//!
//! Flattens todos into the rows the list component displays.

use crate::models::Todo;

/// One displayed todo
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRow {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub user_name: String,
    pub user_email: String,
}

impl TodoRow {
    pub fn class(&self) -> &'static str {
        if self.completed { "TodoInfo TodoInfo--completed" } else { "TodoInfo" }
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.user_email)
    }
}

/// Rows in collection order
pub fn todo_rows(todos: &[Todo]) -> Vec<TodoRow> {
    todos
        .iter()
        .map(|todo| TodoRow {
            id: todo.id,
            title: todo.title.clone(),
            completed: todo.completed,
            user_name: todo.user.name.clone(),
            user_email: todo.user.email.clone(),
        })
        .collect()
}
