//! UI Components
//!
//! Leptos components for the form and the todo list.

mod add_todo_form;
mod user_select;
mod todo_list;
mod todo_info;
mod user_info;

pub use add_todo_form::AddTodoForm;
pub use user_select::UserSelect;
pub use todo_list::TodoList;
pub use todo_info::TodoInfo;
pub use user_info::UserInfo;
