//! Seed Data
//!
//! Users and todos embedded at build time, decoded once on startup.

use crate::models::{Todo, TodoRecord, User};

const USERS_JSON: &str = include_str!("../data/users.json");
const TODOS_JSON: &str = include_str!("../data/todos.json");

pub type SeedResult<T> = Result<T, SeedError>;

/// Errors raised while decoding seed data
#[derive(Debug, Clone, PartialEq)]
pub enum SeedError {
    Parse(String),
    UnknownUser { todo_id: u32, user_id: u32 },
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::Parse(msg) => write!(f, "Seed parse error: {}", msg),
            SeedError::UnknownUser { todo_id, user_id } => {
                write!(f, "Todo #{} references unknown user #{}", todo_id, user_id)
            }
        }
    }
}

impl std::error::Error for SeedError {}

impl From<serde_json::Error> for SeedError {
    fn from(err: serde_json::Error) -> Self {
        SeedError::Parse(err.to_string())
    }
}

/// Decode a JSON array of users
pub fn parse_users(json: &str) -> SeedResult<Vec<User>> {
    Ok(serde_json::from_str(json)?)
}

/// Decode a JSON array of todo rows and embed their owners
pub fn parse_todos(json: &str, users: &[User]) -> SeedResult<Vec<Todo>> {
    let records: Vec<TodoRecord> = serde_json::from_str(json)?;
    attach_users(records, users)
}

/// Join todo rows with the user list
pub fn attach_users(records: Vec<TodoRecord>, users: &[User]) -> SeedResult<Vec<Todo>> {
    records
        .into_iter()
        .map(|record| {
            let user = users
                .iter()
                .find(|u| u.id == record.user_id)
                .cloned()
                .ok_or(SeedError::UnknownUser {
                    todo_id: record.id,
                    user_id: record.user_id,
                })?;
            Ok(Todo {
                id: record.id,
                title: record.title,
                completed: record.completed,
                user_id: record.user_id,
                user,
            })
        })
        .collect()
}

/// Load the embedded users and todos
pub fn load() -> SeedResult<(Vec<User>, Vec<Todo>)> {
    let users = parse_users(USERS_JSON)?;
    let todos = parse_todos(TODOS_JSON, &users)?;
    Ok((users, todos))
}
