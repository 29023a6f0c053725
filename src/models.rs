//! Frontend Models
//!
//! Users and todos as shown by the form and the list.

use serde::{Deserialize, Serialize};

/// A user that todos can be assigned to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// A todo with its owner embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub user_id: u32,
    /// Copy of the user referenced by `user_id`
    pub user: User,
}

impl Todo {
    /// Create a new, not yet completed todo owned by `user`
    pub fn new(id: u32, title: String, user: User) -> Self {
        Self {
            id,
            title,
            completed: false,
            user_id: user.id,
            user,
        }
    }
}

/// Todo row as stored in the seed file (owner referenced by id only)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRecord {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub user_id: u32,
}
