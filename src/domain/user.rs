use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::TodoError;
use super::todo::{Todo, TodoId};

#[derive(Debug, Clone, Copy, Hash, Serialize, PartialEq, Eq)]
pub struct UserId(pub Uuid);

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub todos: Vec<Todo>,
}

impl User {
    pub fn new(id: UserId, registration: Registration) -> Self {
        Self { id, name: registration.name, username: registration.username, todos: Vec::new() }
    }

    /// Position of `id` within this user's list; other users' todos are never visible.
    pub fn todo_index(&self, id: TodoId) -> Result<usize, TodoError> {
        self.todos.iter().position(|todo| todo.id == id).ok_or(TodoError::TodoNotFound)
    }
}

/// Registration request body. Both fields must be present and non-empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUser {
    pub name: Option<String>,
    pub username: Option<String>,
}

/// A registration that passed the presence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub username: String,
}

impl TryFrom<NewUser> for Registration {
    type Error = TodoError;

    fn try_from(input: NewUser) -> Result<Self, Self::Error> {
        match (input.name, input.username) {
            (Some(name), Some(username)) if !name.is_empty() && !username.is_empty() => {
                Ok(Self { name, username })
            }
            _ => Err(TodoError::Validation),
        }
    }
}
