use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Input structure for creating or fully replacing a todo.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TodoInput {
    /// Must be between 3 and 100 characters.
    #[validate(length(min = 3, max = 100))]
    pub title: String,

    /// Must be between 3 and 100 characters.
    #[validate(length(min = 3, max = 100))]
    pub description: String,

    /// 1 (lowest) to 5 (highest).
    #[validate(range(min = 1, max = 5))]
    pub priority: i32,

    #[serde(default)]
    pub complete: bool,
}

/// A todo as stored in the database and returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
    /// Identifier of the user who owns the todo.
    pub owner_id: i32,
}

impl Todo {
    /// Builds a todo from validated input; the store decides the `id`.
    pub fn new(id: i32, input: TodoInput, owner_id: i32) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            priority: input.priority,
            complete: input.complete,
            owner_id,
        }
    }

    /// Full replace of every mutable field. `id` and `owner_id` are kept.
    pub fn apply(&mut self, input: TodoInput) {
        self.title = input.title;
        self.description = input.description;
        self.priority = input.priority;
        self.complete = input.complete;
    }
}
