//! Storage seams.
//!
//! Handlers never talk to a database directly; they go through the two traits
//! below, which are injected into [`crate::state::AppState`] as trait objects.
//! [`PgStore`] is the production backend, [`InMemoryStore`] backs the tests and
//! local experiments.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{NewUser, Todo, TodoInput, User};

pub use memory::InMemoryStore;
pub use postgres::PgStore;

/// Persisted user accounts.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persists a new account. Fails with `BadRequest` if the username or email is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, AppError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError>;

    /// Returns `false` when no user has the given id.
    async fn update_password(&self, id: i32, hashed_password: &str) -> Result<bool, AppError>;

    /// Returns `false` when no user has the given id.
    async fn update_phone_number(&self, id: i32, phone_number: &str) -> Result<bool, AppError>;
}

/// Persisted todos.
///
/// The `*_owned` methods only ever see rows whose `owner_id` matches, so a
/// todo owned by someone else is indistinguishable from a missing one.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    async fn list_owned(&self, owner_id: i32) -> Result<Vec<Todo>, AppError>;

    async fn find_owned(&self, id: i32, owner_id: i32) -> Result<Option<Todo>, AppError>;

    async fn create(&self, input: TodoInput, owner_id: i32) -> Result<Todo, AppError>;

    async fn update_owned(
        &self,
        id: i32,
        owner_id: i32,
        input: TodoInput,
    ) -> Result<Option<Todo>, AppError>;

    /// Returns `false` when nothing was deleted.
    async fn delete_owned(&self, id: i32, owner_id: i32) -> Result<bool, AppError>;

    /// Every todo regardless of owner.
    async fn list_all(&self) -> Result<Vec<Todo>, AppError>;

    /// Deletes by id regardless of owner. Returns `false` when nothing was deleted.
    async fn delete_any(&self, id: i32) -> Result<bool, AppError>;
}
