use async_trait::async_trait;
use sqlx::PgPool;

use super::{TodoStore, UserStore};
use crate::error::AppError;
use crate::models::{NewUser, Todo, TodoInput, User};

const USER_COLUMNS: &str =
    "id, username, email, first_name, last_name, hashed_password, role, phone_number";
const TODO_COLUMNS: &str = "id, title, description, priority, complete, owner_id";

/// Postgres-backed store. Every call checks a connection out of the pool and
/// hands it back when the query finishes, whatever the outcome.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        let sql = format!(
            "INSERT INTO users (username, email, first_name, last_name, hashed_password, role, phone_number)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {USER_COLUMNS}"
        );
        let created = sqlx::query_as::<_, User>(&sql)
            .bind(user.username)
            .bind(user.email)
            .bind(user.first_name)
            .bind(user.last_name)
            .bind(user.hashed_password)
            .bind(user.role)
            .bind(user.phone_number)
            .fetch_one(&self.pool)
            .await?;
        Ok(created)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn update_password(&self, id: i32, hashed_password: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE users SET hashed_password = $1 WHERE id = $2")
            .bind(hashed_password)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_phone_number(&self, id: i32, phone_number: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE users SET phone_number = $1 WHERE id = $2")
            .bind(phone_number)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl TodoStore for PgStore {
    async fn list_owned(&self, owner_id: i32) -> Result<Vec<Todo>, AppError> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos WHERE owner_id = $1 ORDER BY id");
        let todos = sqlx::query_as::<_, Todo>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn find_owned(&self, id: i32, owner_id: i32) -> Result<Option<Todo>, AppError> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = $1 AND owner_id = $2");
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn create(&self, input: TodoInput, owner_id: i32) -> Result<Todo, AppError> {
        let sql = format!(
            "INSERT INTO todos (title, description, priority, complete, owner_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {TODO_COLUMNS}"
        );
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(input.title)
            .bind(input.description)
            .bind(input.priority)
            .bind(input.complete)
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn update_owned(
        &self,
        id: i32,
        owner_id: i32,
        input: TodoInput,
    ) -> Result<Option<Todo>, AppError> {
        // Ownership is part of the WHERE clause, so a foreign row simply matches nothing.
        let sql = format!(
            "UPDATE todos
             SET title = $1, description = $2, priority = $3, complete = $4
             WHERE id = $5 AND owner_id = $6
             RETURNING {TODO_COLUMNS}"
        );
        let todo = sqlx::query_as::<_, Todo>(&sql)
            .bind(input.title)
            .bind(input.description)
            .bind(input.priority)
            .bind(input.complete)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(todo)
    }

    async fn delete_owned(&self, id: i32, owner_id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<Todo>, AppError> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos ORDER BY id");
        let todos = sqlx::query_as::<_, Todo>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(todos)
    }

    async fn delete_any(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
