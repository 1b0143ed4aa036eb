use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::{TodoStore, UserStore};
use crate::error::AppError;
use crate::models::{NewUser, Todo, TodoInput, User};

/// Process-local store. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<Table<User>>,
    todos: Mutex<Table<Todo>>,
}

struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, AppError> {
    mutex
        .lock()
        .map_err(|_| AppError::InternalServerError("in-memory store lock poisoned".into()))
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User, AppError> {
        let mut users = lock(&self.users)?;
        let taken = users
            .rows
            .values()
            .any(|u| u.username == user.username || u.email == user.email);
        if taken {
            return Err(AppError::BadRequest(
                "Username or email already registered".into(),
            ));
        }

        let id = users.next_id();
        let stored = User {
            id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            hashed_password: user.hashed_password,
            role: user.role,
            phone_number: user.phone_number,
        };
        users.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = lock(&self.users)?;
        Ok(users.rows.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(lock(&self.users)?.rows.get(&id).cloned())
    }

    async fn update_password(&self, id: i32, hashed_password: &str) -> Result<bool, AppError> {
        let mut users = lock(&self.users)?;
        Ok(match users.rows.get_mut(&id) {
            Some(user) => {
                user.hashed_password = hashed_password.to_string();
                true
            }
            None => false,
        })
    }

    async fn update_phone_number(&self, id: i32, phone_number: &str) -> Result<bool, AppError> {
        let mut users = lock(&self.users)?;
        Ok(match users.rows.get_mut(&id) {
            Some(user) => {
                user.phone_number = phone_number.to_string();
                true
            }
            None => false,
        })
    }
}

#[async_trait]
impl TodoStore for InMemoryStore {
    async fn list_owned(&self, owner_id: i32) -> Result<Vec<Todo>, AppError> {
        let todos = lock(&self.todos)?;
        Ok(todos
            .rows
            .values()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn find_owned(&self, id: i32, owner_id: i32) -> Result<Option<Todo>, AppError> {
        let todos = lock(&self.todos)?;
        Ok(todos
            .rows
            .get(&id)
            .filter(|t| t.owner_id == owner_id)
            .cloned())
    }

    async fn create(&self, input: TodoInput, owner_id: i32) -> Result<Todo, AppError> {
        let mut todos = lock(&self.todos)?;
        let id = todos.next_id();
        let todo = Todo::new(id, input, owner_id);
        todos.rows.insert(id, todo.clone());
        Ok(todo)
    }

    async fn update_owned(
        &self,
        id: i32,
        owner_id: i32,
        input: TodoInput,
    ) -> Result<Option<Todo>, AppError> {
        let mut todos = lock(&self.todos)?;
        Ok(match todos.rows.get_mut(&id) {
            Some(todo) if todo.owner_id == owner_id => {
                todo.apply(input);
                Some(todo.clone())
            }
            _ => None,
        })
    }

    async fn delete_owned(&self, id: i32, owner_id: i32) -> Result<bool, AppError> {
        let mut todos = lock(&self.todos)?;
        let owned = todos
            .rows
            .get(&id)
            .map_or(false, |t| t.owner_id == owner_id);
        if owned {
            todos.rows.remove(&id);
        }
        Ok(owned)
    }

    async fn list_all(&self) -> Result<Vec<Todo>, AppError> {
        Ok(lock(&self.todos)?.rows.values().cloned().collect())
    }

    async fn delete_any(&self, id: i32) -> Result<bool, AppError> {
        Ok(lock(&self.todos)?.rows.remove(&id).is_some())
    }
}
