use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use validator::Validate;

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Role attached to every account.
/// Corresponds to the `user_role` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular account; sees only its own todos.
    #[default]
    User,
    /// Administrator; may list and delete every todo.
    Admin,
}

impl Role {
    pub fn can_manage_all_todos(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// A stored account. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing, default)]
    pub hashed_password: String,
    pub role: Role,
    pub phone_number: String,
}

/// Signup payload for `POST /auth/`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        length(min = 3, max = 32),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(max = 100))]
    pub first_name: String,
    #[validate(length(max = 100))]
    pub last_name: String,
    #[validate(length(min = 6))]
    pub password: String,
    /// Self-selected at signup; defaults to `user`.
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    #[validate(length(max = 32))]
    pub phone_number: String,
}

/// A user ready to be persisted: same as the signup payload, but hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub hashed_password: String,
    pub role: Role,
    pub phone_number: String,
}

impl NewUser {
    pub fn from_request(request: CreateUserRequest, hashed_password: String) -> Self {
        Self {
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            hashed_password,
            role: request.role,
            phone_number: request.phone_number,
        }
    }
}

/// Body of `PUT /user/change_password`.
#[derive(Debug, Deserialize, Validate)]
pub struct PasswordChange {
    pub password: String,
    #[validate(length(min = 6))]
    pub new_password: String,
}

/// Path segment of `PUT /user/phone_number/{phone_number}`.
#[derive(Debug, Deserialize, Validate)]
pub struct PhoneNumberUpdate {
    #[validate(length(max = 32))]
    pub phone_number: String,
}
