pub mod todo;
pub mod user;

pub use todo::{Todo, TodoInput};
pub use user::{CreateUserRequest, NewUser, PasswordChange, PhoneNumberUpdate, Role, User};
