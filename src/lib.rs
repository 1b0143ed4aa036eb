#![doc = "The `todoapp` library crate."]
#![doc = ""]
#![doc = "Authentication (bcrypt credentials, JWT bearer tokens, identity extraction),"]
#![doc = "ownership-scoped todo storage, the admin gateway, user self-service routes and"]
#![doc = "error handling. The binary (`main.rs`) wires these into an actix-web server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

pub use crate::error::AppError;
pub use crate::state::AppState;
