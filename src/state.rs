use std::sync::Arc;

use crate::auth::{IdentityProvider, TokenService};
use crate::store::{TodoStore, UserStore};

/// Everything a handler needs, registered once as `web::Data<AppState>`.
///
/// Storage and identity extraction are trait objects so the binary can wire
/// Postgres and JWTs while tests wire an in-memory store or a fixed identity.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub todos: Arc<dyn TodoStore>,
    pub tokens: TokenService,
    pub identity: Arc<dyn IdentityProvider>,
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Identity extraction defaults to verifying tokens issued by `tokens`.
    pub fn new(users: Arc<dyn UserStore>, todos: Arc<dyn TodoStore>, tokens: TokenService) -> Self {
        Self {
            users,
            todos,
            identity: Arc::new(tokens.clone()),
            tokens,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_identity(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }
}
