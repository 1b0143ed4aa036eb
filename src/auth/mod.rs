pub mod extractors;
pub mod identity;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::User;
use crate::store::UserStore;

// Re-export necessary items
pub use extractors::CurrentUser;
pub use identity::{Identity, IdentityProvider};
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenService};

/// Form body of `POST /auth/token`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Response structure after a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The JWT for bearer authentication.
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Verifies a username/password pair against the credential store.
///
/// Unknown usernames and wrong passwords produce the same error so callers
/// cannot probe which accounts exist.
pub async fn authenticate(
    users: &dyn UserStore,
    username: &str,
    password: &str,
) -> Result<User, AppError> {
    let rejected = || AppError::Unauthorized("Could not validate user.".into());

    let Some(user) = users.find_by_username(username).await? else {
        log::warn!("login failed: unknown username");
        return Err(rejected());
    };

    if verify_password(password, &user.hashed_password)? {
        log::info!("user {} logged in", user.id);
        Ok(user)
    } else {
        log::warn!("login failed for user {}: wrong password", user.id);
        Err(rejected())
    }
}
