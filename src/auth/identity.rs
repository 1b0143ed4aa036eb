use serde::{Deserialize, Serialize};

use super::token::TokenService;
use crate::error::AppError;
use crate::models::Role;

/// Who is making the request, as reconstructed from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

impl Identity {
    /// Fails with `Forbidden` unless the caller may manage every user's todos.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.role.can_manage_all_todos() {
            Ok(())
        } else {
            log::warn!("user {} denied admin access", self.id);
            Err(AppError::Forbidden("Admin privileges required".into()))
        }
    }
}

/// Turns a raw bearer token into an [`Identity`].
///
/// Injected through `AppState` so tests can replace token decoding entirely.
pub trait IdentityProvider: Send + Sync + 'static {
    fn identify(&self, token: &str) -> Result<Identity, AppError>;
}

impl IdentityProvider for TokenService {
    fn identify(&self, token: &str) -> Result<Identity, AppError> {
        let claims = self.verify(token)?;
        Ok(Identity {
            id: claims.id,
            username: claims.sub,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use chrono::Duration;

    #[test]
    fn test_token_service_identifies_issued_user() {
        let tokens = TokenService::new("identity_secret", Duration::minutes(5));
        let user = User {
            id: 42,
            username: "alice".into(),
            email: "alice@example.com".into(),
            first_name: "Alice".into(),
            last_name: "Liddell".into(),
            hashed_password: String::new(),
            role: Role::User,
            phone_number: String::new(),
        };
        let token = tokens.issue(&user).unwrap();

        let identity = tokens.identify(&token).unwrap();
        assert_eq!(
            identity,
            Identity {
                id: 42,
                username: "alice".into(),
                role: Role::User,
            }
        );
    }

    #[test]
    fn test_require_admin() {
        let admin = Identity {
            id: 1,
            username: "root".into(),
            role: Role::Admin,
        };
        assert!(admin.require_admin().is_ok());

        let user = Identity {
            role: Role::User,
            ..admin
        };
        assert!(matches!(user.require_admin(), Err(AppError::Forbidden(_))));
    }
}
