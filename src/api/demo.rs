//! In-process auth collaborator with a single hard-coded account.
//! Useful without a running API server.

use async_trait::async_trait;
use log::info;

use super::backend::{AuthBackend, AuthError};
use super::types::SignupRequest;
use crate::core::auth::{AuthGrant, LoginCredentials, User};

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "demo123";

pub fn demo_user() -> User {
    User {
        id: "1".to_string(),
        email: DEMO_EMAIL.to_string(),
        name: "Demo User".to_string(),
    }
}

pub struct DemoAuth;

#[async_trait]
impl AuthBackend for DemoAuth {
    fn name(&self) -> &str {
        "demo"
    }

    async fn sign_in(&self, credentials: &LoginCredentials) -> Result<AuthGrant, AuthError> {
        if credentials.email == DEMO_EMAIL && credentials.password == DEMO_PASSWORD {
            Ok(AuthGrant {
                user: demo_user(),
                token: "demo-token".to_string(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn sign_up(&self, request: &SignupRequest) -> Result<(), AuthError> {
        info!("Demo backend accepted signup for {}", request.email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: &str, password: &str) -> LoginCredentials {
        LoginCredentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_demo_pair_is_accepted() {
        let grant = tokio_test::block_on(DemoAuth.sign_in(&creds(DEMO_EMAIL, DEMO_PASSWORD))).unwrap();
        assert_eq!(grant.user.name, "Demo User");
        assert!(!grant.token.is_empty());
    }

    #[test]
    fn test_other_pairs_are_refused() {
        for (email, password) in [
            (DEMO_EMAIL, "wrong1"),
            ("someone@example.com", DEMO_PASSWORD),
            ("DEMO@example.com", DEMO_PASSWORD),
        ] {
            let result = tokio_test::block_on(DemoAuth.sign_in(&creds(email, password)));
            assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
        }
    }
}
