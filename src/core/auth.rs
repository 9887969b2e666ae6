//! # Auth Session
//!
//! Two states, no partial ones:
//!
//! ```text
//!              login ok
//!  Anonymous ───────────▶ Authenticated { user, token }
//!      ▲                        │
//!      └────────── logout ──────┘
//! ```
//!
//! A failed login leaves the session Anonymous. There is no expiry and no
//! refresh; a session lasts until logout or process exit.
//!
//! The route guard lives here too: screens are gated by session state and a
//! request for the wrong screen is redirected, never refused.

use log::info;
use serde::{Deserialize, Serialize};

use crate::api::{AuthBackend, AuthError};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// What a successful sign-in hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGrant {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { user: User, token: String },
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated { user, .. } => Some(user),
            Session::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            Session::Anonymous => None,
        }
    }

    /// Signs in through `backend`. On failure the session is left untouched.
    pub async fn login(
        &mut self,
        backend: &dyn AuthBackend,
        credentials: &LoginCredentials,
    ) -> Result<User, AuthError> {
        let grant = backend.sign_in(credentials).await?;
        let user = grant.user.clone();
        self.establish(grant);
        Ok(user)
    }

    /// Applies a sign-in result obtained elsewhere (e.g. on a background task).
    pub fn establish(&mut self, grant: AuthGrant) {
        info!("Session authenticated for {}", grant.user.email);
        *self = Session::Authenticated {
            user: grant.user,
            token: grant.token,
        };
    }

    /// Always succeeds; user and token go together.
    pub fn logout(&mut self) {
        if let Some(user) = self.user() {
            info!("Logging out {}", user.email);
        }
        *self = Session::Anonymous;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Login,
    Signup,
    Todos,
}

impl Screen {
    /// Screens reachable only while Anonymous.
    pub fn is_public(&self) -> bool {
        matches!(self, Screen::Login | Screen::Signup)
    }
}

/// Returns the screen actually shown for `requested` given the session.
pub fn guard(requested: Screen, session: &Session) -> Screen {
    match (session.is_authenticated(), requested.is_public()) {
        (true, true) => Screen::Todos,
        (false, false) => Screen::Login,
        _ => requested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DemoAuth;
    use crate::api::demo::{DEMO_EMAIL, DEMO_PASSWORD};

    fn creds(email: &str, password: &str) -> LoginCredentials {
        LoginCredentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_demo_login_authenticates() {
        let mut session = Session::new();
        let user = session
            .login(&DemoAuth, &creds(DEMO_EMAIL, DEMO_PASSWORD))
            .await
            .unwrap();
        assert_eq!(user.name, "Demo User");
        assert!(session.is_authenticated());
        assert!(session.token().is_some());
    }

    #[tokio::test]
    async fn test_wrong_pair_stays_anonymous() {
        let mut session = Session::new();
        let err = session
            .login(&DemoAuth, &creds(DEMO_EMAIL, "nope123"))
            .await
            .unwrap_err();
        assert_eq!(err.login_message(), "Invalid email or password");
        assert_eq!(session, Session::Anonymous);
        assert!(session.user().is_none());
        assert!(session.token().is_none());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_session() {
        let mut session = Session::new();
        session
            .login(&DemoAuth, &creds(DEMO_EMAIL, DEMO_PASSWORD))
            .await
            .unwrap();
        let before = session.clone();
        assert!(session.login(&DemoAuth, &creds("x@y.io", "zzzzzz")).await.is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn test_logout_clears_user_and_token_together() {
        let mut session = Session::new();
        session.establish(AuthGrant {
            user: crate::api::demo::demo_user(),
            token: "t".to_string(),
        });
        session.logout();
        assert!(session.user().is_none());
        assert!(session.token().is_none());

        // logout while anonymous is fine too
        session.logout();
        assert_eq!(session, Session::Anonymous);
    }

    #[test]
    fn test_guard_redirects() {
        let anon = Session::Anonymous;
        assert_eq!(guard(Screen::Todos, &anon), Screen::Login);
        assert_eq!(guard(Screen::Login, &anon), Screen::Login);
        assert_eq!(guard(Screen::Signup, &anon), Screen::Signup);

        let authed = Session::Authenticated {
            user: crate::api::demo::demo_user(),
            token: "t".to_string(),
        };
        assert_eq!(guard(Screen::Login, &authed), Screen::Todos);
        assert_eq!(guard(Screen::Signup, &authed), Screen::Todos);
        assert_eq!(guard(Screen::Todos, &authed), Screen::Todos);
    }
}
