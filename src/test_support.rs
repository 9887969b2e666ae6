//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::api::{AuthBackend, AuthError, SignupRequest};
use crate::core::action::{Action, update};
use crate::core::auth::{AuthGrant, LoginCredentials};
use crate::core::state::App;
use crate::core::todo::{Todo, TodoDraft, TodoStatus};

/// An auth backend with a fixed answer and no network.
pub struct StubAuth {
    result: Result<AuthGrant, AuthError>,
}

impl StubAuth {
    pub fn accepting() -> Self {
        Self {
            result: Ok(AuthGrant {
                user: crate::api::demo::demo_user(),
                token: "stub-token".to_string(),
            }),
        }
    }
}

#[async_trait]
impl AuthBackend for StubAuth {
    fn name(&self) -> &str {
        "stub"
    }

    async fn sign_in(&self, _credentials: &LoginCredentials) -> Result<AuthGrant, AuthError> {
        self.result.clone()
    }

    async fn sign_up(&self, _request: &SignupRequest) -> Result<(), AuthError> {
        self.result.clone().map(|_| ())
    }
}

/// Creates a test App with a StubAuth, signed out.
pub fn test_app() -> App {
    App::new(Arc::new(StubAuth::accepting()))
}

/// Creates a test App that already went through a successful login.
pub fn signed_in_app() -> App {
    let mut app = test_app();
    let grant = AuthGrant {
        user: crate::api::demo::demo_user(),
        token: "stub-token".to_string(),
    };
    update(&mut app, Action::LoginSucceeded(grant));
    app
}

pub fn todo(id: &str, title: &str, description: &str, status: TodoStatus) -> Todo {
    Todo {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        deadline: "2024-03-20".to_string(),
        status,
    }
}

pub fn draft(title: &str) -> TodoDraft {
    TodoDraft {
        title: title.to_string(),
        description: String::new(),
        deadline: "2024-03-20".to_string(),
        status: TodoStatus::Todo,
    }
}
