use std::fmt;

use async_trait::async_trait;

use super::types::SignupRequest;
use crate::core::auth::{AuthGrant, LoginCredentials};

/// Shown for credential rejections.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
/// Shown for every other sign-in failure.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
/// Shown for every sign-up failure.
pub const SIGNUP_FAILED_MESSAGE: &str = "Signup failed. Please try again.";

/// Errors that can occur while talking to an auth collaborator.
/// None of them are retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The credential pair was checked and refused.
    InvalidCredentials,
    /// The API answered with a non-2xx status.
    Rejected { status: u16, message: String },
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The API answered 2xx but the body was not what we expect.
    Parse(String),
}

impl AuthError {
    /// Single root-level message for the login form.
    pub fn login_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE,
            _ => LOGIN_FAILED_MESSAGE,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "invalid credentials"),
            AuthError::Rejected { status, message } => {
                write!(f, "auth API error (HTTP {status}): {message}")
            }
            AuthError::Network(msg) => write!(f, "network error: {msg}"),
            AuthError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}

#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Short name shown in the header and the log.
    fn name(&self) -> &str;

    /// Exchanges credentials for a user and token.
    async fn sign_in(&self, credentials: &LoginCredentials) -> Result<AuthGrant, AuthError>;

    /// Registers a new account. The response body is not used.
    async fn sign_up(&self, request: &SignupRequest) -> Result<(), AuthError>;
}
