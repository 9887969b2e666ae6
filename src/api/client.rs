//! HTTP auth client for the remote API.
//!
//! ```text
//! POST {base_url}/Auth/signin   {username, password, email}   → 2xx {token}
//! POST {base_url}/Auth/signup   {username, email, ..., gender} → 2xx (body ignored)
//! ```
//!
//! Any non-2xx status becomes `AuthError::Rejected`. There is no timeout and
//! no retry; a request in flight runs to completion.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::backend::{AuthBackend, AuthError};
use super::types::{SigninRequest, SigninResponse, SignupRequest};
use crate::core::auth::{AuthGrant, LoginCredentials, User};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5215/api";

pub struct RemoteAuth {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteAuth {
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, AuthError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        debug!("{} -> {}", url, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Auth API error: {} - {}", status, message);
            return Err(AuthError::Rejected { status, message });
        }

        Ok(response)
    }
}

/// The API only returns a token, so the identity is derived from the email.
fn user_from_email(email: &str) -> User {
    let name = email.split('@').next().unwrap_or(email).to_string();
    User {
        id: email.to_string(),
        email: email.to_string(),
        name,
    }
}

#[async_trait]
impl AuthBackend for RemoteAuth {
    fn name(&self) -> &str {
        "remote"
    }

    async fn sign_in(&self, credentials: &LoginCredentials) -> Result<AuthGrant, AuthError> {
        let body = SigninRequest {
            username: credentials.email.clone(),
            password: credentials.password.clone(),
            email: credentials.email.clone(),
        };

        let response = self.post("/Auth/signin", &body).await?;
        let signin: SigninResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Parse(e.to_string()))?;

        info!("Signed in as {}", credentials.email);
        Ok(AuthGrant {
            user: user_from_email(&credentials.email),
            token: signin.token,
        })
    }

    async fn sign_up(&self, request: &SignupRequest) -> Result<(), AuthError> {
        self.post("/Auth/signup", request).await?;
        info!("Signed up {}", request.email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let auth = RemoteAuth::new(None);
        assert_eq!(auth.base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let auth = RemoteAuth::new(Some("http://example.test/api/".to_string()));
        assert_eq!(auth.base_url(), "http://example.test/api");
    }

    #[test]
    fn test_user_from_email() {
        let user = user_from_email("jane.doe@example.com");
        assert_eq!(user.id, "jane.doe@example.com");
        assert_eq!(user.email, "jane.doe@example.com");
        assert_eq!(user.name, "jane.doe");
    }
}
