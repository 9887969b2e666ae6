pub mod backend;
pub mod client;
pub mod demo;
pub mod types;

pub use backend::{AuthBackend, AuthError};
pub use client::RemoteAuth;
pub use demo::DemoAuth;
pub use types::{SigninRequest, SigninResponse, SignupRequest};
