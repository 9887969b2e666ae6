//! Taskdeck library exports for testing

use clap::ValueEnum;

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which auth collaborator the session talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum AuthBackendKind {
    /// The HTTP auth API (`POST /Auth/signin`, `POST /Auth/signup`).
    #[default]
    Remote,
    /// In-process demo account, no network.
    Demo,
}

impl AuthBackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthBackendKind::Remote => "remote",
            AuthBackendKind::Demo => "demo",
        }
    }

    /// Parses a config/env value. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "remote" => Some(AuthBackendKind::Remote),
            "demo" | "mock" => Some(AuthBackendKind::Demo),
            _ => None,
        }
    }
}
