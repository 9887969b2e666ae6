//! # Application State
//!
//! Core business state for Taskdeck. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn AuthBackend>   // remote API or demo account
//! ├── session: Session                // Anonymous | Authenticated
//! ├── screen: Screen                  // always guard()-ed against session
//! ├── store: TodoStore                // ordered todo collection
//! ├── search: String                  // list search text
//! ├── status_filter: StatusFilter     // All | Only(status)
//! ├── status_message: String          // header text
//! ├── login_errors / signup_errors / todo_errors: Vec<FieldError>
//! ├── login_error / signup_error: Option<String>   // root-level form errors
//! └── is_submitting: bool             // auth request in flight
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::AuthBackend;
use crate::core::auth::{Screen, Session, guard};
use crate::core::config::ResolvedConfig;
use crate::core::filter::{StatusFilter, filter};
use crate::core::store::TodoStore;
use crate::core::todo::{Todo, demo_todos};
use crate::core::validation::FieldError;

pub struct App {
    pub backend: Arc<dyn AuthBackend>,
    pub session: Session,
    pub screen: Screen,
    pub store: TodoStore,
    pub search: String,
    pub status_filter: StatusFilter,
    pub status_message: String,
    pub login_errors: Vec<FieldError>,
    pub login_error: Option<String>,
    pub signup_errors: Vec<FieldError>,
    pub signup_error: Option<String>,
    pub todo_errors: Vec<FieldError>,
    pub is_submitting: bool,
}

impl App {
    pub fn new(backend: Arc<dyn AuthBackend>) -> Self {
        let session = Session::new();
        Self {
            backend,
            screen: guard(Screen::Todos, &session),
            session,
            store: TodoStore::new(),
            search: String::new(),
            status_filter: StatusFilter::All,
            status_message: String::from("Welcome to Taskdeck!"),
            login_errors: Vec::new(),
            login_error: None,
            signup_errors: Vec::new(),
            signup_error: None,
            todo_errors: Vec::new(),
            is_submitting: false,
        }
    }

    pub fn from_config(backend: Arc<dyn AuthBackend>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(backend);
        if config.seed_demo_todos {
            app.store = TodoStore::with_todos(demo_todos());
        }
        app
    }

    /// The list as the user sees it. Recomputed on every call.
    pub fn visible_todos(&self) -> Vec<Todo> {
        filter(self.store.todos(), &self.search, self.status_filter)
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::auth::Screen;
    use crate::core::config::ResolvedConfig;
    use crate::test_support::{StubAuth, test_app};
    use std::sync::Arc;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Taskdeck!");
        assert_eq!(app.screen, Screen::Login);
        assert!(!app.session.is_authenticated());
        assert!(!app.is_submitting);
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_from_config_seeds_demo_todos() {
        let config = ResolvedConfig {
            backend: crate::AuthBackendKind::Demo,
            api_base_url: "http://unused".to_string(),
            seed_demo_todos: true,
            log_level: log::LevelFilter::Off,
        };
        let app = super::App::from_config(Arc::new(StubAuth::accepting()), &config);
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.visible_todos().len(), 2);
    }
}
