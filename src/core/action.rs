//! # Actions
//!
//! Everything that can happen in Taskdeck becomes an `Action`.
//! User submits the login form? That's `Action::SubmitLogin(credentials)`.
//! The auth API answers? That's `Action::LoginSucceeded(grant)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` describing any I/O the caller must do.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::api::backend::SIGNUP_FAILED_MESSAGE;
use crate::api::{AuthError, SignupRequest};
use crate::core::auth::{AuthGrant, LoginCredentials, Screen, guard};
use crate::core::filter::StatusFilter;
use crate::core::state::App;
use crate::core::todo::{TodoDraft, TodoStatus};
use crate::core::validation::{SignupForm, validate_login, validate_signup, validate_todo};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(Screen),
    SubmitLogin(LoginCredentials),
    LoginSucceeded(AuthGrant),
    LoginFailed(AuthError),
    SubmitSignup(SignupForm),
    SignupSucceeded,
    SignupFailed(AuthError),
    Logout,
    AddTodo(TodoDraft),
    EditTodo { id: String, draft: TodoDraft },
    DeleteTodo(String),
    SetStatus { id: String, status: TodoStatus },
    CycleStatus(String),
    /// Store indices, not view indices.
    Reorder { from: usize, to: usize },
    SetSearch(String),
    SetStatusFilter(StatusFilter),
    CycleStatusFilter,
    Quit,
}

/// Work the caller must perform after `update()` returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    SpawnSignIn(LoginCredentials),
    SpawnSignUp(SignupRequest),
    /// The add/edit form was accepted and can be dismissed.
    CloseTodoForm,
}

fn navigate(app: &mut App, requested: Screen) {
    let screen = guard(requested, &app.session);
    if screen != requested {
        debug!("Redirecting {:?} -> {:?}", requested, screen);
    }
    app.screen = screen;
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(screen) => {
            app.login_error = None;
            app.signup_error = None;
            navigate(app, screen);
            Effect::None
        }

        Action::SubmitLogin(credentials) => {
            if app.is_submitting || app.session.is_authenticated() {
                return Effect::None;
            }
            app.login_error = None;
            match validate_login(&credentials) {
                Ok(credentials) => {
                    app.login_errors.clear();
                    app.is_submitting = true;
                    app.status_message = "Signing in...".to_string();
                    Effect::SpawnSignIn(credentials)
                }
                Err(errors) => {
                    app.login_errors = errors;
                    Effect::None
                }
            }
        }

        Action::LoginSucceeded(grant) => {
            app.is_submitting = false;
            app.login_error = None;
            app.status_message = format!("Signed in as {}", grant.user.name);
            app.session.establish(grant);
            navigate(app, Screen::Todos);
            Effect::None
        }

        Action::LoginFailed(error) => {
            warn!("Login failed: {}", error);
            app.is_submitting = false;
            app.login_error = Some(error.login_message().to_string());
            app.status_message.clear();
            Effect::None
        }

        Action::SubmitSignup(form) => {
            if app.is_submitting || app.session.is_authenticated() {
                return Effect::None;
            }
            app.signup_error = None;
            match validate_signup(&form) {
                Ok(request) => {
                    app.signup_errors.clear();
                    app.is_submitting = true;
                    app.status_message = "Creating account...".to_string();
                    Effect::SpawnSignUp(request)
                }
                Err(errors) => {
                    app.signup_errors = errors;
                    Effect::None
                }
            }
        }

        Action::SignupSucceeded => {
            app.is_submitting = false;
            app.signup_error = None;
            app.status_message = "Account created. Please sign in.".to_string();
            navigate(app, Screen::Login);
            Effect::None
        }

        Action::SignupFailed(error) => {
            warn!("Signup failed: {}", error);
            app.is_submitting = false;
            app.signup_error = Some(SIGNUP_FAILED_MESSAGE.to_string());
            app.status_message.clear();
            Effect::None
        }

        Action::Logout => {
            app.session.logout();
            app.search.clear();
            app.status_filter = StatusFilter::All;
            app.todo_errors.clear();
            app.status_message = "Signed out".to_string();
            navigate(app, Screen::Login);
            Effect::None
        }

        Action::Quit => Effect::Quit,

        // Everything below needs a signed-in user.
        _ if !app.session.is_authenticated() => {
            debug!("Ignoring {:?} while anonymous", action);
            Effect::None
        }

        Action::AddTodo(draft) => match validate_todo(&draft) {
            Ok(draft) => {
                app.todo_errors.clear();
                let title = draft.title.clone();
                app.store.add(draft);
                app.status_message = format!("Added \"{}\"", title);
                Effect::CloseTodoForm
            }
            Err(errors) => {
                app.todo_errors = errors;
                Effect::None
            }
        },

        Action::EditTodo { id, draft } => match validate_todo(&draft) {
            Ok(draft) => {
                app.todo_errors.clear();
                if app.store.replace(&id, draft) {
                    app.status_message = "Todo updated".to_string();
                }
                Effect::CloseTodoForm
            }
            Err(errors) => {
                app.todo_errors = errors;
                Effect::None
            }
        },

        Action::DeleteTodo(id) => {
            if let Some(removed) = app.store.remove(&id) {
                info!("Deleted todo {}", removed.id);
                app.status_message = format!("Deleted \"{}\"", removed.title);
            }
            Effect::None
        }

        Action::SetStatus { id, status } => {
            if app.store.set_status(&id, status) {
                app.status_message = format!("Marked {}", status.label());
            }
            Effect::None
        }

        Action::CycleStatus(id) => {
            if let Some(status) = app.store.get(&id).map(|t| t.status.next()) {
                app.store.set_status(&id, status);
                app.status_message = format!("Marked {}", status.label());
            }
            Effect::None
        }

        Action::Reorder { from, to } => {
            if let Err(e) = app.store.reorder(from, to) {
                warn!("Reorder rejected: {}", e);
            }
            Effect::None
        }

        Action::SetSearch(text) => {
            app.search = text;
            Effect::None
        }

        Action::SetStatusFilter(status_filter) => {
            app.status_filter = status_filter;
            Effect::None
        }

        Action::CycleStatusFilter => {
            app.status_filter = app.status_filter.next();
            app.status_message = format!("Filter: {}", app.status_filter.label());
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::demo::demo_user;
    use crate::core::todo::demo_todos;
    use crate::core::store::TodoStore;
    use crate::test_support::{draft, signed_in_app, test_app};

    fn login_creds() -> LoginCredentials {
        LoginCredentials {
            email: "demo@example.com".to_string(),
            password: "demo123".to_string(),
        }
    }

    fn grant() -> AuthGrant {
        AuthGrant {
            user: demo_user(),
            token: "tok".to_string(),
        }
    }

    #[test]
    fn test_navigate_to_todos_while_anonymous_redirects() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Screen::Todos));
        assert_eq!(app.screen, Screen::Login);
        update(&mut app, Action::Navigate(Screen::Signup));
        assert_eq!(app.screen, Screen::Signup);
    }

    #[test]
    fn test_submit_login_spawns_request() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SubmitLogin(login_creds()));
        assert_eq!(effect, Effect::SpawnSignIn(login_creds()));
        assert!(app.is_submitting);
    }

    #[test]
    fn test_submit_login_ignored_while_in_flight() {
        let mut app = test_app();
        update(&mut app, Action::SubmitLogin(login_creds()));
        let effect = update(&mut app, Action::SubmitLogin(login_creds()));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn test_invalid_login_form_sets_field_errors() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SubmitLogin(LoginCredentials::default()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.login_errors.len(), 2);
        assert!(!app.is_submitting);
    }

    #[test]
    fn test_login_succeeded_authenticates_and_shows_todos() {
        let mut app = test_app();
        update(&mut app, Action::SubmitLogin(login_creds()));
        update(&mut app, Action::LoginSucceeded(grant()));
        assert!(app.session.is_authenticated());
        assert_eq!(app.session.user().unwrap().name, "Demo User");
        assert_eq!(app.screen, Screen::Todos);
        assert!(!app.is_submitting);
    }

    #[test]
    fn test_login_failed_keeps_anonymous_with_message() {
        let mut app = test_app();
        update(&mut app, Action::SubmitLogin(login_creds()));
        update(&mut app, Action::LoginFailed(AuthError::InvalidCredentials));
        assert!(!app.session.is_authenticated());
        assert_eq!(app.screen, Screen::Login);
        assert_eq!(app.login_error.as_deref(), Some("Invalid email or password"));

        update(
            &mut app,
            Action::LoginFailed(AuthError::Rejected {
                status: 500,
                message: "boom".to_string(),
            }),
        );
        assert_eq!(app.login_error.as_deref(), Some("Login failed"));
    }

    #[test]
    fn test_signup_flow_returns_to_login() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Screen::Signup));
        update(&mut app, Action::SignupSucceeded);
        assert_eq!(app.screen, Screen::Login);
        assert!(app.status_message.contains("Account created"));
    }

    #[test]
    fn test_signup_failure_sets_root_error() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Screen::Signup));
        update(&mut app, Action::SignupFailed(AuthError::Network("refused".to_string())));
        assert_eq!(app.screen, Screen::Signup);
        assert_eq!(app.signup_error.as_deref(), Some("Signup failed. Please try again."));
    }

    #[test]
    fn test_invalid_signup_does_not_spawn() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SubmitSignup(SignupForm::default()));
        assert_eq!(effect, Effect::None);
        assert!(!app.signup_errors.is_empty());
    }

    #[test]
    fn test_logout_clears_session_and_view() {
        let mut app = signed_in_app();
        update(&mut app, Action::SetSearch("x".to_string()));
        update(&mut app, Action::CycleStatusFilter);
        update(&mut app, Action::Logout);
        assert!(app.session.user().is_none());
        assert!(app.session.token().is_none());
        assert_eq!(app.screen, Screen::Login);
        assert!(app.search.is_empty());
        assert_eq!(app.status_filter, StatusFilter::All);
    }

    #[test]
    fn test_todo_actions_ignored_while_anonymous() {
        let mut app = test_app();
        let effect = update(&mut app, Action::AddTodo(draft("Nope")));
        assert_eq!(effect, Effect::None);
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_add_todo_prepends_and_closes_form() {
        let mut app = signed_in_app();
        app.store = TodoStore::with_todos(demo_todos());
        let effect = update(&mut app, Action::AddTodo(draft("Fresh")));
        assert_eq!(effect, Effect::CloseTodoForm);
        assert_eq!(app.store.todos()[0].title, "Fresh");
        assert_eq!(app.store.len(), 3);
    }

    #[test]
    fn test_add_invalid_todo_keeps_form_open() {
        let mut app = signed_in_app();
        let effect = update(&mut app, Action::AddTodo(TodoDraft::default()));
        assert_eq!(effect, Effect::None);
        assert!(!app.todo_errors.is_empty());
    }

    #[test]
    fn test_edit_and_status_and_delete() {
        let mut app = signed_in_app();
        app.store = TodoStore::with_todos(demo_todos());

        let mut edited = draft("Proposal v2");
        edited.status = TodoStatus::Done;
        update(&mut app, Action::EditTodo { id: "1".to_string(), draft: edited });
        assert_eq!(app.store.get("1").unwrap().title, "Proposal v2");
        assert_eq!(app.store.position("1"), Some(0));

        update(
            &mut app,
            Action::SetStatus { id: "2".to_string(), status: TodoStatus::Done },
        );
        assert_eq!(app.store.get("2").unwrap().status, TodoStatus::Done);

        update(&mut app, Action::CycleStatus("2".to_string()));
        assert_eq!(app.store.get("2").unwrap().status, TodoStatus::Todo);

        update(&mut app, Action::DeleteTodo("1".to_string()));
        assert!(app.store.get("1").is_none());
        update(&mut app, Action::DeleteTodo("missing".to_string()));
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_reorder_out_of_range_leaves_store() {
        let mut app = signed_in_app();
        app.store = TodoStore::with_todos(demo_todos());
        update(&mut app, Action::Reorder { from: 0, to: 1 });
        assert_eq!(app.store.todos()[0].id, "2");
        let before = app.store.clone();
        update(&mut app, Action::Reorder { from: 0, to: 9 });
        assert_eq!(app.store, before);
    }

    #[test]
    fn test_search_and_filter_drive_visible_view() {
        let mut app = signed_in_app();
        app.store = TodoStore::with_todos(demo_todos());
        update(&mut app, Action::SetSearch("REVIEW".to_string()));
        assert_eq!(app.visible_todos().len(), 1);
        update(&mut app, Action::SetSearch(String::new()));
        update(
            &mut app,
            Action::SetStatusFilter(StatusFilter::Only(TodoStatus::Todo)),
        );
        let visible = app.visible_todos();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
