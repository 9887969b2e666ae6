//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop only draws when something changed: a key, a resize, or
//! an action coming back from a background auth request. While a request
//! is in flight it polls faster so the result shows up promptly.
//!
//! ## Background Work
//!
//! Sign-in and sign-up run on `tokio::spawn`ed tasks. Each task sends exactly
//! one `Action` back through a std `mpsc` channel, which the loop drains
//! between frames. Nothing else touches `App` off the main thread.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::AuthBackendKind;
use crate::api::{AuthBackend, DemoAuth, RemoteAuth, SignupRequest};
use crate::core::action::{Action, Effect, update};
use crate::core::auth::{LoginCredentials, Screen};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    LoginEvent, LoginFormState, SearchEvent, SearchState, SignupEvent, SignupFormState,
    TodoFormEvent, TodoFormState, TodoListEvent, TodoListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which part of the todos screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub login: LoginFormState,
    pub signup: SignupFormState,
    pub list: TodoListState,
    pub search: SearchState,
    pub focus: Focus,
    // Add/edit overlay (None = hidden)
    pub todo_form: Option<TodoFormState>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            login: LoginFormState::new(),
            signup: SignupFormState::new(),
            list: TodoListState::new(),
            search: SearchState::default(),
            focus: Focus::List,
            todo_form: None,
        }
    }

    /// Drops everything tied to the signed-in user's view.
    fn reset_todos_view(&mut self) {
        self.list = TodoListState::new();
        self.search = SearchState::default();
        self.focus = Focus::List;
        self.todo_form = None;
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // REPORT_EVENT_TYPES lets us drop key releases; terminals without the
        // protocol ignore the request
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableBracketedPaste);
    }
}

/// Build the auth backend selected by the resolved config.
pub fn build_backend(config: &ResolvedConfig) -> Arc<dyn AuthBackend> {
    match config.backend {
        AuthBackendKind::Remote => Arc::new(RemoteAuth::new(Some(config.api_base_url.clone()))),
        AuthBackendKind::Demo => Arc::new(DemoAuth),
    }
}

/// Runs an action through `update` and carries out its effect.
/// Returns `true` when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let resets_login = matches!(action, Action::LoginSucceeded(_));
    let resets_signup = matches!(action, Action::SignupSucceeded);
    let logging_out = matches!(action, Action::Logout);

    let effect = update(app, action);

    if resets_login {
        tui.login = LoginFormState::new();
        tui.reset_todos_view();
    }
    if resets_signup {
        tui.signup = SignupFormState::new();
    }
    if logging_out {
        tui.login = LoginFormState::new();
        tui.reset_todos_view();
    }

    match effect {
        Effect::Quit => return true,
        Effect::SpawnSignIn(credentials) => spawn_sign_in(app.backend.clone(), credentials, tx.clone()),
        Effect::SpawnSignUp(request) => spawn_sign_up(app.backend.clone(), request, tx.clone()),
        Effect::CloseTodoForm => {
            if let Some(form) = tui.todo_form.take()
                && let Some(id) = form.editing_id
            {
                tui.list.sync(&app.visible_todos());
                tui.list.select_id(&id);
            }
        }
        Effect::None => {}
    }
    false
}

/// Routes one terminal event to whatever owns input on the current screen.
/// Returns `true` when the app should quit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent, tx: &mpsc::Sender<Action>) -> bool {
    match event {
        TuiEvent::Resize => return false,
        TuiEvent::ForceQuit => return dispatch(app, tui, Action::Quit, tx),
        TuiEvent::Logout if app.session.is_authenticated() => {
            return dispatch(app, tui, Action::Logout, tx);
        }
        _ => {}
    }

    let action = match app.screen {
        Screen::Login => match tui.login.handle_event(&event) {
            Some(LoginEvent::Submit(credentials)) => Action::SubmitLogin(credentials),
            Some(LoginEvent::GoToSignup) => Action::Navigate(Screen::Signup),
            None => return false,
        },
        Screen::Signup => match tui.signup.handle_event(&event) {
            Some(SignupEvent::Submit(form)) => Action::SubmitSignup(form),
            Some(SignupEvent::GoToLogin) => Action::Navigate(Screen::Login),
            None => return false,
        },
        Screen::Todos => match todos_action(app, tui, &event) {
            Some(action) => action,
            None => return false,
        },
    };

    let quit = dispatch(app, tui, action, tx);

    // Point the form at whatever the validator rejected
    match app.screen {
        Screen::Login => tui.login.form.focus_first_error(&app.login_errors),
        Screen::Signup => tui.signup.form.focus_first_error(&app.signup_errors),
        Screen::Todos => {
            if let Some(form) = tui.todo_form.as_mut() {
                form.form.focus_first_error(&app.todo_errors);
            }
        }
    }
    quit
}

fn todos_action(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    // The overlay captures all input while open
    if let Some(form) = tui.todo_form.as_mut() {
        return match form.handle_event(event)? {
            TodoFormEvent::Submit(draft) => Some(match form.editing_id.clone() {
                Some(id) => Action::EditTodo { id, draft },
                None => Action::AddTodo(draft),
            }),
            TodoFormEvent::Cancel => {
                tui.todo_form = None;
                app.todo_errors.clear();
                None
            }
        };
    }

    if tui.focus == Focus::Search {
        return match tui.search.handle_event(event)? {
            SearchEvent::Changed(text) => Some(Action::SetSearch(text)),
            SearchEvent::Done => {
                tui.focus = Focus::List;
                None
            }
        };
    }

    match tui.list.handle_event(event)? {
        TodoListEvent::Add => {
            app.todo_errors.clear();
            tui.todo_form = Some(TodoFormState::for_new());
            None
        }
        TodoListEvent::Edit(id) => {
            app.todo_errors.clear();
            tui.todo_form = app.store.get(&id).map(TodoFormState::for_edit);
            None
        }
        TodoListEvent::Delete(id) => Some(Action::DeleteTodo(id)),
        TodoListEvent::CycleStatus(id) => Some(Action::CycleStatus(id)),
        TodoListEvent::SetStatus { id, status } => Some(Action::SetStatus { id, status }),
        TodoListEvent::Move { id, neighbor } => {
            // The list works in visible positions; the store needs its own
            let from = app.store.position(&id)?;
            let to = app.store.position(&neighbor)?;
            Some(Action::Reorder { from, to })
        }
        TodoListEvent::FocusSearch => {
            tui.focus = Focus::Search;
            None
        }
        TodoListEvent::CycleFilter => Some(Action::CycleStatusFilter),
        TodoListEvent::Quit => Some(Action::Quit),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend = build_backend(&config);
    info!("Using {} auth backend", backend.name());
    let mut app = App::from_config(backend, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        tui.list.sync(&app.visible_todos());

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.is_submitting {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event, &tx) {
                should_quit = true;
                break;
            }
            tui.list.sync(&app.visible_todos());
        }

        if should_quit {
            break;
        }

        // Handle background task actions (auth results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, action, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_sign_in(backend: Arc<dyn AuthBackend>, credentials: LoginCredentials, tx: mpsc::Sender<Action>) {
    info!("Spawning sign-in request ({} backend)", backend.name());
    tokio::spawn(async move {
        let action = match backend.sign_in(&credentials).await {
            Ok(grant) => Action::LoginSucceeded(grant),
            Err(e) => {
                warn!("Sign-in failed: {}", e);
                Action::LoginFailed(e)
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send sign-in result: receiver dropped");
        }
    });
}

fn spawn_sign_up(backend: Arc<dyn AuthBackend>, request: SignupRequest, tx: mpsc::Sender<Action>) {
    info!("Spawning sign-up request ({} backend)", backend.name());
    tokio::spawn(async move {
        let action = match backend.sign_up(&request).await {
            Ok(()) => Action::SignupSucceeded,
            Err(e) => {
                warn!("Sign-up failed: {}", e);
                Action::SignupFailed(e)
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send sign-up result: receiver dropped");
        }
    });
}
