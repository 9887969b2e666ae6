use crate::core::auth::Screen;
use crate::core::filter::StatusFilter;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{FiltersBar, LoginForm, SignupForm, TitleBar, TodoForm, TodoList};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    TitleBar::new(
        app.session.user().map(|u| u.name.clone()),
        app.backend_name().to_string(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    match app.screen {
        Screen::Login => LoginForm {
            state: &tui.login,
            errors: &app.login_errors,
            root_error: app.login_error.as_deref(),
            is_submitting: app.is_submitting,
        }
        .render(frame, main_area),
        Screen::Signup => SignupForm {
            state: &tui.signup,
            errors: &app.signup_errors,
            root_error: app.signup_error.as_deref(),
            is_submitting: app.is_submitting,
        }
        .render(frame, main_area),
        Screen::Todos => draw_todos(frame, main_area, app, tui),
    }

    let help = Line::styled(help_text(app, tui), Style::default().fg(Color::DarkGray));
    frame.render_widget(help, help_area);
}

fn draw_todos(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [filters_area, list_area] = Layout::vertical([Length(3), Min(0)]).areas(area);

    FiltersBar {
        search: &tui.search,
        status_filter: app.status_filter,
        focused: tui.focus == Focus::Search && tui.todo_form.is_none(),
    }
    .render(frame, filters_area);

    let visible = app.visible_todos();
    TodoList {
        state: &mut tui.list,
        todos: &visible,
        filtered: !app.search.is_empty() || app.status_filter != StatusFilter::All,
        focused: tui.focus == Focus::List && tui.todo_form.is_none(),
    }
    .render(frame, list_area);

    if let Some(form) = &tui.todo_form {
        TodoForm {
            state: form,
            errors: &app.todo_errors,
        }
        .render(frame, area);
    }
}

fn help_text(app: &App, tui: &TuiState) -> &'static str {
    match app.screen {
        Screen::Login => " Tab Next field  Enter Sign in  Ctrl+N Sign up  Ctrl+C Quit",
        Screen::Signup => " Tab Next field  ←/→ Choose  Enter Sign up  Esc Back  Ctrl+C Quit",
        Screen::Todos if tui.todo_form.is_some() => " Tab Next field  Enter Save  Esc Cancel",
        Screen::Todos if tui.focus == Focus::Search => " Type to search  Enter/Esc Back to list",
        Screen::Todos => " / Search  f Filter  1-3 Set status  Ctrl+L Sign out  q Quit",
    }
}
