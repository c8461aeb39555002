//! Auth screen reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. This is the single source of truth for
//! how events modify state.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use inschat_core::client::{AuthError, Credentials};

use crate::common::{TaskId, TaskKind};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, FormState, Mode, Screen, SubmissionOutcome};

/// Shown after a successful login, while the navigation timer runs.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful — redirecting...";
/// Shown after a successful registration.
pub const REGISTER_SUCCESS_MESSAGE: &str = "Account created — please log in now.";
/// Delay between login success and navigation to the home screen.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1000);
/// Server-side destination of the post-login navigation.
pub const HOME_PATH: &str = "/home";

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, &term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::SubmitResult { id, mode, result } => handle_submit_result(app, id, mode, result),
        UiEvent::RedirectDue { id } => handle_redirect_due(app, id),
    }
}

fn handle_terminal_event(app: &mut AppState, event: &Event) -> Vec<UiEffect> {
    let Event::Key(key) = event else {
        return vec![];
    };
    if key.kind != KeyEventKind::Press {
        return vec![];
    }
    match app.screen {
        Screen::Auth => handle_auth_key(app, *key),
        Screen::Home { .. } => handle_home_key(app, *key),
    }
}

fn handle_auth_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => quit(app),
        KeyCode::Char('c') if ctrl => quit(app),
        KeyCode::Char('t') if ctrl => {
            // Switching modes keeps the typed credentials and the last
            // message, matching the original form.
            app.mode = app.mode.toggled();
            vec![]
        }
        KeyCode::Tab | KeyCode::Down | KeyCode::Up | KeyCode::BackTab => {
            app.form.focus = app.form.focus.next();
            vec![]
        }
        KeyCode::Enter => submit(app),
        KeyCode::Backspace => {
            app.form.focused_mut().pop();
            vec![]
        }
        KeyCode::Char(c) if !ctrl => {
            app.form.focused_mut().push(c);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_home_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => quit(app),
        KeyCode::Char('c') if ctrl => quit(app),
        KeyCode::Char('o') => {
            let url = format!(
                "{}{HOME_PATH}",
                app.config.server_url.trim_end_matches('/')
            );
            vec![UiEffect::OpenBrowser { url }]
        }
        _ => vec![],
    }
}

/// Starts a submit attempt for the current mode and form contents.
///
/// No required-field check and no in-flight guard: empty credentials go out
/// as-is, and a second Enter while a request is pending submits again,
/// matching the original form.
fn submit(app: &mut AppState) -> Vec<UiEffect> {
    app.outcome = SubmissionOutcome::None;
    let task = app.task_seq.next_id();
    vec![UiEffect::Submit {
        task,
        mode: app.mode,
        credentials: Credentials::new(app.form.username.clone(), app.form.password.clone()),
    }]
}

/// Applies a resolved submit attempt.
///
/// Results are applied in arrival order even when a newer submit is still in
/// flight; `finish_if_active` only clears the running indicator for the
/// matching task.
fn handle_submit_result(
    app: &mut AppState,
    id: TaskId,
    mode: Mode,
    result: Result<(), AuthError>,
) -> Vec<UiEffect> {
    app.tasks.submit.finish_if_active(id);

    match result {
        Ok(()) => match mode {
            Mode::Login => {
                app.outcome = SubmissionOutcome::Success(LOGIN_SUCCESS_MESSAGE.to_string());
                let task = app.task_seq.next_id();
                vec![UiEffect::ScheduleRedirect { task }]
            }
            Mode::Register => {
                // Credentials stay pre-filled for the follow-up login.
                app.outcome = SubmissionOutcome::Success(REGISTER_SUCCESS_MESSAGE.to_string());
                app.mode = Mode::Login;
                vec![]
            }
        },
        Err(err) => {
            app.outcome = SubmissionOutcome::Error(err.user_message());
            vec![]
        }
    }
}

/// Handles the elapsed navigation timer.
///
/// Navigation is best-effort: a stale timer (already cancelled or already
/// navigated) is ignored. Leaving the form discards its state.
fn handle_redirect_due(app: &mut AppState, id: TaskId) -> Vec<UiEffect> {
    if !app.tasks.redirect.finish_if_active(id) {
        return vec![];
    }
    if app.screen != Screen::Auth {
        return vec![];
    }

    let username = std::mem::take(&mut app.form.username);
    app.screen = Screen::Home { username };
    app.form = FormState::default();
    app.outcome = SubmissionOutcome::None;
    vec![]
}

/// Quits, cancelling the pending navigation timer so it never fires into a
/// torn-down UI.
fn quit(app: &mut AppState) -> Vec<UiEffect> {
    app.should_quit = true;
    let mut effects = Vec::new();
    if app.tasks.redirect.is_running() {
        effects.push(UiEffect::CancelTask {
            kind: TaskKind::Redirect,
            token: app.tasks.redirect.cancel.clone(),
        });
        app.tasks.redirect.clear();
    }
    effects
}
