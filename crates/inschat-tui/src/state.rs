//! Application state for the auth screen.
//!
//! All fields are owned by a single [`AppState`] instance and mutated only by
//! the reducer in `update.rs`. Nothing here performs I/O.

use inschat_core::config::Config;

use crate::common::{TaskSeq, Tasks};

/// Which form the screen is acting as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Login,
    Register,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Login => Mode::Register,
            Mode::Register => Mode::Login,
        }
    }

    /// Heading shown on the form card.
    pub fn heading(self) -> &'static str {
        match self {
            Mode::Login => "Log In",
            Mode::Register => "Sign Up",
        }
    }
}

/// The input currently receiving keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Username,
    Password,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Username => Field::Password,
            Field::Password => Field::Username,
        }
    }
}

/// The credentials being composed, plus which input has focus.
///
/// Fields are independent: editing one never clears the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub password: String,
    pub focus: Field,
}

impl FormState {
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
        }
    }
}

/// Result of the most recent submit attempt.
///
/// Reset to `None` at the start of every submit; set exactly once when the
/// attempt resolves. Field edits and mode toggles do not clear it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionOutcome {
    #[default]
    None,
    Error(String),
    Success(String),
}

/// Which screen the runtime is rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The login/registration form.
    Auth,
    /// Post-login landing screen.
    Home { username: String },
}

/// Combined application state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Current screen.
    pub screen: Screen,
    /// Login vs. registration.
    pub mode: Mode,
    /// Credentials being edited.
    pub form: FormState,
    /// Result of the last submit attempt.
    pub outcome: SubmissionOutcome,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Client configuration (server URL).
    pub config: Config,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Auth,
            mode: Mode::default(),
            form: FormState::default(),
            outcome: SubmissionOutcome::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            config,
            spinner_frame: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_login() {
        let state = AppState::new(Config::default());
        assert_eq!(state.mode, Mode::Login);
        assert_eq!(state.screen, Screen::Auth);
        assert_eq!(state.outcome, SubmissionOutcome::None);
    }

    #[test]
    fn test_mode_toggle_is_involutive() {
        assert_eq!(Mode::Login.toggled().toggled(), Mode::Login);
        assert_eq!(Mode::Register.toggled().toggled(), Mode::Register);
    }

    #[test]
    fn test_focus_cycles_between_fields() {
        assert_eq!(Field::Username.next(), Field::Password);
        assert_eq!(Field::Password.next(), Field::Username);
    }
}
