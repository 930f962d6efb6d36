//! Application state composition.
//!
//! ```text
//! AppState
//! ├── screen: Screen            (which view is routed in)
//! ├── form: LoginFormState      (fields, focus, debounce, published validity)
//! ├── session: SessionStore     (logged-in flag + durable slot)
//! └── config: Config            (debounce delay)
//! ```
//!
//! The form state lives outside `Screen` so logout can reset the fields
//! through the reducer instead of rebuilding them.

use gate_core::config::Config;
use gate_core::session::SessionStore;

use crate::login::LoginFormState;

/// Which top-level view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Logged out: the login form.
    Login,
    /// Logged in: the home view.
    Home,
}

/// Combined application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Routed view, derived from the session at startup.
    pub screen: Screen,
    /// Login form state (the debounced validation core).
    pub form: LoginFormState,
    /// Auth session and its durable slot.
    pub session: SessionStore,
    /// Application configuration.
    pub config: Config,
}

impl AppState {
    /// Creates the state, routing to home when a persisted session exists.
    pub fn new(config: Config, session: SessionStore) -> Self {
        let screen = if session.is_logged_in() {
            Screen::Home
        } else {
            Screen::Login
        };

        Self {
            should_quit: false,
            screen,
            form: LoginFormState::new(),
            session,
            config,
        }
    }
}
