//! Home view key handling.

use crossterm::event::{KeyCode, KeyEvent};

use crate::effects::UiEffect;
use crate::state::{AppState, Screen};

/// Handles a key event while the home screen is routed in.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('l') => logout(app),
        KeyCode::Char('q') | KeyCode::Esc => vec![UiEffect::Quit],
        _ => vec![],
    }
}

/// Logs out: clears the session, resets the form so the login screen comes
/// back blank, and persists the cleared flag.
fn logout(app: &mut AppState) -> Vec<UiEffect> {
    app.session.logout();
    app.screen = Screen::Login;

    let mut effects = Vec::new();
    if let Some(token) = app.form.reset() {
        effects.push(UiEffect::CancelTimer { token });
    }
    effects.push(UiEffect::PersistSession);
    effects
}
