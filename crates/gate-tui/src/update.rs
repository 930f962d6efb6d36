//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, Screen};
use crate::{home, login};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::FormCheckElapsed { req } => {
            login::handle_form_check(&mut app.form, req);
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        // Resize is picked up by the next draw; everything else is ignored.
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return quit(app);
    }

    match app.screen {
        Screen::Login if key.code == KeyCode::Esc => quit(app),
        Screen::Login => login::handle_key(app, key),
        Screen::Home => home::handle_key(app, key),
    }
}

/// Quitting tears down any armed timer; nothing may publish afterwards.
fn quit(app: &mut AppState) -> Vec<UiEffect> {
    let mut effects = Vec::new();
    if let Some(token) = app.form.debounce.disarm() {
        effects.push(UiEffect::CancelTimer { token });
    }
    effects.push(UiEffect::Quit);
    effects
}
