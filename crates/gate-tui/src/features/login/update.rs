//! Login form controller.
//!
//! Binds key events to field dispatches, re-arms the debounced form check
//! whenever a derived validity changes, and gates submission on the
//! published whole-form validity.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gate_core::form::form_validity;

use super::state::{FieldInput, FocusedField, LoginFormState};
use crate::common::RequestId;
use crate::effects::UiEffect;
use crate::state::{AppState, Screen};

/// Handles a key event while the login screen is routed in.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let delay = app.config.debounce_delay();

    match key.code {
        KeyCode::Tab => {
            let target = match app.form.focus {
                FocusedField::Email => FocusedField::Password,
                FocusedField::Password => FocusedField::Email,
            };
            focus(&mut app.form, target, delay)
        }
        KeyCode::BackTab | KeyCode::Up => focus(&mut app.form, FocusedField::Email, delay),
        KeyCode::Down => focus(&mut app.form, FocusedField::Password, delay),
        KeyCode::Enter => submit(app),
        KeyCode::Left => {
            app.form.focused_mut().move_left();
            vec![]
        }
        KeyCode::Right => {
            app.form.focused_mut().move_right();
            vec![]
        }
        KeyCode::Home => {
            app.form.focused_mut().move_home();
            vec![]
        }
        KeyCode::End => {
            app.form.focused_mut().move_end();
            vec![]
        }
        KeyCode::Backspace => edit(&mut app.form, delay, FieldInput::backspace),
        KeyCode::Delete => edit(&mut app.form, delay, FieldInput::delete),
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            edit(&mut app.form, delay, |field| field.insert_char(ch))
        }
        _ => vec![],
    }
}

/// Publishes whole-form validity when the elapsed timer is still current.
///
/// Stale requests (superseded or torn down since arming) fall through the
/// latest-only gate and publish nothing.
pub fn handle_form_check(form: &mut LoginFormState, req: RequestId) {
    if form.debounce.fire(req) {
        let (email, password) = form.validity_pair();
        form.form_valid = form_validity(email, password);
    }
}

/// Applies an edit to the focused field, re-arming the debounce if a
/// derived validity changed.
fn edit(
    form: &mut LoginFormState,
    delay: Duration,
    apply: impl FnOnce(&mut FieldInput),
) -> Vec<UiEffect> {
    let before = form.validity_pair();
    apply(form.focused_mut());
    rearm_if_changed(form, before, delay)
}

/// Moves focus, dispatching `Blur` to the field being left so its marker
/// updates immediately, independent of the debounced whole-form check.
fn focus(form: &mut LoginFormState, target: FocusedField, delay: Duration) -> Vec<UiEffect> {
    if form.focus == target {
        return vec![];
    }
    let before = form.validity_pair();
    form.focused_mut().blur();
    form.focus = target;
    rearm_if_changed(form, before, delay)
}

fn rearm_if_changed(
    form: &mut LoginFormState,
    before: (gate_core::form::Validity, gate_core::form::Validity),
    delay: Duration,
) -> Vec<UiEffect> {
    if form.validity_pair() == before {
        return vec![];
    }

    let (req, token, stale) = form.debounce.arm();
    let mut effects = Vec::new();
    if let Some(stale) = stale {
        effects.push(UiEffect::CancelTimer { token: stale });
    }
    effects.push(UiEffect::ArmFormCheck { req, token, delay });
    effects
}

/// Submission. A no-op while the published form validity is false;
/// otherwise logs in with the two current raw values.
fn submit(app: &mut AppState) -> Vec<UiEffect> {
    if !app.form.form_valid {
        return vec![];
    }

    app.session
        .login(app.form.email.value(), app.form.password.value());
    app.screen = Screen::Home;

    // Leaving the login view tears down any armed check.
    let mut effects = Vec::new();
    if let Some(token) = app.form.debounce.disarm() {
        effects.push(UiEffect::CancelTimer { token });
    }
    effects.push(UiEffect::PersistSession);
    effects
}
