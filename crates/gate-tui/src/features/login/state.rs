//! Login form state.
//!
//! Two reducer-driven fields, keyboard focus, and the cancel-and-rearm
//! bookkeeping for the debounced whole-form validity check.

use gate_core::form::{Field, FieldAction, FieldRule, Validity};
use tokio_util::sync::CancellationToken;

use crate::common::{LatestOnly, RequestId};

/// Which field owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedField {
    Email,
    Password,
}

/// A single-line input bound to a reducer-driven field.
///
/// Editing operations build the new value and push it through the reducer
/// as one `Input` dispatch, so value and validity always move together.
/// The cursor (a char index) is view state and stays outside the reducer.
#[derive(Debug)]
pub struct FieldInput {
    field: Field,
    cursor: usize,
}

impl FieldInput {
    pub fn new(rule: FieldRule) -> Self {
        Self {
            field: Field::new(rule),
            cursor: 0,
        }
    }

    pub fn value(&self) -> &str {
        self.field.value()
    }

    pub fn validity(&self) -> Validity {
        self.field.validity()
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut value = self.field.value().to_string();
        let at = char_to_byte_index(&value, self.cursor);
        value.insert(at, ch);
        self.cursor += 1;
        self.field.dispatch(FieldAction::Input(value));
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut value = self.field.value().to_string();
        let start = char_to_byte_index(&value, self.cursor - 1);
        let end = char_to_byte_index(&value, self.cursor);
        value.replace_range(start..end, "");
        self.cursor -= 1;
        self.field.dispatch(FieldAction::Input(value));
    }

    pub fn delete(&mut self) {
        let mut value = self.field.value().to_string();
        let start = char_to_byte_index(&value, self.cursor);
        if start == value.len() {
            return;
        }
        let end = char_to_byte_index(&value, self.cursor + 1);
        value.replace_range(start..end, "");
        self.field.dispatch(FieldAction::Input(value));
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let len = self.field.value().chars().count();
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.field.value().chars().count();
    }

    /// Forces a validity recomputation from the stored value.
    pub fn blur(&mut self) {
        self.field.dispatch(FieldAction::Blur);
    }

    /// Returns the field to its initial state.
    pub fn reset(&mut self) {
        self.field.dispatch(FieldAction::Reset);
        self.cursor = 0;
    }
}

/// Converts a char index into a byte index, clamping to the end.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

/// Cancel-and-rearm bookkeeping for the debounced form check.
///
/// At most one timer is armed at any instant. `arm` supersedes the previous
/// request and hands back its token so the reducer can emit a cancel effect;
/// `fire` is the latest-only gate for timers that went off.
#[derive(Debug, Default)]
pub struct DebounceState {
    gate: LatestOnly,
    token: Option<CancellationToken>,
}

impl DebounceState {
    /// Arms a new timer: returns the new request id and its token, plus the
    /// superseded token if one was still armed.
    pub fn arm(&mut self) -> (RequestId, CancellationToken, Option<CancellationToken>) {
        let stale = self.token.take();
        let req = self.gate.begin();
        let token = CancellationToken::new();
        self.token = Some(token.clone());
        (req, token, stale)
    }

    /// Latest-only gate for a fired timer. True when `req` is still the
    /// armed request; stale and torn-down timers are dropped here.
    pub fn fire(&mut self, req: RequestId) -> bool {
        if self.gate.finish_if_active(req) {
            self.token = None;
            true
        } else {
            false
        }
    }

    /// Disarms without firing, returning the token to cancel.
    pub fn disarm(&mut self) -> Option<CancellationToken> {
        self.gate.cancel();
        self.token.take()
    }

    pub fn is_armed(&self) -> bool {
        self.gate.has_active()
    }
}

/// Login form state.
#[derive(Debug)]
pub struct LoginFormState {
    pub email: FieldInput,
    pub password: FieldInput,
    pub focus: FocusedField,
    pub debounce: DebounceState,
    /// Published whole-form validity. Only recomputed when the debounce
    /// quiet period elapses, never per keystroke.
    pub form_valid: bool,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            email: FieldInput::new(FieldRule::Email),
            password: FieldInput::new(FieldRule::Password),
            focus: FocusedField::Email,
            debounce: DebounceState::default(),
            form_valid: false,
        }
    }

    pub fn focused_mut(&mut self) -> &mut FieldInput {
        match self.focus {
            FocusedField::Email => &mut self.email,
            FocusedField::Password => &mut self.password,
        }
    }

    /// Current derived validities, (email, password).
    pub fn validity_pair(&self) -> (Validity, Validity) {
        (self.email.validity(), self.password.validity())
    }

    /// Resets the form to its initial state, disarming any pending check.
    /// Returns the disarmed token for cancellation.
    pub fn reset(&mut self) -> Option<CancellationToken> {
        self.email.reset();
        self.password.reset();
        self.focus = FocusedField::Email;
        self.form_valid = false;
        self.debounce.disarm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_moves_value_and_validity_together() {
        let mut input = FieldInput::new(FieldRule::Email);

        for ch in "a@b".chars() {
            input.insert_char(ch);
        }
        assert_eq!(input.value(), "a@b");
        assert_eq!(input.cursor(), 3);
        assert!(input.validity().is_valid());

        // Deleting the '@' flips validity in the same dispatch.
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 1);
        assert!(input.validity().is_invalid());
    }

    #[test]
    fn editing_mid_value_respects_char_boundaries() {
        let mut input = FieldInput::new(FieldRule::Email);
        for ch in "héllo".chars() {
            input.insert_char(ch);
        }
        input.move_home();
        input.move_right();
        input.delete();
        assert_eq!(input.value(), "hllo");

        input.move_end();
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut input = FieldInput::new(FieldRule::Password);
        input.backspace();
        assert_eq!(input.value(), "");
        assert_eq!(input.validity(), Validity::Unknown);
    }

    #[test]
    fn reset_clears_value_cursor_and_marker() {
        let mut input = FieldInput::new(FieldRule::Password);
        for ch in "short".chars() {
            input.insert_char(ch);
        }
        assert!(input.validity().is_invalid());

        input.reset();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
        assert_eq!(input.validity(), Validity::Unknown);
    }

    #[test]
    fn arming_supersedes_the_previous_timer() {
        let mut debounce = DebounceState::default();

        let (first, _token, stale) = debounce.arm();
        assert!(stale.is_none());
        assert!(debounce.is_armed());

        let (second, _token, stale) = debounce.arm();
        // The superseded token comes back for cancellation.
        assert!(stale.is_some());

        // Only the latest request may fire.
        assert!(!debounce.fire(first));
        assert!(debounce.is_armed());
        assert!(debounce.fire(second));
        assert!(!debounce.is_armed());
    }

    #[test]
    fn disarmed_timer_never_fires() {
        let mut debounce = DebounceState::default();
        let (req, _token, _stale) = debounce.arm();

        let token = debounce.disarm();
        assert!(token.is_some());
        assert!(!debounce.is_armed());
        assert!(!debounce.fire(req));
    }

    #[test]
    fn form_reset_restores_the_initial_state() {
        let mut form = LoginFormState::new();
        form.focus = FocusedField::Password;
        form.form_valid = true;
        for ch in "a@b.com".chars() {
            form.email.insert_char(ch);
        }
        let _ = form.debounce.arm();

        let token = form.reset();
        assert!(token.is_some());
        assert_eq!(form.focus, FocusedField::Email);
        assert!(!form.form_valid);
        assert_eq!(form.email.value(), "");
        assert_eq!(form.validity_pair(), (Validity::Unknown, Validity::Unknown));
    }
}
