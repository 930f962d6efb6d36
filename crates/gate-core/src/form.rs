//! Login form field state machine.
//!
//! Each field is driven by a pure reducer: `(state, action) -> state`.
//! Validity is always derived from the value at dispatch time and never set
//! independently, so field state can only change through a dispatch.

/// Tri-state validation status of a field.
///
/// `Unknown` means no check has run yet. This is the initial state and,
/// deliberately, also the state after [`FieldAction::Reset`]: a reset field
/// has not been checked, so it carries no invalid marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

impl Validity {
    /// True only for an explicitly failed check, never for `Unknown`.
    pub fn is_invalid(self) -> bool {
        matches!(self, Validity::Invalid)
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Validity::Valid)
    }
}

/// Validation rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// The value must contain an `@`.
    Email,
    /// The trimmed value must be longer than 6 characters.
    Password,
}

impl FieldRule {
    /// Runs the rule against a raw value.
    pub fn check(self, value: &str) -> Validity {
        let ok = match self {
            FieldRule::Email => value.contains('@'),
            FieldRule::Password => value.trim().chars().count() > 6,
        };
        if ok { Validity::Valid } else { Validity::Invalid }
    }
}

/// Current state of a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    /// Raw input text.
    pub value: String,
    /// Validation status as of the last dispatched action.
    pub validity: Validity,
}

/// Actions a field reducer accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction {
    /// The user edited the field. Value and validity are recomputed together.
    Input(String),
    /// Focus left the field. Validity is recomputed from the stored value,
    /// which stays untouched.
    Blur,
    /// Return to the initial state: empty value, no check run.
    Reset,
}

/// Pure field reducer. Total over [`FieldAction`]; nothing here can fail.
pub fn reduce(state: &FieldState, rule: FieldRule, action: FieldAction) -> FieldState {
    match action {
        FieldAction::Input(value) => FieldState {
            validity: rule.check(&value),
            value,
        },
        FieldAction::Blur => FieldState {
            value: state.value.clone(),
            validity: rule.check(&state.value),
        },
        FieldAction::Reset => FieldState::default(),
    }
}

/// A field bundles its rule with the reducer-owned state.
#[derive(Debug, Clone)]
pub struct Field {
    rule: FieldRule,
    state: FieldState,
}

impl Field {
    pub fn new(rule: FieldRule) -> Self {
        Self {
            rule,
            state: FieldState::default(),
        }
    }

    /// Applies an action through the reducer.
    pub fn dispatch(&mut self, action: FieldAction) {
        self.state = reduce(&self.state, self.rule, action);
    }

    pub fn value(&self) -> &str {
        &self.state.value
    }

    pub fn validity(&self) -> Validity {
        self.state.validity
    }
}

/// Whole-form validity: both fields must have passed their checks.
///
/// Callers commit this only after the debounce quiet period, never per
/// keystroke.
pub fn form_validity(email: Validity, password: Validity) -> bool {
    email.is_valid() && password.is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(rule: FieldRule, value: &str) -> FieldState {
        reduce(
            &FieldState::default(),
            rule,
            FieldAction::Input(value.to_string()),
        )
    }

    #[test]
    fn email_rule_requires_at_sign() {
        assert_eq!(input(FieldRule::Email, "a@b.com").validity, Validity::Valid);
        assert_eq!(input(FieldRule::Email, "@").validity, Validity::Valid);
        assert_eq!(input(FieldRule::Email, "nobody").validity, Validity::Invalid);
        assert_eq!(input(FieldRule::Email, "").validity, Validity::Invalid);
    }

    #[test]
    fn password_rule_requires_more_than_six_chars_trimmed() {
        assert_eq!(
            input(FieldRule::Password, "1234567").validity,
            Validity::Valid
        );
        // Exactly six characters is not enough.
        assert_eq!(
            input(FieldRule::Password, "123456").validity,
            Validity::Invalid
        );
        // Surrounding whitespace does not count toward the length.
        assert_eq!(
            input(FieldRule::Password, "  123456  ").validity,
            Validity::Invalid
        );
        assert_eq!(
            input(FieldRule::Password, " 1234567 ").validity,
            Validity::Valid
        );
        assert_eq!(
            input(FieldRule::Password, "       ").validity,
            Validity::Invalid
        );
    }

    #[test]
    fn blur_recomputes_validity_without_touching_value() {
        let state = FieldState {
            value: "short".to_string(),
            validity: Validity::Unknown,
        };
        let next = reduce(&state, FieldRule::Password, FieldAction::Blur);
        assert_eq!(next.value, "short");
        assert_eq!(next.validity, Validity::Invalid);
    }

    #[test]
    fn blur_on_initial_state_marks_invalid() {
        let next = reduce(&FieldState::default(), FieldRule::Email, FieldAction::Blur);
        assert_eq!(next.value, "");
        assert_eq!(next.validity, Validity::Invalid);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let state = input(FieldRule::Email, "a@b.com");
        assert_eq!(state.validity, Validity::Valid);

        let next = reduce(&state, FieldRule::Email, FieldAction::Reset);
        assert_eq!(next, FieldState::default());
        assert_eq!(next.validity, Validity::Unknown);
    }

    #[test]
    fn input_recomputes_value_and_validity_together() {
        let mut field = Field::new(FieldRule::Email);
        assert_eq!(field.validity(), Validity::Unknown);

        field.dispatch(FieldAction::Input("a".to_string()));
        assert_eq!(field.value(), "a");
        assert_eq!(field.validity(), Validity::Invalid);

        field.dispatch(FieldAction::Input("a@".to_string()));
        assert_eq!(field.value(), "a@");
        assert_eq!(field.validity(), Validity::Valid);
    }

    #[test]
    fn form_validity_requires_both_fields() {
        assert!(form_validity(Validity::Valid, Validity::Valid));
        assert!(!form_validity(Validity::Valid, Validity::Invalid));
        assert!(!form_validity(Validity::Invalid, Validity::Valid));
        // An unchecked field is not a valid field.
        assert!(!form_validity(Validity::Valid, Validity::Unknown));
        assert!(!form_validity(Validity::Unknown, Validity::Unknown));
    }
}
