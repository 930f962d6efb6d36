//! Login form feature: reducer-driven fields, the debounced whole-form
//! validity check, and submission.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::{DebounceState, FieldInput, FocusedField, LoginFormState};
pub use update::{handle_form_check, handle_key};
