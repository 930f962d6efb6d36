//! Full-screen TUI for the gate login demo.
//!
//! The architecture follows the Elm shape: a unified event enum, a pure
//! reducer that mutates state and returns effects, and a runtime that owns
//! the terminal and executes those effects.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use features::{home, login};
use gate_core::config::Config;
use gate_core::session::SessionStore;
pub use runtime::Runtime;

/// Runs the interactive login app until the user quits.
pub async fn run_app(config: Config, session: SessionStore) -> Result<()> {
    // The TUI needs a terminal to render
    if !stderr().is_terminal() {
        anyhow::bail!(
            "gate requires a terminal.\n\
             Use `gate login` / `gate logout` / `gate status` for scripting."
        );
    }

    let mut runtime = Runtime::new(config, session)?;
    runtime.run()?;

    Ok(())
}
