//! Full-screen terminal auth form for InsChat.

pub mod common;
pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use inschat_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive login/registration screen.
pub async fn run_auth_screen(config: &Config) -> Result<()> {
    // The form requires a terminal to render.
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The auth screen requires a terminal.\n\
             Use `inschat login --username '...' --password '...'` for headless use."
        );
    }

    let mut runtime = TuiRuntime::new(config.clone())?;
    let result = runtime.run();

    let _ = terminal::restore_terminal();
    result
}
