//! Headless login/register command handlers.
//!
//! Same wire protocol as the interactive screen, without the terminal UI.
//! Failures exit with the mapped user-facing message; the underlying error
//! goes to the log file.

use anyhow::{Context, Result};
use inschat_core::client::{AuthClient, Credentials};
use inschat_core::config::Config;
use tracing::warn;

pub async fn login(config: &Config, username: &str, password: &str) -> Result<()> {
    let client = AuthClient::new(&config.server_url).context("create auth client")?;
    let credentials = Credentials::new(username, password);

    match client.login(&credentials).await {
        Ok(_) => {
            println!("Logged in as {username}.");
            Ok(())
        }
        Err(e) => {
            warn!(username, error = %e, "login failed");
            anyhow::bail!(e.user_message());
        }
    }
}

pub async fn register(config: &Config, username: &str, password: &str) -> Result<()> {
    let client = AuthClient::new(&config.server_url).context("create auth client")?;
    let credentials = Credentials::new(username, password);

    match client.register(&credentials).await {
        Ok(_) => {
            println!("Account created — please log in now.");
            Ok(())
        }
        Err(e) => {
            warn!(username, error = %e, "registration failed");
            anyhow::bail!(e.user_message());
        }
    }
}
