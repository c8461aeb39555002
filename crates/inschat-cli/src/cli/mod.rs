//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use inschat_core::config::{self, Config};
use inschat_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "inschat")]
#[command(version = "1.0")]
#[command(about = "Terminal client for the InsChat server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the server base URL from config
    #[arg(long, value_name = "URL", env = "INSCHAT_SERVER")]
    server: Option<String>,
}

/// Credentials for the headless subcommands.
#[derive(clap::Args, Debug, Clone)]
struct CredentialArgs {
    /// Account username
    #[arg(short, long)]
    username: String,

    /// Account password
    #[arg(short, long)]
    password: String,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in without the interactive screen
    Login {
        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// Create an account without the interactive screen
    Register {
        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("load config")?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }

    // Logs go to a file so they never write over the TUI. The guard flushes
    // buffered lines on drop, so it must outlive the dispatched command.
    let _log_guard = logging::init(&config::paths::logs_dir()).context("initialize logging")?;

    // default to the interactive auth screen
    let Some(command) = cli.command else {
        #[cfg(feature = "tui")]
        return inschat_tui::run_auth_screen(&config).await;
        #[cfg(not(feature = "tui"))]
        anyhow::bail!("built without the `tui` feature; use `inschat login` instead");
    };

    match command {
        Commands::Login { credentials } => {
            commands::auth::login(&config, &credentials.username, &credentials.password).await
        }
        Commands::Register { credentials } => {
            commands::auth::register(&config, &credentials.username, &credentials.password).await
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
