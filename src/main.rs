//! run-sql - run a SQL script against a MySQL, MariaDB or PostgreSQL server.

mod config;
mod db;
mod runner;
mod script;
mod ui;

use std::path::Path;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::{Settings, LOG_ENV};
use db::DriverConnector;
use runner::RunOutcome;
use ui::TerminalPrompter;

#[derive(Parser)]
#[command(name = "run-sql")]
#[command(about = "Run a SQL script, prompting for the connection details")]
#[command(version)]
struct Cli {
    /// Script files; only the first one ending in .sql is run
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    files: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging()?;

    let Some(path) = cli.files.iter().find(|f| script::is_sql_file(f)) else {
        debug!("No .sql file given, nothing to do");
        return Ok(());
    };

    let settings = Settings::load();
    let mut prompter = TerminalPrompter::new();

    // Errors were already shown in dialogs; the exit status stays 0
    match runner::execute_script(Path::new(path), &mut prompter, &DriverConnector, &settings).await {
        RunOutcome::Succeeded { statements } => {
            info!("Executed {} statements from {}", statements, path)
        }
        RunOutcome::Failed(e) => info!("Run of {} stopped: {}", path, e),
    }

    Ok(())
}

/// Log to stderr, filtered by `RUN_SQL_LOG` (default: warn)
fn setup_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))
}
