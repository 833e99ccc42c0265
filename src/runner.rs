//! Sequential statement execution against the active connection.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::db::{
    ConnectionConfig, ConnectionError, Connector, Credentials, DatabaseConnection, DatabaseKind,
};
use crate::script::{load_script, split_statements};
use crate::ui::{collect_parameters, Parameters, Prompter};

/// Failure states of a run
#[derive(Error, Debug)]
pub enum RunError {
    /// The script could not be read; the run continues with an empty script
    #[error("Cannot read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot connect to the database: {0}")]
    ConnectionOpen(#[source] ConnectionError),
    /// A `USE` reconnect failed; the run continues on the previous connection
    #[error("Cannot switch to database {database}: {source}")]
    DbSwitch {
        database: String,
        source: ConnectionError,
    },
    #[error("Cannot execute SQL statement #{}: {source}\n\n{statement}", .index + 1)]
    StatementExecution {
        index: usize,
        statement: String,
        source: ConnectionError,
    },
    #[error("Cannot close the database connection: {0}")]
    Close(#[source] ConnectionError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Ready,
    Connected,
    SwitchingDb,
    Failed,
    Done,
}

/// Per-run state threaded through every step
pub struct RunContext {
    pub kind: Option<DatabaseKind>,
    pub credentials: Credentials,
    pub connection: Option<Box<dyn DatabaseConnection>>,
}

impl RunContext {
    pub fn new(parameters: Parameters) -> Self {
        Self {
            kind: parameters.kind,
            credentials: parameters.credentials,
            connection: None,
        }
    }
}

/// Result of a completed run
#[derive(Debug)]
pub enum RunOutcome {
    Succeeded { statements: usize },
    Failed(RunError),
}

/// Database name targeted by a `USE` statement, without backtick quoting
pub fn use_target(statement: &str) -> Option<&str> {
    statement
        .strip_prefix("USE ")
        .map(|name| name.trim_matches('`'))
}

pub struct Runner<'a> {
    connector: &'a dyn Connector,
    prompter: &'a mut dyn Prompter,
    settings: &'a Settings,
    context: RunContext,
    state: RunState,
}

impl<'a> Runner<'a> {
    pub fn new(
        connector: &'a dyn Connector,
        prompter: &'a mut dyn Prompter,
        settings: &'a Settings,
        context: RunContext,
    ) -> Self {
        Self {
            connector,
            prompter,
            settings,
            context,
            state: RunState::Ready,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    fn transition(&mut self, next: RunState) {
        debug!("Run state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn report_error(&mut self, error: &RunError) {
        let title = self.settings.dialog_title("Error");
        self.prompter.error(&error.to_string(), &title);
    }

    /// Open a connection to `dbname`, reporting failures through the error dialog.
    pub async fn open_database(
        &mut self,
        dbname: &str,
    ) -> Result<Box<dyn DatabaseConnection>, ConnectionError> {
        let result = match self.context.kind {
            Some(kind) => {
                let config = ConnectionConfig::for_database(kind, &self.context.credentials, dbname);
                info!(
                    "Opening {} connection to {} (database {:?})",
                    kind, self.context.credentials.host, dbname
                );
                self.connector.connect(config).await
            }
            None => Err(ConnectionError::UnknownDatabaseKind),
        };

        result.map_err(|e| {
            let title = self.settings.dialog_title("Error");
            self.prompter
                .error(&format!("Cannot connect to the database: {}", e), &title);
            e
        })
    }

    /// Open the initial server-level connection
    pub async fn connect(&mut self) -> Result<(), RunError> {
        match self.open_database("").await {
            Ok(connection) => {
                info!("Connected to {} server", connection.driver());
                self.context.connection = Some(connection);
                self.transition(RunState::Connected);
                Ok(())
            }
            Err(e) => {
                self.transition(RunState::Failed);
                Err(RunError::ConnectionOpen(e))
            }
        }
    }

    async fn switch_database(&mut self, database: &str) {
        self.transition(RunState::SwitchingDb);
        match self.open_database(database).await {
            // The previous connection is dropped, not closed
            Ok(connection) => self.context.connection = Some(connection),
            Err(source) => {
                let error = RunError::DbSwitch {
                    database: database.to_string(),
                    source,
                };
                warn!("{}; continuing on the current connection", error);
            }
        }
        self.transition(RunState::Connected);
    }

    /// Execute every statement in order, stopping at the first failure.
    pub async fn run(&mut self, statements: &[String]) -> Result<usize, RunError> {
        for (index, statement) in statements.iter().enumerate() {
            if let Some(database) = use_target(statement) {
                self.switch_database(database).await;
            }

            let Some(connection) = self.context.connection.as_mut() else {
                self.transition(RunState::Failed);
                return Err(RunError::ConnectionOpen(ConnectionError::Failed(
                    "no open connection".into(),
                )));
            };

            debug!("Executing statement {}: {}", index + 1, statement);
            if let Err(source) = connection.execute(statement).await {
                let error = RunError::StatementExecution {
                    index,
                    statement: statement.clone(),
                    source,
                };
                self.report_error(&error);
                self.transition(RunState::Failed);
                return Err(error);
            }
        }

        self.transition(RunState::Done);
        Ok(statements.len())
    }

    /// Close the live connection, if any
    pub async fn close(&mut self) {
        if let Some(connection) = self.context.connection.take() {
            if let Err(e) = connection.close().await {
                self.report_error(&RunError::Close(e));
            }
        }
    }
}

/// Load `path`, collect connection parameters and run every statement.
pub async fn execute_script(
    path: &Path,
    prompter: &mut dyn Prompter,
    connector: &dyn Connector,
    settings: &Settings,
) -> RunOutcome {
    let (script, read_error) = load_script(path);
    if let Some(source) = read_error {
        let error = RunError::FileRead {
            path: path.to_path_buf(),
            source,
        };
        warn!("{}; running an empty script", error);
    }

    let statements = split_statements(&script.body);
    info!("Loaded {} statements from {}", statements.len(), path.display());

    let parameters = collect_parameters(prompter, settings, script.kind);
    let mut runner = Runner::new(connector, prompter, settings, RunContext::new(parameters));

    let outcome = match runner.connect().await {
        Ok(()) => match runner.run(&statements).await {
            Ok(count) => {
                let message = format!(
                    "Your SQL script {} was executed successfully.",
                    path.display()
                );
                runner.prompter.notify(&message, &settings.title);
                RunOutcome::Succeeded { statements: count }
            }
            Err(e) => RunOutcome::Failed(e),
        },
        Err(e) => RunOutcome::Failed(e),
    };

    debug!("Run finished in state {:?}", runner.state());
    runner.close().await;
    outcome
}
