//! Gathers host, database type and login data before a run.

use tracing::debug;

use crate::config::Settings;
use crate::db::{Credentials, DatabaseKind};

use super::prompt::{Answer, Prompter};

const HOST_LABEL: &str = "Enter the database host:";
const KIND_LABEL: &str = "Which type of database is it?";

/// Everything the runner needs to open connections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// `None` when the type prompt was cancelled
    pub kind: Option<DatabaseKind>,
    pub credentials: Credentials,
}

/// Ask for the host, the database type (unless `known_kind` is set) and the login.
pub fn collect_parameters(
    prompter: &mut dyn Prompter,
    settings: &Settings,
    known_kind: Option<DatabaseKind>,
) -> Parameters {
    let host = input_host(prompter, settings);
    let kind = input_kind(prompter, known_kind);
    let (username, password) = input_login(prompter, settings);

    Parameters {
        kind: match kind {
            Answer::Value(kind) => Some(kind),
            Answer::Skipped => known_kind,
            Answer::Cancelled => None,
        },
        credentials: Credentials::new(username, password, host),
    }
}

pub fn input_host(prompter: &mut dyn Prompter, settings: &Settings) -> String {
    prompter
        .entry(HOST_LABEL, &settings.dialog_title("Host"), &settings.default_host)
        .or_empty()
}

pub fn input_kind(
    prompter: &mut dyn Prompter,
    known_kind: Option<DatabaseKind>,
) -> Answer<DatabaseKind> {
    if let Some(kind) = known_kind {
        debug!("Database type {} set by script header", kind);
        return Answer::Skipped;
    }

    let items: Vec<&str> = DatabaseKind::all().iter().map(DatabaseKind::name).collect();
    match prompter.select(KIND_LABEL, &items) {
        Answer::Value(index) => DatabaseKind::all()
            .get(index)
            .copied()
            .map_or(Answer::Cancelled, Answer::Value),
        Answer::Cancelled => Answer::Cancelled,
        Answer::Skipped => Answer::Skipped,
    }
}

/// Username and password; a blank password defaults to the username.
pub fn input_login(prompter: &mut dyn Prompter, settings: &Settings) -> (String, String) {
    let (username, mut password) = prompter.login(&settings.dialog_title("Login")).or_empty();

    if !username.is_empty() && password.is_empty() {
        password = username.clone();
    }

    (username, password)
}
