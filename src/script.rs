//! Script loading: header directive detection and statement splitting.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::db::DatabaseKind;

/// A script file with its header directive removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedScript {
    /// Database kind named by the header directive, if any
    pub kind: Option<DatabaseKind>,
    pub body: String,
}

static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^/[*]+[\s*]*Database:\s*(MySQL|MariaDB|PostgresSQL)[\s*]+/")
        .expect("header directive pattern is valid")
});

/// Returns true when the path names a SQL script
pub fn is_sql_file(path: &str) -> bool {
    path.ends_with(".sql")
}

/// Read `path` and split off its header directive.
///
/// Returns the read error alongside an empty script when the file cannot be
/// read; callers decide whether to surface it.
pub fn load_script(path: &Path) -> (LoadedScript, Option<std::io::Error>) {
    match std::fs::read(path) {
        Ok(bytes) => (extract_header(&String::from_utf8_lossy(&bytes)), None),
        Err(e) => (extract_header(""), Some(e)),
    }
}

/// Detect a `/* Database: <kind> */` directive and strip it from the content.
pub fn extract_header(content: &str) -> LoadedScript {
    let Some(captures) = HEADER.captures(content) else {
        return LoadedScript {
            kind: None,
            body: content.to_string(),
        };
    };

    let directive = &captures[0];
    let kind = DatabaseKind::from_header(&captures[1]);
    let body = content.replace(directive, "").trim_matches('\n').to_string();

    LoadedScript { kind, body }
}

/// Split a script on `;`, dropping blank fragments.
///
/// Semicolons inside string literals or comments are not special.
pub fn split_statements(body: &str) -> Vec<String> {
    body.split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .map(String::from)
        .collect()
}
