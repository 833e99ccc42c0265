use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("Connection failed: {0}")]
    Failed(String),
    #[error("Invalid connection string: {0}")]
    InvalidConnectionString(String),
    #[error("Driver not available: {0} (not compiled)")]
    DriverNotAvailable(&'static str),
    #[error("Unknown database type: no type was selected")]
    UnknownDatabaseKind,
    #[error("{0}")]
    Execution(String),
}

pub type Result<T> = std::result::Result<T, ConnectionError>;
