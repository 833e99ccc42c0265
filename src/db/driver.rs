use async_trait::async_trait;

use super::connection::{Credentials, DatabaseKind};
use super::error::{ConnectionError, Result};

/// Core trait for a live database connection
#[async_trait]
pub trait DatabaseConnection: Send {
    /// Run one statement, discarding any result set
    async fn execute(&mut self, statement: &str) -> Result<()>;

    /// Release the connection
    async fn close(self: Box<Self>) -> Result<()>;

    fn driver(&self) -> DatabaseKind;
}

/// Configuration for creating a database connection
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub driver: DatabaseKind,
    pub connection_string: String,
}

impl ConnectionConfig {
    pub fn new(driver: DatabaseKind, connection_string: String) -> Self {
        Self {
            driver,
            connection_string,
        }
    }

    /// Config for `dbname` on the server described by `credentials`.
    /// An empty `dbname` connects to the server without selecting a database.
    pub fn for_database(driver: DatabaseKind, credentials: &Credentials, dbname: &str) -> Self {
        Self::new(driver, driver.connection_string(credentials, dbname))
    }
}

/// Opens connections; the seam the runner uses so it can be driven without a server
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, config: ConnectionConfig) -> Result<Box<dyn DatabaseConnection>>;
}

/// Connector backed by the compiled-in drivers
#[derive(Debug, Default, Clone, Copy)]
pub struct DriverConnector;

#[async_trait]
impl Connector for DriverConnector {
    async fn connect(&self, config: ConnectionConfig) -> Result<Box<dyn DatabaseConnection>> {
        create_connection(config).await
    }
}

/// Factory function - opens the right connection type based on driver
pub async fn create_connection(config: ConnectionConfig) -> Result<Box<dyn DatabaseConnection>> {
    if !config.driver.is_available() {
        return Err(ConnectionError::DriverNotAvailable(config.driver.feature_name()));
    }

    match config.driver {
        #[cfg(feature = "postgres")]
        DatabaseKind::PostgreSql => Ok(Box::new(
            super::drivers::postgres::PostgresConnection::connect(config).await?,
        )),

        #[cfg(feature = "mysql")]
        DatabaseKind::MySql | DatabaseKind::MariaDb => Ok(Box::new(
            super::drivers::mysql::MySqlConnection::connect(config).await?,
        )),

        // Fallback for when feature not compiled
        #[allow(unreachable_patterns)]
        _ => Err(ConnectionError::DriverNotAvailable(config.driver.feature_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_for_database_builds_connection_string() {
        let creds = Credentials::new("u", "p", "h");
        let config = ConnectionConfig::for_database(DatabaseKind::PostgreSql, &creds, "app");
        assert_eq!(config.driver, DatabaseKind::PostgreSql);
        assert_eq!(
            config.connection_string,
            "postgres://u:p@h/app?sslmode=disable"
        );
    }
}
