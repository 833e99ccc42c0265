//! PostgreSQL driver implementation

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio_postgres::{Client, NoTls};

use crate::db::connection::DatabaseKind;
use crate::db::driver::{ConnectionConfig, DatabaseConnection};
use crate::db::error::{ConnectionError, Result};

pub struct PostgresConnection {
    client: Client,
    task: JoinHandle<()>,
}

impl PostgresConnection {
    pub async fn connect(config: ConnectionConfig) -> Result<Self> {
        let conn_str = &config.connection_string;
        if !conn_str.starts_with("postgres://") && !conn_str.starts_with("postgresql://") {
            return Err(ConnectionError::InvalidConnectionString(
                "PostgreSQL connection string must start with postgres:// or postgresql://".into(),
            ));
        }

        let (client, connection) = tokio_postgres::connect(conn_str, NoTls)
            .await
            .map_err(|e| ConnectionError::Failed(e.to_string()))?;

        // Spawn connection handler (required by tokio-postgres)
        let task = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::warn!("PostgreSQL connection error: {}", e);
            }
        });

        Ok(Self { client, task })
    }
}

#[async_trait]
impl DatabaseConnection for PostgresConnection {
    async fn execute(&mut self, statement: &str) -> Result<()> {
        // Simple query protocol: accepts DDL and anything else without parameters
        self.client
            .batch_execute(statement)
            .await
            .map_err(|e| ConnectionError::Execution(e.to_string()))
    }

    async fn close(self: Box<Self>) -> Result<()> {
        let Self { client, task } = *self;
        // Dropping the client lets the connection future finish
        drop(client);
        task.await
            .map_err(|e| ConnectionError::Failed(e.to_string()))
    }

    fn driver(&self) -> DatabaseKind {
        DatabaseKind::PostgreSql
    }
}
