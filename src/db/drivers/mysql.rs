//! MySQL driver implementation, shared by MariaDB

use async_trait::async_trait;
use mysql_async::prelude::*;

use crate::db::connection::DatabaseKind;
use crate::db::driver::{ConnectionConfig, DatabaseConnection};
use crate::db::error::{ConnectionError, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3306;

/// Parts of a `user:pass@tcp(host:port)/dbname` connection string
#[derive(Debug, PartialEq, Eq)]
struct MySqlDsn {
    user: String,
    password: String,
    host: String,
    port: u16,
    database: Option<String>,
}

impl MySqlDsn {
    fn parse(dsn: &str) -> Result<Self> {
        let (head, tail) = dsn.rsplit_once('/').ok_or_else(|| {
            ConnectionError::InvalidConnectionString(
                "missing the slash before the database name".into(),
            )
        })?;
        let database = tail.split_once('?').map_or(tail, |(name, _)| name);

        let (auth, address) = head.rsplit_once('@').unwrap_or(("", head));
        let (user, password) = auth.split_once(':').unwrap_or((auth, ""));

        let address = if address.is_empty() {
            ""
        } else {
            address
                .strip_prefix("tcp(")
                .and_then(|a| a.strip_suffix(')'))
                .ok_or_else(|| {
                    ConnectionError::InvalidConnectionString(format!(
                        "unsupported network address: {}",
                        address
                    ))
                })?
        };
        let (host, port) = split_host_port(address)?;

        Ok(Self {
            user: user.to_string(),
            password: password.to_string(),
            host,
            port,
            database: (!database.is_empty()).then(|| database.to_string()),
        })
    }
}

fn split_host_port(address: &str) -> Result<(String, u16)> {
    if address.is_empty() {
        return Ok((DEFAULT_HOST.to_string(), DEFAULT_PORT));
    }

    // Bracketed IPv6 literal, with or without a port
    if let Some(rest) = address.strip_prefix('[') {
        let (host, after) = rest.split_once(']').ok_or_else(|| {
            ConnectionError::InvalidConnectionString(format!("unterminated IPv6 address: {}", address))
        })?;
        let port = match after.strip_prefix(':') {
            Some(port) => parse_port(port)?,
            None => DEFAULT_PORT,
        };
        return Ok((host.to_string(), port));
    }

    match address.split_once(':') {
        Some((host, port)) => Ok((host.to_string(), parse_port(port)?)),
        None => Ok((address.to_string(), DEFAULT_PORT)),
    }
}

fn parse_port(port: &str) -> Result<u16> {
    port.parse()
        .map_err(|_| ConnectionError::InvalidConnectionString(format!("invalid port: {}", port)))
}

pub struct MySqlConnection {
    conn: mysql_async::Conn,
    kind: DatabaseKind,
}

impl MySqlConnection {
    pub async fn connect(config: ConnectionConfig) -> Result<Self> {
        let dsn = MySqlDsn::parse(&config.connection_string)?;

        let opts = mysql_async::OptsBuilder::default()
            .ip_or_hostname(dsn.host)
            .tcp_port(dsn.port)
            .user(Some(dsn.user))
            .pass(Some(dsn.password))
            .db_name(dsn.database);

        let conn = mysql_async::Conn::new(opts)
            .await
            .map_err(|e| ConnectionError::Failed(e.to_string()))?;

        Ok(Self {
            conn,
            kind: config.driver,
        })
    }
}

#[async_trait]
impl DatabaseConnection for MySqlConnection {
    async fn execute(&mut self, statement: &str) -> Result<()> {
        self.conn
            .query_drop(statement)
            .await
            .map_err(|e| ConnectionError::Execution(e.to_string()))
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.conn
            .disconnect()
            .await
            .map_err(|e| ConnectionError::Failed(e.to_string()))
    }

    fn driver(&self) -> DatabaseKind {
        self.kind
    }
}
