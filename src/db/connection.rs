/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    MySql,
    MariaDb,
    PostgreSql,
}

impl DatabaseKind {
    pub fn name(&self) -> &'static str {
        match self {
            DatabaseKind::MySql => "MySQL",
            DatabaseKind::MariaDb => "MariaDB",
            DatabaseKind::PostgreSql => "PostgreSQL",
        }
    }

    /// Driver key, shared by the MySQL-compatible kinds
    pub fn driver_name(&self) -> &'static str {
        match self {
            DatabaseKind::MySql | DatabaseKind::MariaDb => "mysql",
            DatabaseKind::PostgreSql => "postgres",
        }
    }

    /// Name of the cargo feature that compiles the driver in
    pub fn feature_name(&self) -> &'static str {
        self.driver_name()
    }

    pub fn is_available(&self) -> bool {
        match self {
            DatabaseKind::MySql | DatabaseKind::MariaDb => cfg!(feature = "mysql"),
            DatabaseKind::PostgreSql => cfg!(feature = "postgres"),
        }
    }

    /// Parse the name used in a script header directive.
    ///
    /// Headers spell PostgreSQL as `PostgresSQL`.
    pub fn from_header(name: &str) -> Option<Self> {
        match name {
            "MySQL" => Some(DatabaseKind::MySql),
            "MariaDB" => Some(DatabaseKind::MariaDb),
            "PostgresSQL" => Some(DatabaseKind::PostgreSql),
            _ => None,
        }
    }

    pub fn all() -> &'static [DatabaseKind] {
        &[
            DatabaseKind::MySql,
            DatabaseKind::MariaDb,
            DatabaseKind::PostgreSql,
        ]
    }

    /// Build the driver connection string for `dbname`
    pub fn connection_string(&self, credentials: &Credentials, dbname: &str) -> String {
        let Credentials {
            username,
            password,
            host,
        } = credentials;
        match self {
            DatabaseKind::MySql | DatabaseKind::MariaDb => {
                let address = if host.is_empty() {
                    String::new()
                } else {
                    format!("tcp({})", host)
                };
                format!("{}:{}@{}/{}", username, password, address, dbname)
            }
            DatabaseKind::PostgreSql => format!(
                "postgres://{}:{}@{}/{}?sslmode=disable",
                username, password, host, dbname
            ),
        }
    }
}

impl std::fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Login data collected once per run and reused on every reconnect
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub host: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            host: host.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("host", &self.host)
            .finish()
    }
}
