pub mod connection;
pub mod driver;
pub mod drivers;
pub mod error;

pub use connection::{Credentials, DatabaseKind};
pub use driver::{ConnectionConfig, Connector, DatabaseConnection, DriverConnector};
pub use error::ConnectionError;
