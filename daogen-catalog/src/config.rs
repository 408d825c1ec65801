use std::{fmt, path::PathBuf};

/// Where the MySQL server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Unix domain socket
    Socket(PathBuf),
    /// TCP host and port
    Tcp { host: String, port: u16 },
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Socket(path) => write!(f, "unix({})", path.display()),
            Endpoint::Tcp { host, port } => write!(f, "{}:{}", host, port),
        }
    }
}

/// MySQL connection settings for one generation run.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub username: String,
    pub password: Option<String>,
    pub endpoint: Endpoint,
    pub database: String,
}

impl ConnectionConfig {
    /// `user@endpoint/database`, never including the password
    pub fn target(&self) -> String {
        format!("{}@{}/{}", self.username, self.endpoint, self.database)
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("endpoint", &self.endpoint)
            .field("database", &self.database)
            .finish()
    }
}
