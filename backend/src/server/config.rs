//! Server configuration sourced from the environment.

use std::env;
use std::net::SocketAddr;

/// Settings the HTTP server is built from.
///
/// `database_url` is optional: without one the server runs on the seeded
/// in-memory store, which suits demos and handler tests.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) database_url: Option<String>,
}

/// Default listen address when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

impl ServerConfig {
    /// Build a configuration from explicit values.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, database_url: Option<String>) -> Self {
        Self {
            bind_addr,
            database_url,
        }
    }

    /// Read `BIND_ADDR` and `DATABASE_URL` from the environment.
    ///
    /// # Errors
    ///
    /// Fails when `BIND_ADDR` is set but does not parse as a socket address.
    pub fn from_env() -> std::io::Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        Self::parse(&bind_addr, database_url)
    }

    fn parse(bind_addr: &str, database_url: Option<String>) -> std::io::Result<Self> {
        let bind_addr = bind_addr
            .parse()
            .map_err(|err| std::io::Error::other(format!("invalid BIND_ADDR {bind_addr:?}: {err}")))?;
        Ok(Self::new(bind_addr, database_url))
    }

    /// The socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// The configured PostgreSQL URL, if any.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }
}
