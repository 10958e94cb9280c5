use std::fmt;

use tracing::debug;

use crate::capability::{Addressable, Connectable};
use crate::option::{BoxedOption, Configure};

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_CONNECTIONS: i64 = 3;

/// Configuration holder for a notional server: a bind address and a
/// connection limit. Nothing here listens or accepts.
///
/// Too many optional settings for a positional constructor, so it is
/// built from functional options instead: start from the defaults, then
/// apply each option left to right. Later options win.
///
/// ```
/// use server_options::{Addressable, Connectable, Server, with_address, with_max_connections};
///
/// let server = Server::new(&[&with_address("192.168.0.1:8181"), &with_max_connections(5)]);
/// assert_eq!(server.address(), "192.168.0.1:8181");
/// assert_eq!(server.max_connections(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    address: String,
    max_connections: i64,
}

impl Server {
    /// Build a server from an ordered list of options. An empty slice
    /// leaves the defaults in place.
    pub fn new(options: &[&dyn Configure<Self>]) -> Self {
        Self::configured(options)
    }

    /// Like [`Server::new`], for option lists assembled at runtime.
    pub fn from_options<'a, I>(options: I) -> Self
    where
        I: IntoIterator<Item = BoxedOption<'a, Self>>,
    {
        Self::configured(options)
    }

    /// Apply one more option after construction.
    pub fn apply(&mut self, option: impl Configure<Self>) -> &mut Self {
        option.apply(self);
        self
    }

    fn configured<O, I>(options: I) -> Self
    where
        O: Configure<Self>,
        I: IntoIterator<Item = O>,
    {
        let mut server = Self::default();
        for option in options {
            option.apply(&mut server);
        }
        server.log_configured();
        server
    }

    fn log_configured(&self) {
        debug!(
            address = %self.address,
            max_connections = self.max_connections,
            "server configured"
        );
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Addressable for Server {
    fn set_address(&mut self, address: String) {
        self.address = address;
    }

    fn address(&self) -> &str {
        &self.address
    }
}

impl Connectable for Server {
    fn set_max_connections(&mut self, max_connections: i64) {
        self.max_connections = max_connections;
    }

    fn max_connections(&self) -> i64 {
        self.max_connections
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (max connections: {})", self.address, self.max_connections)
    }
}
