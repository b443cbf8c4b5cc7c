//! Configuration of a client.

use crate::base::Transport;
use crate::utils::config::DefMinMax;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

//------------ Configuration Constants ----------------------------------------

/// The name server used by default: a.root-servers.net.
const DEF_SERVER: (Ipv4Addr, u16) = (Ipv4Addr::new(198, 41, 0, 4), 53);

/// How long to wait for a response in each attempt.
const TIMEOUT: DefMinMax<Duration> = DefMinMax::new(
    Duration::from_secs(5),
    Duration::from_millis(1),
    Duration::from_secs(60),
);

/// How many times an attempt is repeated after the first one failed.
const RETRIES: DefMinMax<u8> = DefMinMax::new(3, 0, 10);

//------------ Config ---------------------------------------------------------

/// Configuration for a [`Client`][super::Client].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The address of the name server.
    server: SocketAddr,

    /// The transport to use.
    transport: Transport,

    /// Maximum time to wait for a response in each attempt.
    timeout: Duration,

    /// Whether to set the RD flag in queries.
    recursion_desired: bool,

    /// Number of retries after the first attempt.
    retries: u8,
}

impl Config {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the address of the name server.
    pub fn server(&self) -> SocketAddr {
        self.server
    }

    /// Sets the address of the name server.
    pub fn set_server(&mut self, server: SocketAddr) {
        self.server = server
    }

    /// Returns the transport.
    pub fn transport(&self) -> Transport {
        self.transport
    }

    /// Sets the transport.
    pub fn set_transport(&mut self, transport: Transport) {
        self.transport = transport
    }

    /// Returns the timeout for each attempt.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sets the timeout for each attempt.
    ///
    /// The value is limited to the range from one millisecond to sixty
    /// seconds. The default is five seconds.
    pub fn set_timeout(&mut self, value: Duration) {
        self.timeout = TIMEOUT.limit(value)
    }

    /// Returns whether queries ask for recursion.
    pub fn recursion_desired(&self) -> bool {
        self.recursion_desired
    }

    /// Sets whether queries ask for recursion.
    pub fn set_recursion_desired(&mut self, value: bool) {
        self.recursion_desired = value
    }

    /// Returns the number of retries.
    pub fn retries(&self) -> u8 {
        self.retries
    }

    /// Sets the number of retries.
    ///
    /// This is the number of times an attempt is repeated after it timed
    /// out or failed with an I/O error. It is limited to at most ten. The
    /// default is three.
    pub fn set_retries(&mut self, value: u8) {
        self.retries = RETRIES.limit(value)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: SocketAddr::from(DEF_SERVER),
            transport: Transport::Datagram,
            timeout: TIMEOUT.default(),
            recursion_desired: true,
            retries: RETRIES.default(),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::new();
        assert_eq!(config.server(), "198.41.0.4:53".parse().unwrap());
        assert_eq!(config.transport(), Transport::Datagram);
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.recursion_desired());
        assert_eq!(config.retries(), 3);
    }

    #[test]
    fn limits() {
        let mut config = Config::new();
        config.set_timeout(Duration::ZERO);
        assert_eq!(config.timeout(), Duration::from_millis(1));
        config.set_timeout(Duration::from_secs(600));
        assert_eq!(config.timeout(), Duration::from_secs(60));
        config.set_retries(0);
        assert_eq!(config.retries(), 0);
        config.set_retries(42);
        assert_eq!(config.retries(), 10);
    }
}
