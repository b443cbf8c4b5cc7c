//! Setting up logging for the command line tool.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by the client.
///
/// Use the RUST_LOG environment variable to override the default level.
///
/// E.g. To enable debug level logging:
///   RUST_LOG=DEBUG
///
/// Or to log only the events of the client:
///   RUST_LOG=dnswire::net::client=TRACE
pub fn init_logging(default_level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .ok();
}
