//! Sends a single query to a name server and prints the response.
//!
//! The response is printed in the format of the `dig` tool. Logging goes
//! to standard error and is controlled by `--log-level` or `RUST_LOG`.

use clap::{Parser, ValueEnum};
use dnswire::base::iana::Rtype;
use dnswire::base::Transport;
use dnswire::logging::init_logging;
use dnswire::net::client::{Client, Config};
use std::net::SocketAddr;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "dnsq")]
#[command(version)]
#[command(about = "Query a DNS name server and print the response")]
struct Cli {
    /// The domain name to query for
    domain: String,

    /// The record type to query for
    #[arg(short = 't', long = "type", default_value = "A")]
    qtype: Rtype,

    /// Address and port of the name server
    #[arg(short = 's', long, value_name = "ADDR")]
    server: Option<SocketAddr>,

    /// Use TCP instead of UDP
    #[arg(long)]
    tcp: bool,

    /// Seconds to wait for a response in each attempt
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Number of retries after a failed attempt
    #[arg(long)]
    retries: Option<u8>,

    /// Clear the RD flag in the query
    #[arg(long)]
    no_recurse: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::new();
        if let Some(server) = self.server {
            config.set_server(server);
        }
        if self.tcp {
            config.set_transport(Transport::Stream);
        }
        if let Some(secs) = self.timeout {
            config.set_timeout(Duration::from_secs(secs));
        }
        if let Some(retries) = self.retries {
            config.set_retries(retries);
        }
        config.set_recursion_desired(!self.no_recurse);
        config
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.into());

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("failed to start runtime: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let client = Client::new(cli.config());
    info!(
        domain = %cli.domain,
        qtype = %cli.qtype,
        server = %client.config().server(),
        "querying"
    );
    match runtime.block_on(client.query(&cli.domain, cli.qtype)) {
        Ok(answer) => {
            println!("{}", answer.display_dig());
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("query for {} failed: {}", cli.domain, err);
            ExitCode::FAILURE
        }
    }
}
