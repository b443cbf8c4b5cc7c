//! Sending queries to a name server.
//!
//! A [`Client`] sends one query at a time to a single name server and waits
//! for the response. It is created from a [`Config`] that selects the
//! server, the transport, the timeout for each attempt, and how often an
//! attempt is repeated when it times out or fails with an I/O error.
//!
//! Over a datagram transport, the client uses a fresh UDP socket connected
//! to the server for every attempt. Datagrams that can’t be decoded or
//! aren’t a response to the query are ignored until the timeout expires. Over a stream transport, a
//! new TCP connection is opened for every attempt and closed once the
//! response has been read.
//!
//! ```no_run
//! use dnswire::base::iana::Rtype;
//! use dnswire::net::client::{Client, Config};
//!
//! # async fn f() -> Result<(), dnswire::net::client::Error> {
//! let client = Client::new(Config::new());
//! let answer = client.query("example.com", Rtype::A).await?;
//! println!("{}", answer.display_dig());
//! # Ok(())
//! # }
//! ```

pub use self::config::Config;
pub use self::error::Error;
pub use self::query::Client;

mod config;
mod error;
mod query;
