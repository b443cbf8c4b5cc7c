//! A DNS wire-format codec for Rust.
//!
//! This crate decodes DNS messages received from a peer into owned values
//! and encodes such values back into the wire format. It resolves name
//! compression when decoding, is careful never to read beyond the end of
//! the message, and terminates on any chain of compression pointers, no
//! matter how it was crafted. On top of the codec, there is a small client
//! for sending a query to a name server over UDP or TCP and a command line
//! tool built from it.
//!
//! # Modules
//!
//! A set of modules providing fundamental types and functionality is always
//! enabled:
//!
//! * [base] contains the types for DNS messages and their parts as well as
//!   the functions for framing messages on stream transports,
//! * [rdata] contains the record data types, and
//! * [utils] contains some helpers.
//!
//! In addition, there are modules behind feature flags:
//!
#![cfg_attr(feature = "net", doc = "* [net]:")]
#![cfg_attr(not(feature = "net"), doc = "* net:")]
//!   An asynchronous client for a single name server based on the
//!   [Tokio](https://tokio.rs/) async runtime.
#![cfg_attr(feature = "cli", doc = "* [logging]:")]
#![cfg_attr(not(feature = "cli"), doc = "* logging:")]
//!   Setting up a `tracing` subscriber for the command line tool.
//!
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `rand`: enables a number of methods that rely on a random number
//!   generator being available in the system, such as creating a query
//!   with a random ID. This feature is enabled by default.
//! * `net`: enables the `net` module and the `rand` feature.
//! * `cli`: builds the `dnsq` command line tool. This enables the `net`
//!   feature and the `logging` module.

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
#[cfg(feature = "cli")]
pub mod logging;
pub mod net;
pub mod rdata;
pub mod utils;
