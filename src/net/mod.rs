//! Sending and receiving DNS messages.
//!
//! This module provides the [`client`] sub-module for sending a query to a
//! name server and receiving the response to it.
#![cfg(feature = "net")]
#![cfg_attr(docsrs, doc(cfg(feature = "net")))]

pub mod client;
