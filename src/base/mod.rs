//! Basics.
//!
//! This module provides types for working with DNS messages in their wire
//! format. Crucially, it provides means to decode messages received from a
//! peer into owned values and to encode such values back into a message.
//!
//!
//! ## Parsing and Composing Messages
//!
//! In order to easily distinguish the process of creating and disecting
//! wire-format messages from other forms of representation conversion such
//! as converting to and from strings, we use the term *parsing* for
//! extracting data from a wire-format representation and *composing* for
//! producing such a representation.
//!
//! Parsing always happens on a buffer holding a complete DNS message since
//! compressed domain names reference other parts of the message. The octets
//! are never trusted: every length and every compression pointer is checked
//! before it is used and any problem is reported as a [`ParseError`].
//! Composing never produces compressed names.
//!
//! The types [`Message`] and [`MessageBuilder`] are there to make parsing
//! and constructing DNS messages easy. [`Message::decode`] turns the octets
//! of a message into a value with all four sections parsed, while a
//! [`MessageBuilder`] collects the header and the section entries
//! step-by-step. [`frame`] and [`unframe`] add and remove the length prefix
//! used on stream transports.
//!
//!
//! # Types for DNS Data
//!
//! The module contains a number of types for DNS data. Because they often
//! come with a number of support types, they are arranged in submodules:
//!
//! * [header] for the header of DNS messages,
//! * [iana] for the registries of type codes and their mnemonics,
//! * [name] for domain names,
//! * [question] for questions,
//! * [record] for DNS resource records, and
//! * [wire] for the basics of parsing and composing.
//!
//! The record data of the individual record types lives in the top-level
//! [rdata][crate::rdata] module.

//--- Re-exports

pub use self::frame::{frame, unframe, Transport};
pub use self::header::{Header, HeaderCounts, HeaderSection};
pub use self::iana::{Class, Opcode, Rcode, Rtype};
pub use self::message::Message;
pub use self::message_builder::MessageBuilder;
pub use self::name::{check_hostname, Label, Name};
pub use self::question::Question;
pub use self::record::{Record, Ttl};
pub use self::wire::{ComposeError, ParseError};

//--- Modules

pub mod header;
pub mod iana;
pub mod message;
pub mod message_builder;
pub mod name;
pub mod question;
pub mod record;
pub mod wire;

mod dig_printer;
mod frame;
