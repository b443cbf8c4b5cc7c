//! Domain names.
//!
//! This module provides the owned types [`Label`] and [`Name`] for
//! absolute domain names. A name is parsed from a message with
//! [`Name::parse`], which resolves compression pointers, and composed
//! back without compression via [`Name::compose`].
//!
//! Host names entered by users can be checked with [`check_hostname`]
//! before they are turned into names.

pub use self::dname::{Name, NameError};
pub use self::hostname::{check_hostname, HostnameError, HostnameReason};
pub use self::label::{Label, LongLabelError};

mod dname;
mod hostname;
mod label;
