//! Various utility modules.

pub mod base16;

#[cfg(feature = "net")]
pub(crate) mod config;
