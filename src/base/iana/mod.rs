//! Codes from the IANA DNS parameter registries.
//!
//! Each registry the codec needs gets a newtype over the integer used on
//! the wire. Known values are available as associated constants such as
//! [`Rtype::AAAA`]. Any other integer is just as valid a value, so a code
//! unknown to this crate passes through decoding and encoding unchanged
//! and prints in the generic notation, e.g., `TYPE65` or `CLASS77`.

pub use self::class::Class;
pub use self::opcode::Opcode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod opcode;
pub mod rcode;
pub mod rtype;
