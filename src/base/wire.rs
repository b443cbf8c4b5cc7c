//! Creating and consuming data in wire format.
//!
//! Decoding happens through octseq’s [`Parser`], a cursor over the octets
//! of the complete message. Because compression pointers are offsets from
//! the start of the message, the parser always wraps the whole message
//! even when a value only covers a small part of it.
//!
//! Encoding happens into any [`OctetsBuilder`]. Nothing in this crate ever
//! emits compression pointers, so the target doesn’t need to remember
//! where earlier names were placed.

use core::convert::Infallible;
use core::fmt;
use octseq::builder::{OctetsBuilder, ShortBuf};
use octseq::parse::{Parser, ShortInput};

//------------ Compose -------------------------------------------------------

/// A type that knows how to append itself in wire format to a target.
pub trait Compose {
    /// The length in octets of the wire format if it is fixed.
    const COMPOSE_LEN: u16 = 0;

    /// Appends the wire format of the value to the target.
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError>;
}

impl<'a, T: Compose + ?Sized> Compose for &'a T {
    const COMPOSE_LEN: u16 = T::COMPOSE_LEN;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        (*self).compose(target)
    }
}

impl Compose for u8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&[*self])
    }
}

macro_rules! compose_to_be_bytes {
    ( $type:ident ) => {
        impl Compose for $type {
            const COMPOSE_LEN: u16 = ($type::BITS >> 3) as u16;

            fn compose<Target: OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target,
            ) -> Result<(), Target::AppendError> {
                target.append_slice(&self.to_be_bytes())
            }
        }
    };
}

compose_to_be_bytes!(u16);
compose_to_be_bytes!(u32);
compose_to_be_bytes!(i32);

//------------ Parse ---------------------------------------------------------

/// A type that can extract a value from a parser.
///
/// If parsing fails, the parser’s position is undefined. Callers that want
/// to continue after an error have to remember the position beforehand and
/// seek back to it.
pub trait Parse<'a>: Sized {
    /// Extracts a value from the beginning of `parser`.
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError>;
}

impl<'a> Parse<'a> for u8 {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        parser.parse_u8().map_err(Into::into)
    }
}

impl<'a> Parse<'a> for u16 {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        parser.parse_u16_be().map_err(Into::into)
    }
}

impl<'a> Parse<'a> for u32 {
    fn parse(parser: &mut Parser<'a, [u8]>) -> Result<Self, ParseError> {
        parser.parse_u32_be().map_err(Into::into)
    }
}

//------------ Section -------------------------------------------------------

/// The part of a message a parse error happened in.
///
/// Running out of input means something different depending on where it
/// happens, so fixed-size reads are tagged with the section they belong to
/// and the resulting [`ParseError`] names the right kind of truncation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Section {
    Header,
    Question,
    Record,
}

impl Section {
    /// Returns the truncation error for this section.
    pub(crate) fn truncated(self) -> ParseError {
        match self {
            Section::Header => ParseError::TruncatedHeader,
            Section::Question => ParseError::TruncatedQuestion,
            Section::Record => ParseError::TruncatedRecord,
        }
    }

    /// Runs `op` turning a short input into this section’s truncation.
    pub(crate) fn read<T>(
        self,
        op: impl FnOnce() -> Result<T, ShortInput>,
    ) -> Result<T, ParseError> {
        op().map_err(|_| self.truncated())
    }
}

//============ Error Types ===================================================

//------------ ParseError ----------------------------------------------------

/// An error happened while decoding a message.
///
/// All of these are terminal for the message being decoded. No partially
/// decoded message is ever handed out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A label had an invalid length pattern or ran past the end of the
    /// message.
    MalformedLabel,

    /// A compression pointer pointed past the end of the message or not
    /// strictly backwards.
    InvalidCompressionPointer,

    /// A domain name was longer than 255 octets.
    LongName,

    /// The message was too short for its header section.
    TruncatedHeader,

    /// The message ended in the middle of a question.
    TruncatedQuestion,

    /// The message ended in the middle of a resource record.
    TruncatedRecord,

    /// The record data did not have the length the record type requires.
    RDataLengthMismatch,

    /// The length prefix of a stream message did not match its payload.
    FrameLengthMismatch,
}

//--- From

impl From<ShortInput> for ParseError {
    fn from(_: ShortInput) -> Self {
        ParseError::MalformedLabel
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ParseError::MalformedLabel => "malformed label",
            ParseError::InvalidCompressionPointer => {
                "invalid compression pointer"
            }
            ParseError::LongName => "long domain name",
            ParseError::TruncatedHeader => "truncated header section",
            ParseError::TruncatedQuestion => "truncated question",
            ParseError::TruncatedRecord => "truncated resource record",
            ParseError::RDataLengthMismatch => "record data length mismatch",
            ParseError::FrameLengthMismatch => "frame length mismatch",
        })
    }
}

impl std::error::Error for ParseError {}

//------------ ComposeError --------------------------------------------------

/// An error happened while encoding a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposeError {
    /// A label was longer than 63 octets.
    LongLabel,

    /// A domain name was longer than 255 octets.
    LongName,

    /// Record data was longer than 65535 octets.
    LongRecordData,

    /// A section had more than 65535 entries.
    LongSection,

    /// A message was too long for a stream length prefix.
    LongMessage,

    /// The target ran out of space.
    ShortBuf,
}

impl From<Infallible> for ComposeError {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}

impl From<ShortBuf> for ComposeError {
    fn from(_: ShortBuf) -> Self {
        ComposeError::ShortBuf
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ComposeError::LongLabel => "long label",
            ComposeError::LongName => "long domain name",
            ComposeError::LongRecordData => "long record data",
            ComposeError::LongSection => "too many entries in section",
            ComposeError::LongMessage => "message too long for framing",
            ComposeError::ShortBuf => "buffer size exceeded",
        })
    }
}

impl std::error::Error for ComposeError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::builder::infallible;
    use std::vec::Vec;

    #[test]
    fn compose_be() {
        let mut buf = Vec::new();
        infallible(0x1234u16.compose(&mut buf));
        infallible(0xdead_beefu32.compose(&mut buf));
        infallible((-2i32).compose(&mut buf));
        assert_eq!(
            buf,
            b"\x12\x34\xde\xad\xbe\xef\xff\xff\xff\xfe".as_ref()
        );
        assert_eq!(u16::COMPOSE_LEN, 2);
        assert_eq!(u32::COMPOSE_LEN, 4);
    }

    #[test]
    fn parse_be() {
        let octets = b"\x12\x34\xde\xad\xbe\xef\x07";
        let mut parser = Parser::from_ref(&octets[..]);
        assert_eq!(u16::parse(&mut parser), Ok(0x1234));
        assert_eq!(u32::parse(&mut parser), Ok(0xdead_beef));
        assert_eq!(u8::parse(&mut parser), Ok(7));
        assert!(u8::parse(&mut parser).is_err());
    }

    #[test]
    fn section_truncation() {
        let octets = b"\x01";
        let mut parser = Parser::from_ref(&octets[..]);
        assert_eq!(
            Section::Question.read(|| parser.parse_u16_be()),
            Err(ParseError::TruncatedQuestion)
        );
        assert_eq!(
            Section::Record.read(|| parser.parse_u8()),
            Ok(1)
        );
    }
}
