//! A single question in a DNS message.
//!
//! This module defines the type `Question` which represents an entry in
//! the question section of a DNS message.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{Compose, ParseError, Section};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// In DNS, a question describes what is requested in a query. It consists
/// of three elements: a domain name, a record type, and a class. This type
/// represents such a question.
///
/// In wire format, the name is followed by the type and the class, both
/// as 16 bit integers in network byte order.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Question {
    /// The domain name of the question.
    qname: Name,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the question.
    qclass: Class,
}

/// # Creation and Conversion
///
impl Question {
    /// Creates a new question from its three components.
    #[must_use]
    pub fn new(qname: Name, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname,
            qtype,
            qclass,
        }
    }

    /// Creates a new question from a name and record type, assuming class IN.
    #[must_use]
    pub fn new_in(qname: Name, qtype: Rtype) -> Self {
        Self::new(qname, qtype, Class::IN)
    }

    /// Converts the question into the qname.
    pub fn into_qname(self) -> Name {
        self.qname
    }
}

/// # Field Access
///
impl Question {
    /// Returns a reference to the domain name in the question.
    pub fn qname(&self) -> &Name {
        &self.qname
    }

    /// Returns the record type of the question.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    pub fn qclass(&self) -> Class {
        self.qclass
    }
}

/// # Parsing and Composing
///
impl Question {
    /// Parses a question from the current position of `parser`.
    ///
    /// Fails with [`ParseError::TruncatedQuestion`] if there is nothing
    /// left to parse or if the name isn’t followed by four octets for type
    /// and class.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, ParseError> {
        if parser.remaining() == 0 {
            return Err(ParseError::TruncatedQuestion);
        }
        let qname = Name::parse(parser)?;
        let qtype = Section::Question.read(|| parser.parse_u16_be())?;
        let qclass = Section::Question.read(|| parser.parse_u16_be())?;
        Ok(Question::new(
            qname,
            Rtype::from_int(qtype),
            Class::from_int(qclass),
        ))
    }

    /// Returns the length of the wire format of the question.
    pub fn compose_len(&self) -> u16 {
        self.qname.compose_len() + Rtype::COMPOSE_LEN + Class::COMPOSE_LEN
    }
}

impl Compose for Question {
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.qname.compose(target)?;
        self.qtype.compose(target)?;
        self.qclass.compose(target)
    }
}

//--- From

impl From<(Name, Rtype, Class)> for Question {
    fn from((name, rtype, class): (Name, Rtype, Class)) -> Self {
        Question::new(name, rtype, class)
    }
}

impl From<(Name, Rtype)> for Question {
    fn from((name, rtype): (Name, Rtype)) -> Self {
        Question::new_in(name, rtype)
    }
}

//--- Display

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.qname, self.qtype, self.qclass)
    }
}

//============ Testing ======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;
    use octseq::builder::infallible;

    fn question() -> Question {
        Question::new_in(Name::from_str("example.com").unwrap(), Rtype::AAAA)
    }

    #[test]
    fn compose() {
        let mut buf = Vec::new();
        infallible(question().compose(&mut buf));
        assert_eq!(buf, b"\x07example\x03com\0\x00\x1c\x00\x01");
        assert_eq!(usize::from(question().compose_len()), buf.len());
    }

    #[test]
    fn parse() {
        let octets = b"\x07example\x03com\0\x00\x1c\x00\x01";
        let mut parser = Parser::from_ref(&octets[..]);
        assert_eq!(Question::parse(&mut parser), Ok(question()));
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn parse_truncated() {
        let octets = b"\x07example\x03com\0\x00\x1c\x00";
        let mut parser = Parser::from_ref(&octets[..]);
        assert_eq!(
            Question::parse(&mut parser),
            Err(ParseError::TruncatedQuestion)
        );

        let mut parser = Parser::from_ref(&octets[..0]);
        assert_eq!(
            Question::parse(&mut parser),
            Err(ParseError::TruncatedQuestion)
        );
    }

    #[test]
    fn display() {
        assert_eq!(question().to_string(), "example.com AAAA IN");
    }
}
