//! Record data for the NS record.
//!
//! This is a private module. Its content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::wire::ParseError;
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Ns -----------------------------------------------------------

/// NS record data.
///
/// NS records specify hosts that are authoritative for a class and domain.
/// The record data consists of a single domain name which may be
/// compressed in a message.
///
/// The NS record type is defined in [RFC 1035, section 3.3.11][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.11
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Ns {
    nsdname: Name,
}

impl Ns {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::NS;

    /// Creates new NS record data from the host name.
    #[must_use]
    pub fn new(nsdname: Name) -> Self {
        Ns { nsdname }
    }

    /// Returns the host name.
    pub fn nsdname(&self) -> &Name {
        &self.nsdname
    }

    /// Converts the record data into the host name.
    pub fn into_nsdname(self) -> Name {
        self.nsdname
    }

    /// Parses the record data.
    ///
    /// The parser has to cover the whole message so compression pointers
    /// in the name can be followed. The number of octets taken from the
    /// parser has to be exactly `rdlen`.
    pub fn parse(
        parser: &mut Parser<'_, [u8]>,
        rdlen: u16,
    ) -> Result<Self, ParseError> {
        let start = parser.pos();
        let nsdname = Name::parse(parser)?;
        if parser.pos() - start != usize::from(rdlen) {
            return Err(ParseError::RDataLengthMismatch);
        }
        Ok(Self::new(nsdname))
    }

    /// Returns the length of the uncompressed record data.
    pub fn rdlen(&self) -> u16 {
        self.nsdname.compose_len()
    }

    /// Appends the record data to `target` without compression.
    pub fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.nsdname.compose(target)
    }
}

//--- From

impl From<Name> for Ns {
    fn from(nsdname: Name) -> Self {
        Self::new(nsdname)
    }
}

//--- Display

impl fmt::Display for Ns {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.nsdname, f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn parse_compressed() {
        // "example.com" at 0, then NS data "ns1" + pointer, rdlen 6.
        let octets = b"\x07example\x03com\0\x03ns1\xc0\x00";
        let mut parser = Parser::from_ref(&octets[..]);
        parser.advance(13).unwrap();
        let ns = Ns::parse(&mut parser, 6).unwrap();
        assert_eq!(ns.nsdname(), &Name::from_str("ns1.example.com").unwrap());
        assert_eq!(ns.rdlen(), 17);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn parse_mismatch() {
        let octets = b"\x03ns1\0";
        let mut parser = Parser::from_ref(&octets[..]);
        assert_eq!(
            Ns::parse(&mut parser, 4),
            Err(ParseError::RDataLengthMismatch)
        );
    }

    #[test]
    fn display() {
        let ns = Ns::new(Name::from_str("a.example").unwrap());
        assert_eq!(ns.to_string(), "a.example");
    }
}
