//! Record data for the A record.
//!
//! This is a private module. Its content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::wire::{ParseError, Section};
use core::fmt;
use core::str::FromStr;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;
use std::net::Ipv4Addr;

//------------ A ------------------------------------------------------------

/// A record data.
///
/// A records convey the IPv4 address of a host. The wire format is the 32
/// bit IPv4 address in network byte order. The representation file format
/// is the usual dotted notation.
///
/// The A record type is defined in [RFC 1035, section 3.4.1][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.4.1
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct A {
    addr: Ipv4Addr,
}

impl A {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::A;

    /// The length of the record data in octets.
    pub const RDLEN: u16 = 4;
}

impl A {
    /// Creates a new A record data from an IPv4 address.
    #[must_use]
    pub const fn new(addr: Ipv4Addr) -> A {
        A { addr }
    }

    /// Creates a new A record from the IPv4 address components.
    #[must_use]
    pub const fn from_octets(a: u8, b: u8, c: u8, d: u8) -> A {
        A::new(Ipv4Addr::new(a, b, c, d))
    }

    #[must_use]
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn set_addr(&mut self, addr: Ipv4Addr) {
        self.addr = addr
    }

    /// Parses the record data.
    ///
    /// The caller has to make sure that there are four octets of record
    /// data.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, ParseError> {
        let mut octets = [0u8; 4];
        Section::Record.read(|| parser.parse_buf(&mut octets))?;
        Ok(Self::new(Ipv4Addr::from(octets)))
    }

    /// Appends the record data to `target`.
    pub fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.addr.octets())
    }
}

//--- From and FromStr

impl From<Ipv4Addr> for A {
    fn from(addr: Ipv4Addr) -> Self {
        Self::new(addr)
    }
}

impl From<A> for Ipv4Addr {
    fn from(a: A) -> Self {
        a.addr
    }
}

impl FromStr for A {
    type Err = <Ipv4Addr as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Addr::from_str(s).map(A::new)
    }
}

//--- Display

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.addr, f)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::builder::infallible;

    #[test]
    fn parse() {
        let octets = [93, 184, 216, 34];
        let mut parser = Parser::from_ref(&octets[..]);
        let rdata = A::parse(&mut parser).unwrap();
        assert_eq!(rdata, A::from_octets(93, 184, 216, 34));
        assert_eq!(rdata.to_string(), "93.184.216.34");

        let mut parser = Parser::from_ref(&octets[..3]);
        assert_eq!(A::parse(&mut parser), Err(ParseError::TruncatedRecord));
    }

    #[test]
    fn compose() {
        let mut buf = Vec::new();
        infallible(A::from_str("192.0.2.1").unwrap().compose_rdata(&mut buf));
        assert_eq!(buf, [192, 0, 2, 1]);
    }
}
