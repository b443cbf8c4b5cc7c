//! Record data from [RFC 3596]: AAAA records.
//!
//! This RFC defines the Aaaa record type.
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use crate::base::iana::Rtype;
use crate::base::wire::{ParseError, Section};
use core::fmt;
use core::str::FromStr;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;
use std::net::Ipv6Addr;

//------------ Aaaa ---------------------------------------------------------

/// Aaaa record data.
///
/// Aaaa records convey the IPv6 address of a host. The wire format is the
/// 128 bit address in network byte order. The presentation format is the
/// usual textual form of an IPv6 address as recommended by [RFC 5952].
///
/// [RFC 5952]: https://tools.ietf.org/html/rfc5952
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Aaaa {
    addr: Ipv6Addr,
}

impl Aaaa {
    /// The rtype of this record data type.
    pub const RTYPE: Rtype = Rtype::AAAA;

    /// The length of the record data in octets.
    pub const RDLEN: u16 = 16;
}

impl Aaaa {
    /// Creates a new AAAA record data from an IPv6 address.
    #[must_use]
    pub fn new(addr: Ipv6Addr) -> Aaaa {
        Aaaa { addr }
    }

    /// Returns the IPv6 address.
    #[must_use]
    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }

    /// Sets the IPv6 address.
    pub fn set_addr(&mut self, addr: Ipv6Addr) {
        self.addr = addr
    }

    /// Parses the record data.
    ///
    /// The caller has to make sure that there are sixteen octets of record
    /// data.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, ParseError> {
        let mut octets = [0u8; 16];
        Section::Record.read(|| parser.parse_buf(&mut octets))?;
        Ok(Self::new(Ipv6Addr::from(octets)))
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

impl From<Ipv6Addr> for Aaaa {
    fn from(addr: Ipv6Addr) -> Self {
        Self::new(addr)
    }
}

impl From<Aaaa> for Ipv6Addr {
    fn from(data: Aaaa) -> Self {
        data.addr
    }
}

impl FromStr for Aaaa {
    type Err = <Ipv6Addr as core::str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv6Addr::from_str(s).map(Aaaa::new)
    }
}

//--- Display

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.addr, f)
    }
}

//============ Testing ======================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::builder::infallible;

    #[test]
    fn compose_parse() {
        let rdata = Aaaa::from_str("2001:db9::12:13").unwrap();
        let mut buf = Vec::new();
        infallible(rdata.compose_rdata(&mut buf));
        assert_eq!(buf.len(), usize::from(Aaaa::RDLEN));
        let mut parser = Parser::from_ref(buf.as_slice());
        assert_eq!(Aaaa::parse(&mut parser), Ok(rdata));
    }

    #[test]
    fn display() {
        // Longest run of zeros is compressed, the first one on a tie.
        let rdata = Aaaa::new(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 1, 0, 0, 1));
        assert_eq!(rdata.to_string(), "2001:db8::1:0:0:1");
        let rdata = Aaaa::new(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1));
        assert_eq!(rdata.to_string(), "2001:db8::1");
    }
}
