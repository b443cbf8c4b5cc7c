//! Resource data implementations.
//!
//! This module contains the record data types the codec understands: A and
//! NS from [RFC 1035] and AAAA from [RFC 3596]. Data of any other record
//! type is kept as a [`Generic`] octets sequence tagged with its record
//! type, so that it can be echoed back unchanged.
//!
//! The types are named identically to the [`Rtype`] constant they
//! implement. All types are also re-exported at the top level here.
//!
//! The enum [`RecordData`] brings all of them together. It is what
//! [`Record`][crate::base::Record] carries as its data.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

pub use self::aaaa::Aaaa;
pub use self::generic::{Generic, GenericError, GenericFromStrError};
pub use self::rfc1035::{Ns, A};

pub mod rfc1035;

mod aaaa;
mod generic;

use crate::base::iana::Rtype;
use crate::base::wire::{ParseError, Section};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ RecordData ----------------------------------------------------

/// The data of a resource record.
///
/// The variant is chosen by the record type when parsing. The A and AAAA
/// variants are only used if the record data has the right length, data
/// of these types with any other length ends up in the
/// [`Generic`][RecordData::Generic] variant.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum RecordData {
    /// An IPv4 host address.
    A(A),

    /// An IPv6 host address.
    Aaaa(Aaaa),

    /// An authoritative name server.
    Ns(Ns),

    /// Data of any other type, kept as is.
    Generic(Generic),
}

impl RecordData {
    /// Returns the record type of the data.
    pub fn rtype(&self) -> Rtype {
        match *self {
            RecordData::A(_) => A::RTYPE,
            RecordData::Aaaa(_) => Aaaa::RTYPE,
            RecordData::Ns(_) => Ns::RTYPE,
            RecordData::Generic(ref data) => data.rtype(),
        }
    }

    /// Returns the length of the wire format of the data.
    ///
    /// This is the value of the RDLENGTH field of the record and is always
    /// derived from the data itself.
    pub fn rdlen(&self) -> usize {
        match *self {
            RecordData::A(_) => usize::from(A::RDLEN),
            RecordData::Aaaa(_) => usize::from(Aaaa::RDLEN),
            RecordData::Ns(ref data) => usize::from(data.rdlen()),
            RecordData::Generic(ref data) => data.data().len(),
        }
    }

    /// Parses record data of the given type and length.
    ///
    /// The parser has to cover the whole message and be positioned at the
    /// start of the record data. The caller has to make sure that at least
    /// `rdlen` octets are left. On success, the parser is positioned right
    /// after the record data.
    pub fn parse(
        rtype: Rtype,
        rdlen: u16,
        parser: &mut Parser<'_, [u8]>,
    ) -> Result<Self, ParseError> {
        match rtype {
            Rtype::A if rdlen == A::RDLEN => A::parse(parser).map(Into::into),
            Rtype::AAAA if rdlen == Aaaa::RDLEN => {
                Aaaa::parse(parser).map(Into::into)
            }
            Rtype::NS => Ns::parse(parser, rdlen).map(Into::into),
            _ => {
                let mut data = vec![0; usize::from(rdlen)];
                Section::Record.read(|| parser.parse_buf(&mut data))?;
                Ok(RecordData::Generic(Generic::from_data_unchecked(
                    rtype, data,
                )))
            }
        }
    }

    /// Appends the wire format of the data to `target`.
    ///
    /// This doesn’t include the RDLENGTH field.
    pub fn compose_rdata<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        match *self {
            RecordData::A(ref data) => data.compose_rdata(target),
            RecordData::Aaaa(ref data) => data.compose_rdata(target),
            RecordData::Ns(ref data) => data.compose_rdata(target),
            RecordData::Generic(ref data) => {
                target.append_slice(data.data())
            }
        }
    }
}

//--- From

impl From<A> for RecordData {
    fn from(data: A) -> Self {
        RecordData::A(data)
    }
}

impl From<Aaaa> for RecordData {
    fn from(data: Aaaa) -> Self {
        RecordData::Aaaa(data)
    }
}

impl From<Ns> for RecordData {
    fn from(data: Ns) -> Self {
        RecordData::Ns(data)
    }
}

impl From<Generic> for RecordData {
    fn from(data: Generic) -> Self {
        RecordData::Generic(data)
    }
}

//--- Display

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecordData::A(ref data) => fmt::Display::fmt(data, f),
            RecordData::Aaaa(ref data) => fmt::Display::fmt(data, f),
            RecordData::Ns(ref data) => fmt::Display::fmt(data, f),
            RecordData::Generic(ref data) => fmt::Display::fmt(data, f),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::name::Name;
    use core::str::FromStr;

    fn parse(rtype: Rtype, octets: &[u8]) -> Result<RecordData, ParseError> {
        let mut parser = Parser::from_ref(octets);
        let res = RecordData::parse(rtype, octets.len() as u16, &mut parser);
        if res.is_ok() {
            assert_eq!(parser.remaining(), 0);
        }
        res
    }

    #[test]
    fn dispatch() {
        assert_eq!(
            parse(Rtype::A, &[93, 184, 216, 34]),
            Ok(A::from_octets(93, 184, 216, 34).into())
        );
        assert_eq!(
            parse(
                Rtype::AAAA,
                &[0x20, 1, 0xd, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]
            ),
            Ok(Aaaa::from_str("2001:db8::1").unwrap().into())
        );
        assert_eq!(
            parse(Rtype::NS, b"\x02ns\x07example\0"),
            Ok(Ns::new(Name::from_str("ns.example").unwrap()).into())
        );
        assert_eq!(
            parse(Rtype::MX, b"\x00\x0a\0"),
            Ok(Generic::from_octets(Rtype::MX, b"\x00\x0a\0".to_vec())
                .unwrap()
                .into())
        );
    }

    #[test]
    fn wrong_length_is_generic() {
        let data = parse(Rtype::A, &[1, 2, 3]).unwrap();
        assert_eq!(data.rtype(), Rtype::A);
        assert_eq!(data.rdlen(), 3);
        assert!(matches!(data, RecordData::Generic(_)));
        assert_eq!(data.to_string(), "\\# 3 010203");

        let data = parse(Rtype::AAAA, &[0; 4]).unwrap();
        assert!(matches!(data, RecordData::Generic(_)));
    }

    #[test]
    fn compose() {
        let data = RecordData::from(Ns::new(Name::from_str("a.b").unwrap()));
        let mut buf = Vec::new();
        data.compose_rdata(&mut buf).unwrap();
        assert_eq!(buf, b"\x01a\x01b\0");
        assert_eq!(data.rdlen(), buf.len());
    }
}
