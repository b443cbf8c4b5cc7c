//! Resource Records.
//!
//! This module defines types related to DNS resource records. The most
//! complete one is [`Record`] which contains a complete record for a
//! certain record type. [`Ttl`] wraps the raw time-to-live field.
//!
//! A resource record consists of an owner name, the record type, the class,
//! the TTL, and the record data. The type is not stored separately but
//! taken from the [`RecordData`] and so is the RDLENGTH field when the
//! record is composed.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{Compose, ComposeError, ParseError, Section};
use crate::rdata::RecordData;
use core::fmt;
use core::time::Duration;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// All information available through the DNS is stored in resource records.
/// They have a three part key of a domain name, resource record type, and
/// class. Data is arranged in a tree which is navigated using the domain
/// name. Each node in the tree carries a label, starting with the root
/// label as the top-most node. The tree is traversed by stepping through the
/// name from right to left, finding a child node carring the label of each
/// step. The domain name resulting from this traversal is part of the
/// record itself. It is called the *owner* of the record.
///
/// The record type describes the kind of data the record holds, such as IP
/// addresses. The class, finally, describes which sort of network the
/// information is for.
///
/// Records also have a *time to live* value. See [`Ttl`] for how values
/// that don’t fit the specified range are dealt with.
///
/// In wire format, the record starts with the owner followed by the type,
/// class, and TTL. Then follows a 16 bit length of the record data and the
/// data itself.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Record {
    /// The owner of the record.
    owner: Name,

    /// The class of the record.
    class: Class,

    /// The time-to-live value of the record.
    ttl: Ttl,

    /// The record data. The value also specifies the record’s type.
    data: RecordData,
}

/// # Creation and Element Access
///
impl Record {
    /// Creates a new record from its parts.
    #[must_use]
    pub fn new(
        owner: Name,
        class: Class,
        ttl: Ttl,
        data: impl Into<RecordData>,
    ) -> Self {
        Record {
            owner,
            class,
            ttl,
            data: data.into(),
        }
    }

    /// Returns a reference to the owner domain name.
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.data.rtype()
    }

    /// Returns the record class.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the record’s time-to-live.
    pub fn ttl(&self) -> Ttl {
        self.ttl
    }

    /// Return a reference to the record data.
    pub fn data(&self) -> &RecordData {
        &self.data
    }

    /// Returns the length of the record data.
    pub fn rdlen(&self) -> usize {
        self.data.rdlen()
    }

    /// Trades the record for its record data.
    pub fn into_data(self) -> RecordData {
        self.data
    }
}

/// # Parsing and Composing
///
impl Record {
    /// Parses a record from the current position of `parser`.
    ///
    /// The parser needs to cover the complete message. Fails with
    /// [`ParseError::TruncatedRecord`] if nothing is left to parse, if the
    /// fixed fields after the owner are cut short, or if the record data
    /// would reach past the end of the message.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, ParseError> {
        if parser.remaining() == 0 {
            return Err(ParseError::TruncatedRecord);
        }
        let owner = Name::parse(parser)?;
        let rtype = Rtype::from_int(
            Section::Record.read(|| parser.parse_u16_be())?,
        );
        let class = Class::from_int(
            Section::Record.read(|| parser.parse_u16_be())?,
        );
        let ttl = Ttl::parse(parser)?;
        let rdlen = Section::Record.read(|| parser.parse_u16_be())?;
        if parser.remaining() < usize::from(rdlen) {
            return Err(ParseError::TruncatedRecord);
        }
        let data = RecordData::parse(rtype, rdlen, parser)?;
        Ok(Record {
            owner,
            class,
            ttl,
            data,
        })
    }

    /// Checks that the record can be composed.
    ///
    /// This re-validates the owner name and makes sure the record data
    /// fits into the 16 bit RDLENGTH field.
    pub fn check(&self) -> Result<u16, ComposeError> {
        self.owner.check()?;
        if let RecordData::Ns(ref ns) = self.data {
            ns.nsdname().check()?;
        }
        u16::try_from(self.rdlen()).map_err(|_| ComposeError::LongRecordData)
    }

    /// Appends the wire format of the record to `target`.
    ///
    /// The RDLENGTH field is computed from the record data.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError>
    where
        ComposeError: From<Target::AppendError>,
    {
        let rdlen = self.check()?;
        self.owner.compose(target)?;
        self.rtype().compose(target)?;
        self.class.compose(target)?;
        self.ttl.compose(target)?;
        rdlen.compose(target)?;
        self.data.compose_rdata(target)?;
        Ok(())
    }
}

//--- From

impl<D: Into<RecordData>> From<(Name, Class, u32, D)> for Record {
    fn from((owner, class, ttl, data): (Name, Class, u32, D)) -> Self {
        Self::new(owner, class, Ttl::from_secs(ttl), data)
    }
}

impl<D: Into<RecordData>> From<(Name, u32, D)> for Record {
    fn from((owner, ttl, data): (Name, u32, D)) -> Self {
        Self::new(owner, Class::IN, Ttl::from_secs(ttl), data)
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.owner.fqdn(),
            self.ttl,
            self.class,
            self.rtype(),
            self.data
        )
    }
}

//------------ Ttl ----------------------------------------------

/// The time-to-live of a resource record.
///
/// The TTL is an unsigned 32 bit number of seconds on the wire, but
/// [RFC 2181] restricts it to the range of a positive signed 32 bit
/// integer. Values with the most significant bit set are a protocol anomaly:
/// this type keeps them as they are, so a record echoes back exactly what
/// was received, and reports them through [`is_anomalous`][Self::is_anomalous].
/// It is up to the user of a record to decide what to do about them.
///
/// [RFC 2181]: https://datatracker.ietf.org/doc/html/rfc2181#section-8
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub struct Ttl(u32);

impl Ttl {
    /// A duration of zero time.
    pub const ZERO: Ttl = Ttl::from_secs(0);

    /// The largest time to live that isn’t anomalous.
    pub const MAX: Ttl = Ttl::from_secs(i32::MAX as u32);

    pub const COMPOSE_LEN: u16 = 4;

    /// Creates a new `Ttl` from the raw value of the TTL field.
    #[must_use]
    #[inline]
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    /// Returns the raw value of the TTL field.
    #[must_use]
    #[inline]
    pub const fn as_secs(&self) -> u32 {
        self.0
    }

    /// Returns the TTL field interpreted as a signed integer.
    ///
    /// The result is negative exactly if the TTL is anomalous.
    #[must_use]
    #[inline]
    pub const fn as_signed(&self) -> i32 {
        self.0 as i32
    }

    /// Returns whether the value lies outside the range allowed for TTLs.
    #[must_use]
    #[inline]
    pub const fn is_anomalous(&self) -> bool {
        self.as_signed() < 0
    }

    /// Converts a `Ttl` into a [`Duration`].
    ///
    /// Anomalous values are treated as zero as suggested by RFC 2181.
    #[must_use]
    pub const fn into_duration(&self) -> Duration {
        if self.is_anomalous() {
            Duration::ZERO
        } else {
            Duration::from_secs(self.0 as u64)
        }
    }

    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        self.as_secs().compose(target)
    }

    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, ParseError> {
        Section::Record.read(|| parser.parse_u32_be()).map(Ttl::from_secs)
    }
}

//--- From

impl From<u32> for Ttl {
    fn from(secs: u32) -> Self {
        Ttl::from_secs(secs)
    }
}

//--- Display

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

//============ Testing ======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::rdata::{Aaaa, Generic, Ns, A};
    use core::str::FromStr;

    fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    #[test]
    fn ttl() {
        assert!(!Ttl::from_secs(0).is_anomalous());
        assert!(!Ttl::MAX.is_anomalous());
        let ttl = Ttl::from_secs(0xFFFF_FFFF);
        assert!(ttl.is_anomalous());
        assert_eq!(ttl.as_signed(), -1);
        assert_eq!(ttl.as_secs(), 0xFFFF_FFFF);
        assert_eq!(ttl.into_duration(), Duration::ZERO);
        assert_eq!(Ttl::from_secs(120).into_duration().as_secs(), 120);
    }

    #[test]
    fn compose_parse() {
        let record = Record::new(
            name("example.com"),
            Class::IN,
            Ttl::from_secs(3600),
            A::from_octets(93, 184, 216, 34),
        );
        let mut buf = Vec::new();
        record.compose(&mut buf).unwrap();
        assert_eq!(
            buf,
            b"\x07example\x03com\0\
              \x00\x01\x00\x01\x00\x00\x0e\x10\x00\x04\
              \x5d\xb8\xd8\x22"
        );
        let mut parser = Parser::from_ref(buf.as_slice());
        assert_eq!(Record::parse(&mut parser), Ok(record));
    }

    #[test]
    fn anomalous_ttl_round_trip() {
        let octets = b"\0\x00\x10\x00\x01\xff\xff\xff\xfe\x00\x00";
        let mut parser = Parser::from_ref(&octets[..]);
        let record = Record::parse(&mut parser).unwrap();
        assert!(record.ttl().is_anomalous());
        let mut buf = Vec::new();
        record.compose(&mut buf).unwrap();
        assert_eq!(buf, octets);
    }

    #[test]
    fn parse_truncated() {
        // Record data length beyond the end.
        let octets = b"\0\x00\x01\x00\x01\x00\x00\x00\x00\x00\x04\x01\x02";
        let mut parser = Parser::from_ref(&octets[..]);
        assert_eq!(
            Record::parse(&mut parser),
            Err(ParseError::TruncatedRecord)
        );

        // Fixed fields cut short.
        let mut parser = Parser::from_ref(&octets[..7]);
        assert_eq!(
            Record::parse(&mut parser),
            Err(ParseError::TruncatedRecord)
        );

        // Nothing at all.
        let mut parser = Parser::from_ref(&octets[..0]);
        assert_eq!(
            Record::parse(&mut parser),
            Err(ParseError::TruncatedRecord)
        );
    }

    #[test]
    fn long_record_data() {
        let record = Record::new(
            Name::root(),
            Class::IN,
            Ttl::ZERO,
            Generic::from_octets(Rtype::NULL, vec![0; 0xFFFF]).unwrap(),
        );
        assert_eq!(record.check(), Ok(0xFFFF));
    }

    #[test]
    fn display() {
        let record: Record = (
            name("example.com"),
            300,
            Aaaa::from_str("2001:db8::1").unwrap(),
        )
            .into();
        assert_eq!(record.to_string(), "example.com. 300 IN AAAA 2001:db8::1");

        let record: Record =
            (name("example.com"), 300, Ns::new(name("ns.example.com")))
                .into();
        assert_eq!(
            record.to_string(),
            "example.com. 300 IN NS ns.example.com"
        );
    }
}
