//! The twelve octet header section of a DNS message.
//!
//! Section 4.1.1 of [RFC 1035] defines the header as the message ID, a
//! 16 bit word of flags and codes, and the four section counts:
//!
//! ```text
//!                                 1  1  1  1  1  1
//!   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                      ID                       |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! |                    QDCOUNT                    |
//! |                    ANCOUNT                    |
//! |                    NSCOUNT                    |
//! |                    ARCOUNT                    |
//! +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
//! ```
//!
//! [`Header`] holds the first two fields, [`HeaderCounts`] the four
//! counts, and [`HeaderSection`] combines them into the unit that is
//! parsed and composed.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::iana::{Opcode, Rcode};
use super::wire::{Compose, ParseError, Section};
use core::{fmt, str::FromStr};
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Flag word layout ----------------------------------------------

const QR_MASK: u16 = 0x8000;
const AA_MASK: u16 = 0x0400;
const TC_MASK: u16 = 0x0200;
const RD_MASK: u16 = 0x0100;
const RA_MASK: u16 = 0x0080;

const OPCODE_SHIFT: u16 = 11;
const Z_SHIFT: u16 = 4;

const NIBBLE: u16 = 0x0F;
const Z_BITS: u16 = 0x07;

//------------ Header --------------------------------------------------------

/// The ID and flags word of a message header.
///
/// Both fields are kept as plain integers and the individual flags and
/// codes are extracted on access. Nothing is validated: the reserved Z
/// bits of a received header survive a decode and encode unchanged and
/// can be inspected via [`z`][Self::z].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Header {
    id: u16,
    flags: u16,
}

/// # Creation and Conversion
///
impl Header {
    /// Creates a header with ID zero and all flags cleared.
    ///
    /// This is a query with opcode [`Opcode::QUERY`] and response code
    /// [`Rcode::NOERROR`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a header from the ID and the raw flags word.
    #[must_use]
    pub fn from_parts(id: u16, flags_word: u16) -> Self {
        Header {
            id,
            flags: flags_word,
        }
    }

    /// Returns the wire format of the header.
    pub fn to_array(self) -> [u8; 4] {
        let [id0, id1] = self.id.to_be_bytes();
        let [fl0, fl1] = self.flags.to_be_bytes();
        [id0, id1, fl0, fl1]
    }

    fn from_array(octets: [u8; 4]) -> Self {
        Header::from_parts(
            u16::from_be_bytes([octets[0], octets[1]]),
            u16::from_be_bytes([octets[2], octets[3]]),
        )
    }
}

/// # Field Access
///
impl Header {
    /// Returns the message ID.
    ///
    /// A server copies the ID of a query into its response which is how a
    /// client tells responses apart. Use
    /// [`set_random_id`][Self::set_random_id] for outgoing queries.
    pub fn id(self) -> u16 {
        self.id
    }

    pub fn set_id(&mut self, value: u16) {
        self.id = value
    }

    /// Sets the message ID to a random value.
    #[cfg(feature = "rand")]
    pub fn set_random_id(&mut self) {
        self.id = ::rand::random()
    }

    /// Returns the raw flags word, i.e., the second 16 bit field.
    pub fn flags_word(self) -> u16 {
        self.flags
    }

    pub fn set_flags_word(&mut self, value: u16) {
        self.flags = value
    }

    /// Returns whether the message is a response.
    pub fn qr(self) -> bool {
        self.flag(QR_MASK)
    }

    pub fn set_qr(&mut self, set: bool) {
        self.set_flag(QR_MASK, set)
    }

    /// Returns the kind of query.
    pub fn opcode(self) -> Opcode {
        Opcode::from_int(self.field(OPCODE_SHIFT, NIBBLE))
    }

    pub fn set_opcode(&mut self, opcode: Opcode) {
        self.set_field(OPCODE_SHIFT, NIBBLE, opcode.to_int())
    }

    /// Returns the five flag bits as a [`Flags`] value.
    pub fn flags(self) -> Flags {
        Flags {
            qr: self.qr(),
            aa: self.aa(),
            tc: self.tc(),
            rd: self.rd(),
            ra: self.ra(),
        }
    }

    /// Sets all five flag bits from a [`Flags`] value.
    pub fn set_flags(&mut self, flags: Flags) {
        self.set_qr(flags.qr);
        self.set_aa(flags.aa);
        self.set_tc(flags.tc);
        self.set_rd(flags.rd);
        self.set_ra(flags.ra);
    }

    /// Returns whether the response is authoritative.
    pub fn aa(self) -> bool {
        self.flag(AA_MASK)
    }

    pub fn set_aa(&mut self, set: bool) {
        self.set_flag(AA_MASK, set)
    }

    /// Returns whether the message was truncated.
    pub fn tc(self) -> bool {
        self.flag(TC_MASK)
    }

    pub fn set_tc(&mut self, set: bool) {
        self.set_flag(TC_MASK, set)
    }

    /// Returns whether recursion is desired.
    pub fn rd(self) -> bool {
        self.flag(RD_MASK)
    }

    pub fn set_rd(&mut self, set: bool) {
        self.set_flag(RD_MASK, set)
    }

    /// Returns whether the server offers recursion.
    pub fn ra(self) -> bool {
        self.flag(RA_MASK)
    }

    pub fn set_ra(&mut self, set: bool) {
        self.set_flag(RA_MASK, set)
    }

    /// Returns the three reserved bits in the lowest bits of an octet.
    pub fn z(self) -> u8 {
        self.field(Z_SHIFT, Z_BITS)
    }

    /// Sets the reserved bits. Only the lowest three bits of `value` count.
    pub fn set_z(&mut self, value: u8) {
        self.set_field(Z_SHIFT, Z_BITS, value)
    }

    /// Returns the response code.
    pub fn rcode(self) -> Rcode {
        Rcode::from_int(self.field(0, NIBBLE))
    }

    pub fn set_rcode(&mut self, rcode: Rcode) {
        self.set_field(0, NIBBLE, rcode.to_int())
    }

    //--- Internal helpers

    fn flag(self, mask: u16) -> bool {
        self.flags & mask != 0
    }

    fn set_flag(&mut self, mask: u16, set: bool) {
        if set {
            self.flags |= mask
        } else {
            self.flags &= !mask
        }
    }

    /// Returns the bits selected by `mask` after shifting right by `shift`.
    fn field(self, shift: u16, mask: u16) -> u8 {
        // The widest field is four bits, so this never truncates.
        ((self.flags >> shift) & mask) as u8
    }

    fn set_field(&mut self, shift: u16, mask: u16, value: u8) {
        self.flags = (self.flags & !(mask << shift))
            | ((u16::from(value) & mask) << shift);
    }
}

//------------ Flags ---------------------------------------------------------

/// The five flag bits of a header.
///
/// The text form lists the set flags as upper case two-letter tokens
/// separated by a space. Parsing accepts tokens in any case.
///
/// ```
/// use core::str::FromStr;
/// use dnswire::base::header::Flags;
///
/// let flags = Flags::from_str("qr rd").unwrap();
/// assert!(flags.qr && flags.rd && !flags.aa);
/// assert_eq!(flags.to_string(), "QR RD");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Flags {
    /// The message is a response.
    pub qr: bool,

    /// The answer is authoritative.
    pub aa: bool,

    /// The message was truncated to fit the transport.
    pub tc: bool,

    /// The client asks for recursion.
    pub rd: bool,

    /// The server offers recursion.
    pub ra: bool,
}

impl Flags {
    /// Creates a value with no flags set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn tokens(self) -> [(&'static str, bool); 5] {
        [
            ("QR", self.qr),
            ("AA", self.aa),
            ("TC", self.tc),
            ("RD", self.rd),
            ("RA", self.ra),
        ]
    }
}

//--- Display and FromStr

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (token, _) in self.tokens().iter().filter(|(_, set)| *set) {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = FlagsFromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut res = Flags::new();
        for token in s.split_ascii_whitespace() {
            let flag = match token.to_ascii_uppercase().as_str() {
                "QR" => &mut res.qr,
                "AA" => &mut res.aa,
                "TC" => &mut res.tc,
                "RD" => &mut res.rd,
                "RA" => &mut res.ra,
                _ => return Err(FlagsFromStrError),
            };
            *flag = true;
        }
        Ok(res)
    }
}

//------------ HeaderCounts --------------------------------------------------

/// The four section counts of a header.
///
/// A [`Message`][super::Message] never stores counts. It derives them from
/// its sections, so this type only shows up while parsing and composing.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct HeaderCounts {
    counts: [u16; 4],
}

impl HeaderCounts {
    const QD: usize = 0;
    const AN: usize = 1;
    const NS: usize = 2;
    const AR: usize = 3;

    /// Creates a value with all counts zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a value from the question, answer, authority, and
    /// additional counts.
    #[must_use]
    pub fn from_counts(qd: u16, an: u16, ns: u16, ar: u16) -> Self {
        HeaderCounts {
            counts: [qd, an, ns, ar],
        }
    }

    /// Returns the wire format of the counts.
    pub fn to_array(self) -> [u8; 8] {
        let mut res = [0; 8];
        for (chunk, count) in res.chunks_exact_mut(2).zip(self.counts) {
            chunk.copy_from_slice(&count.to_be_bytes());
        }
        res
    }

    fn from_array(octets: [u8; 8]) -> Self {
        let mut counts = [0; 4];
        for (count, chunk) in counts.iter_mut().zip(octets.chunks_exact(2)) {
            *count = u16::from_be_bytes([chunk[0], chunk[1]]);
        }
        HeaderCounts { counts }
    }
}

/// # Field Access
///
impl HeaderCounts {
    /// Returns the number of questions.
    pub fn qdcount(self) -> u16 {
        self.counts[Self::QD]
    }

    pub fn set_qdcount(&mut self, value: u16) {
        self.counts[Self::QD] = value
    }

    /// Returns the number of answer records.
    pub fn ancount(self) -> u16 {
        self.counts[Self::AN]
    }

    pub fn set_ancount(&mut self, value: u16) {
        self.counts[Self::AN] = value
    }

    /// Returns the number of authority records.
    pub fn nscount(self) -> u16 {
        self.counts[Self::NS]
    }

    pub fn set_nscount(&mut self, value: u16) {
        self.counts[Self::NS] = value
    }

    /// Returns the number of additional records.
    pub fn arcount(self) -> u16 {
        self.counts[Self::AR]
    }

    pub fn set_arcount(&mut self, value: u16) {
        self.counts[Self::AR] = value
    }
}

//------------ HeaderSection -------------------------------------------------

/// A [`Header`] followed by its [`HeaderCounts`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct HeaderSection {
    header: Header,
    counts: HeaderCounts,
}

/// # Creation and Conversion
///
impl HeaderSection {
    /// The length of the header section in octets.
    pub const LEN: usize = 12;

    #[must_use]
    pub fn new(header: Header, counts: HeaderCounts) -> Self {
        HeaderSection { header, counts }
    }

    /// Creates a header section from its wire format.
    #[must_use]
    pub fn from_array(octets: [u8; 12]) -> Self {
        let mut header = [0; 4];
        let mut counts = [0; 8];
        header.copy_from_slice(&octets[..4]);
        counts.copy_from_slice(&octets[4..]);
        HeaderSection {
            header: Header::from_array(header),
            counts: HeaderCounts::from_array(counts),
        }
    }

    /// Returns the wire format of the header section.
    pub fn to_array(self) -> [u8; 12] {
        let mut res = [0; 12];
        res[..4].copy_from_slice(&self.header.to_array());
        res[4..].copy_from_slice(&self.counts.to_array());
        res
    }

    pub fn header(self) -> Header {
        self.header
    }

    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    pub fn counts(self) -> HeaderCounts {
        self.counts
    }

    pub fn counts_mut(&mut self) -> &mut HeaderCounts {
        &mut self.counts
    }
}

/// # Parsing and Composing
///
impl HeaderSection {
    /// Parses the header section at the parser’s position.
    ///
    /// Fails with [`ParseError::TruncatedHeader`] if fewer than twelve
    /// octets are left.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, ParseError> {
        let mut res = [0; Self::LEN];
        Section::Header.read(|| parser.parse_buf(&mut res))?;
        Ok(Self::from_array(res))
    }
}

impl Compose for HeaderSection {
    const COMPOSE_LEN: u16 = Self::LEN as u16;

    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(&self.to_array())
    }
}

//============ Error Types ===================================================

/// A string contained something other than a flag token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FlagsFromStrError;

impl fmt::Display for FlagsFromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("illegal flags token")
    }
}

impl std::error::Error for FlagsFromStrError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::builder::infallible;

    macro_rules! test_field {
        ($get:ident, $set:ident, $default:expr, $($value:expr),*) => {
            $({
                let mut h = Header::new();
                assert_eq!(h.$get(), $default);
                h.$set($value);
                assert_eq!(h.$get(), $value);
            })*
        }
    }

    #[test]
    fn header() {
        test_field!(id, set_id, 0, 0x1234);
        test_field!(qr, set_qr, false, true, false);
        test_field!(opcode, set_opcode, Opcode::QUERY, Opcode::STATUS);
        test_field!(aa, set_aa, false, true, false);
        test_field!(tc, set_tc, false, true, false);
        test_field!(rd, set_rd, false, true, false);
        test_field!(ra, set_ra, false, true, false);
        test_field!(z, set_z, 0, 5, 7, 0);
        test_field!(rcode, set_rcode, Rcode::NOERROR, Rcode::REFUSED);
    }

    #[test]
    fn bit_layout() {
        let mut h = Header::new();
        h.set_qr(true);
        assert_eq!(h.flags_word(), 0x8000);
        h.set_opcode(Opcode::STATUS);
        assert_eq!(h.flags_word(), 0x9000);
        h.set_aa(true);
        h.set_tc(true);
        h.set_rd(true);
        assert_eq!(h.flags_word(), 0x9700);
        h.set_ra(true);
        h.set_z(7);
        h.set_rcode(Rcode::REFUSED);
        assert_eq!(h.flags_word(), 0x97F5);
        h.set_opcode(Opcode::QUERY);
        assert_eq!(h.flags_word(), 0x87F5);

        let h = Header::from_parts(0xBEEF, 0x0070);
        assert_eq!(h.id(), 0xBEEF);
        assert_eq!(h.z(), 7);
        assert_eq!(h.flags(), Flags::new());
        assert_eq!(h.to_array(), [0xBE, 0xEF, 0x00, 0x70]);
    }

    #[test]
    fn flags() {
        let mut h = Header::new();
        h.set_flags(Flags::from_str("QR RD ra").unwrap());
        assert_eq!(h.flags_word(), 0x8180);
        assert_eq!(h.flags().to_string(), "QR RD RA");
        assert_eq!(Flags::from_str("").unwrap(), Flags::new());
        assert_eq!(Flags::new().to_string(), "");
        assert!(Flags::from_str("XX").is_err());
    }

    #[test]
    fn section_compose() {
        let mut header = Header::new();
        header.set_id(0xBEEF);
        header.set_rd(true);
        let section =
            HeaderSection::new(header, HeaderCounts::from_counts(1, 0, 0, 0));
        let mut buf = Vec::new();
        infallible(section.compose(&mut buf));
        assert_eq!(
            buf,
            [0xBE, 0xEF, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn section_parse() {
        let octets = [0x12, 0x34, 0x81, 0x83, 0, 1, 0, 2, 0, 3, 0, 4, 0xFF];
        let mut parser = Parser::from_ref(&octets[..]);
        let section = HeaderSection::parse(&mut parser).unwrap();
        assert_eq!(parser.remaining(), 1);
        assert_eq!(section.header().id(), 0x1234);
        assert!(section.header().qr());
        assert!(section.header().rd());
        assert!(section.header().ra());
        assert_eq!(section.header().rcode(), Rcode::NXDOMAIN);
        let counts = section.counts();
        assert_eq!(
            (
                counts.qdcount(),
                counts.ancount(),
                counts.nscount(),
                counts.arcount()
            ),
            (1, 2, 3, 4)
        );
        assert_eq!(section.to_array()[..], octets[..12]);

        let mut parser = Parser::from_ref(&octets[..11]);
        assert_eq!(
            HeaderSection::parse(&mut parser),
            Err(ParseError::TruncatedHeader)
        );
    }
}
