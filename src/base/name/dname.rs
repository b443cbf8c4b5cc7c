//! Owned absolute domain names.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::super::wire::{ComposeError, ParseError};
use super::label::{Label, LongLabelError};
use core::str::FromStr;
use core::{fmt, slice};
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Name ----------------------------------------------------------

/// An absolute domain name.
///
/// A name is a sequence of [`Label`]s that always ends in exactly one root
/// label. Its uncompressed wire format, i.e., all the labels including
/// their length octets, is at most 255 octets long. Both conditions are
/// checked whenever a name is created, so every value of this type is a
/// valid name.
///
/// Names are owned and self-contained. When a name is parsed from a
/// message, any compression pointers are resolved and the labels they
/// refer to are copied into the name.
///
/// The string representation is the usual sequence of labels separated by
/// dots. The trailing dot of the root label is accepted but not required
/// when converting from a string and is left out when displaying a name,
/// except for the root name itself which is displayed as `"."`.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Name {
    /// The labels, including the final root label.
    labels: Vec<Label>,
}

/// # Creation
///
impl Name {
    /// The maximum length of a name in wire format.
    pub const MAX_LEN: usize = 255;

    /// Returns the root name.
    #[must_use]
    pub fn root() -> Self {
        Name {
            labels: vec![Label::root()],
        }
    }

    /// Creates a name from the labels before the root label.
    ///
    /// The root label is added by the function. Passing a root label in
    /// `labels` is an error as is ending up with a name longer than 255
    /// octets.
    pub fn from_labels<I>(labels: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = Label>,
    {
        let mut res = Vec::new();
        let mut len = 1;
        for label in labels {
            if label.is_root() {
                return Err(NameError::EmptyLabel);
            }
            len += usize::from(label.compose_len());
            if len > Self::MAX_LEN {
                return Err(NameError::LongName);
            }
            res.push(label);
        }
        res.push(Label::root());
        Ok(Name { labels: res })
    }

    /// Creates a name from a sequence of label contents.
    ///
    /// This is a shortcut for converting each slice into a label and then
    /// calling [`from_labels`][Self::from_labels].
    pub fn from_slices<'a, I>(slices: I) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let labels = slices
            .into_iter()
            .map(Label::from_slice)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_labels(labels)
    }
}

/// # Properties
///
impl Name {
    /// Returns whether this is the root name.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.labels.len() == 1
    }

    /// Returns all labels of the name, the root label included.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns an iterator over the labels, the root label included.
    pub fn iter(&self) -> slice::Iter<'_, Label> {
        self.labels.iter()
    }

    /// Returns the number of labels, the root label included.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns a value displaying the name with its trailing dot.
    ///
    /// This is the fully qualified form used in presentation formats. The
    /// root name is displayed as a single dot.
    pub fn fqdn(&self) -> impl fmt::Display + '_ {
        struct Fqdn<'a>(&'a Name);

        impl<'a> fmt::Display for Fqdn<'a> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                if self.0.is_root() {
                    f.write_str(".")
                } else {
                    write!(f, "{}.", self.0)
                }
            }
        }

        Fqdn(self)
    }

    /// Returns the length of the uncompressed wire format.
    #[must_use]
    pub fn compose_len(&self) -> u16 {
        self.labels.iter().map(Label::compose_len).sum()
    }
}

/// # Parsing and Composing
///
impl Name {
    /// Checks that the name can be encoded.
    ///
    /// The invariants are upheld by all constructors, so this only fails
    /// if something went badly wrong. It is called before a message is
    /// composed so that invalid data never makes it onto the wire.
    pub fn check(&self) -> Result<(), ComposeError> {
        let (last, head) = match self.labels.split_last() {
            Some(split) => split,
            None => return Err(ComposeError::LongName),
        };
        if !last.is_root() || head.iter().any(Label::is_root) {
            return Err(ComposeError::LongLabel);
        }
        if head.iter().any(|label| usize::from(label.len()) > Label::MAX_LEN)
        {
            return Err(ComposeError::LongLabel);
        }
        if usize::from(self.compose_len()) > Self::MAX_LEN {
            return Err(ComposeError::LongName);
        }
        Ok(())
    }

    /// Appends the uncompressed wire format of the name to `target`.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        for label in &self.labels {
            target.append_slice(label.as_wire_slice())?;
        }
        Ok(())
    }

    /// Parses a possibly compressed name.
    ///
    /// The parser must cover the complete message since compression
    /// pointers are offsets from its start. On success, the parser is
    /// positioned right after the name as it appears at the parser’s
    /// position, i.e., after the root label or after the first compression
    /// pointer, no matter where the pointers lead.
    ///
    /// Every compression pointer has to point to an offset strictly before
    /// the pointer itself and, if it was reached by following an earlier
    /// pointer, strictly before that earlier pointer’s target. This
    /// guarantees that parsing terminates even for crafted pointer loops.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, ParseError> {
        let mut labels = Vec::new();
        let mut name_len = 0;

        // Phase One: No compression pointers have been found yet.
        //
        // The labels are read with the caller’s parser. If we encounter the
        // root label, we are done. Otherwise continue to phase two.
        let (mut ptr, mut ptr_pos) = loop {
            match LabelType::parse(parser)? {
                LabelType::Normal(0) => {
                    labels.push(Label::root());
                    return Ok(Name { labels });
                }
                LabelType::Normal(len) => {
                    labels.push(take_label(parser, len, &mut name_len)?);
                }
                LabelType::Compressed(ptr) => {
                    break (ptr, parser.pos() - 2);
                }
            }
        };

        // Phase Two: Compression has occured.
        //
        // The caller’s parser has already reached the end of the name. We
        // continue on a copy of it so we can jump around.
        let mut tmp = *parser;
        loop {
            if ptr >= ptr_pos {
                return Err(ParseError::InvalidCompressionPointer);
            }
            tmp.seek(ptr)
                .map_err(|_| ParseError::InvalidCompressionPointer)?;
            let bound = ptr;

            loop {
                match LabelType::parse(&mut tmp)? {
                    LabelType::Normal(0) => {
                        labels.push(Label::root());
                        return Ok(Name { labels });
                    }
                    LabelType::Normal(len) => {
                        labels.push(take_label(&mut tmp, len, &mut name_len)?);
                    }
                    LabelType::Compressed(new_ptr) => {
                        if new_ptr >= bound {
                            return Err(ParseError::InvalidCompressionPointer);
                        }
                        ptr = new_ptr;
                        ptr_pos = tmp.pos() - 2;
                        break;
                    }
                }
            }
        }
    }
}

/// Takes the content of a normal label of length `len` from the parser.
///
/// Adds the label’s wire length to `name_len` and fails if that leaves no
/// room for the root label.
fn take_label(
    parser: &mut Parser<'_, [u8]>,
    len: u8,
    name_len: &mut usize,
) -> Result<Label, ParseError> {
    *name_len += usize::from(len) + 1;
    if *name_len >= Name::MAX_LEN {
        return Err(ParseError::LongName);
    }
    let content = parser
        .peek(usize::from(len))
        .map_err(|_| ParseError::MalformedLabel)?;
    let label =
        Label::from_slice(content).map_err(|_| ParseError::MalformedLabel)?;
    parser
        .advance(usize::from(len))
        .map_err(|_| ParseError::MalformedLabel)?;
    Ok(label)
}

//--- FromStr

impl FromStr for Name {
    type Err = NameError;

    /// Converts the dotted string representation into a name.
    ///
    /// A single trailing dot is optional. Both `""` and `"."` result in the
    /// root name. Labels can contain any octet via the escape sequences
    /// `\X` for a literal character and `\DDD` for a decimal octet value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "." {
            return Ok(Name::root());
        }
        let mut labels = Vec::new();
        let mut label = Vec::new();
        let mut chars = s.chars();
        let mut last_was_dot = false;
        while let Some(ch) = chars.next() {
            last_was_dot = false;
            match ch {
                '.' => {
                    if label.is_empty() {
                        return Err(NameError::EmptyLabel);
                    }
                    labels.push(Label::from_slice(&label)?);
                    label.clear();
                    last_was_dot = true;
                }
                '\\' => label.push(parse_escape(&mut chars)?),
                ch if ch.is_ascii() => label.push(ch as u8),
                _ => return Err(NameError::IllegalCharacter),
            }
        }
        if !last_was_dot {
            if label.is_empty() {
                return Err(NameError::EmptyLabel);
            }
            labels.push(Label::from_slice(&label)?);
        }
        Name::from_labels(labels)
    }
}

/// Parses the remainder of an escape sequence after the backslash.
fn parse_escape(chars: &mut core::str::Chars) -> Result<u8, NameError> {
    let ch = chars.next().ok_or(NameError::BadEscape)?;
    if let Some(first) = ch.to_digit(10) {
        let second = chars
            .next()
            .and_then(|ch| ch.to_digit(10))
            .ok_or(NameError::BadEscape)?;
        let third = chars
            .next()
            .and_then(|ch| ch.to_digit(10))
            .ok_or(NameError::BadEscape)?;
        u8::try_from(first * 100 + second * 10 + third)
            .map_err(|_| NameError::BadEscape)
    } else if ch.is_ascii() {
        Ok(ch as u8)
    } else {
        Err(NameError::IllegalCharacter)
    }
}

//--- IntoIterator

impl<'a> IntoIterator for &'a Name {
    type Item = &'a Label;
    type IntoIter = slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    /// Formats the domain name.
    ///
    /// This will produce the domain name in common display format without
    /// the trailing dot, except for the root name which is shown as `"."`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        let mut first = true;
        for label in self.labels.iter().filter(|label| !label.is_root()) {
            if !first {
                f.write_str(".")?;
            }
            first = false;
            fmt::Display::fmt(label, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self)
    }
}

//------------ LabelType -----------------------------------------------------

/// The type of a label as found in wire format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LabelType {
    /// A normal label with its size in octets.
    Normal(u8),

    /// A compression pointer with the position of where to continue.
    Compressed(usize),
}

impl LabelType {
    /// Takes a label type from the beginning of `parser`.
    fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, ParseError> {
        let ltype = parser.parse_u8().map_err(|_| ParseError::MalformedLabel)?;
        match ltype {
            0..=0x3F => Ok(LabelType::Normal(ltype)),
            0xC0..=0xFF => {
                let res = usize::from(
                    parser
                        .parse_u8()
                        .map_err(|_| ParseError::InvalidCompressionPointer)?,
                );
                let res = res | ((usize::from(ltype) & 0x3F) << 8);
                Ok(LabelType::Compressed(res))
            }
            _ => Err(ParseError::MalformedLabel),
        }
    }
}

//------------ NameError -----------------------------------------------------

/// Creating a domain name failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// A label was longer than 63 octets.
    LongLabel,

    /// The name would be longer than 255 octets.
    LongName,

    /// An empty label appeared before the end of the name.
    EmptyLabel,

    /// An escape sequence was broken.
    BadEscape,

    /// A non-ASCII character appeared in the string.
    IllegalCharacter,
}

impl From<LongLabelError> for NameError {
    fn from(_: LongLabelError) -> Self {
        NameError::LongLabel
    }
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            NameError::LongLabel => "long label",
            NameError::LongName => "long domain name",
            NameError::EmptyLabel => "empty label",
            NameError::BadEscape => "illegal escape sequence",
            NameError::IllegalCharacter => "illegal character",
        })
    }
}

impl std::error::Error for NameError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use octseq::builder::infallible;

    fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    fn parse_at(octets: &[u8], start: usize) -> (Result<Name, ParseError>, usize) {
        let mut parser = Parser::from_ref(octets);
        parser.advance(start).unwrap();
        let res = Name::parse(&mut parser);
        (res, parser.pos())
    }

    #[test]
    fn from_str() {
        let example = name("example.com");
        assert_eq!(example.label_count(), 3);
        assert_eq!(example.labels()[0].as_slice(), b"example");
        assert_eq!(example.labels()[1].as_slice(), b"com");
        assert!(example.labels()[2].is_root());

        assert_eq!(name("example.com."), example);
        assert_eq!(name(""), Name::root());
        assert_eq!(name("."), Name::root());
        assert_eq!(name("a\\.b.c").labels()[0].as_slice(), b"a.b");
        assert_eq!(name("\\001x").labels()[0].as_slice(), b"\x01x");

        assert_eq!(Name::from_str("a..b"), Err(NameError::EmptyLabel));
        assert_eq!(Name::from_str(".a"), Err(NameError::EmptyLabel));
        assert_eq!(Name::from_str("a.."), Err(NameError::EmptyLabel));
        assert_eq!(Name::from_str("a\\2"), Err(NameError::BadEscape));
        assert_eq!(Name::from_str("a\\256"), Err(NameError::BadEscape));
        assert_eq!(Name::from_str("ä.com"), Err(NameError::IllegalCharacter));
        assert_eq!(
            Name::from_str(&"x".repeat(64)),
            Err(NameError::LongLabel)
        );
    }

    #[test]
    fn max_len() {
        // Four labels of 63 octets are 256 octets with the root label.
        let label = "x".repeat(63);
        let long = [label.as_str(); 4].join(".");
        assert_eq!(Name::from_str(&long), Err(NameError::LongName));

        // Three of 63 and one of 61 are exactly 255.
        let ok = format!("{}.{}", [label.as_str(); 3].join("."), "y".repeat(61));
        let ok = name(&ok);
        assert_eq!(ok.compose_len(), 255);
        assert!(ok.check().is_ok());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", name("www.example.com.")), "www.example.com");
        assert_eq!(format!("{}", Name::root()), ".");
        assert_eq!(format!("{:?}", name("a.b")), "Name(a.b)");
        assert_eq!(name("a.b").fqdn().to_string(), "a.b.");
        assert_eq!(Name::root().fqdn().to_string(), ".");
    }

    #[test]
    fn compose() {
        let mut buf = Vec::new();
        infallible(name("www.example.com").compose(&mut buf));
        assert_eq!(buf, b"\x03www\x07example\x03com\0");

        let mut buf = Vec::new();
        infallible(Name::root().compose(&mut buf));
        assert_eq!(buf, b"\0");
    }

    #[test]
    fn parse_flat() {
        let (res, pos) = parse_at(b"\x03www\x07example\x03com\0\x12", 0);
        assert_eq!(res, Ok(name("www.example.com")));
        assert_eq!(pos, 17);

        let (res, pos) = parse_at(b"\0", 0);
        assert_eq!(res, Ok(Name::root()));
        assert_eq!(pos, 1);
    }

    #[test]
    fn parse_compressed() {
        // "com" at 0, "www.example" + pointer to 0 at 5.
        let octets = b"\x03com\0\x03www\x07example\xc0\x00\xff";
        let (res, pos) = parse_at(octets, 5);
        assert_eq!(res, Ok(name("www.example.com")));
        assert_eq!(pos, 19);

        // Two pointers in a chain: name at 15 points to 5 which points to 0.
        let octets = b"\x03com\0\x07example\xc0\x00\x03www\xc0\x05";
        let (res, pos) = parse_at(octets, 15);
        assert_eq!(res, Ok(name("www.example.com")));
        assert_eq!(pos, octets.len());

        // A bare pointer consumes exactly two octets.
        let octets = b"\x03com\0\xc0\x00";
        let (res, pos) = parse_at(octets, 5);
        assert_eq!(res, Ok(name("com")));
        assert_eq!(pos, 7);
    }

    #[test]
    fn parse_bad_pointers() {
        // Points to itself.
        let (res, _) = parse_at(b"\x03com\0\xc0\x05", 5);
        assert_eq!(res, Err(ParseError::InvalidCompressionPointer));

        // Points forward.
        let (res, _) = parse_at(b"\xc0\x02\x03com\0", 0);
        assert_eq!(res, Err(ParseError::InvalidCompressionPointer));

        // Target is reached again from inside the pointed-to name.
        let (res, _) = parse_at(b"\x01a\xc0\x00", 2);
        assert_eq!(res, Err(ParseError::InvalidCompressionPointer));

        // Missing second pointer octet.
        let (res, _) = parse_at(b"\x03com\0\xc0", 5);
        assert_eq!(res, Err(ParseError::InvalidCompressionPointer));
    }

    #[test]
    fn parse_malformed() {
        // Reserved label types 01 and 10.
        assert_eq!(parse_at(b"\x40a\0", 0).0, Err(ParseError::MalformedLabel));
        assert_eq!(parse_at(b"\x80a\0", 0).0, Err(ParseError::MalformedLabel));

        // Label running past the end.
        assert_eq!(parse_at(b"\x05abc", 0).0, Err(ParseError::MalformedLabel));

        // Missing root label.
        assert_eq!(parse_at(b"\x03com", 0).0, Err(ParseError::MalformedLabel));

        // Empty input.
        assert_eq!(parse_at(b"", 0).0, Err(ParseError::MalformedLabel));
    }

    #[test]
    fn parse_long() {
        let mut octets = Vec::new();
        for _ in 0..4 {
            octets.push(63);
            octets.extend_from_slice(&[b'x'; 63]);
        }
        octets.push(0);
        assert_eq!(parse_at(&octets, 0).0, Err(ParseError::LongName));
    }

    #[test]
    fn from_labels() {
        let res = Name::from_slices([b"www".as_ref(), b"example".as_ref()]);
        assert_eq!(res, Ok(name("www.example")));
        assert_eq!(
            Name::from_labels([Label::root()]),
            Err(NameError::EmptyLabel)
        );
        assert_eq!(Name::from_labels([]), Ok(Name::root()));
    }
}
