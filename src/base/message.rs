//! Accessing existing DNS messages.
//!
//! This module defines the [`Message`] type, an owned DNS message with all
//! its sections parsed into values. A message is either decoded from its
//! wire format via [`Message::decode`] or assembled with a
//! [`MessageBuilder`][super::MessageBuilder]. Once created, it can’t be
//! changed.
//!
//! The section counts of the header are never stored. They are derived from
//! the sections when the message is composed, so they always agree with
//! the content.

use super::dig_printer::DigPrinter;
use super::header::{Header, HeaderCounts, HeaderSection};
use super::iana::Rcode;
use super::question::Question;
use super::record::Record;
use super::wire::{Compose, ComposeError, ParseError};
use core::fmt;
use octseq::builder::OctetsBuilder;
use octseq::parse::Parser;

//------------ Message -------------------------------------------------------

/// A DNS message.
///
/// A message consists of a header section and four sections: the question
/// section with the questions and the answer, authority, and additional
/// sections with resource records. Each is available through a method of
/// the same name.
///
/// In wire format, the header section is followed by the four sections in
/// this order. The header section carries the number of entries in each of
/// them, there is no other way to tell where a section ends. Compression
/// pointers in names are resolved when decoding, the message is composed
/// without compression.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Message {
    pub(super) header: Header,
    pub(super) question: Vec<Question>,
    pub(super) answer: Vec<Record>,
    pub(super) authority: Vec<Record>,
    pub(super) additional: Vec<Record>,
}

/// # Header Section
///
impl Message {
    /// Returns the message header.
    pub fn header(&self) -> Header {
        self.header
    }

    /// Returns the header counts of the message.
    ///
    /// The counts are derived from the sections. If a section holds more
    /// than 65535 entries, which a message can’t be built with, its count
    /// is capped.
    pub fn header_counts(&self) -> HeaderCounts {
        fn count<T>(section: &[T]) -> u16 {
            u16::try_from(section.len()).unwrap_or(u16::MAX)
        }
        HeaderCounts::from_counts(
            count(&self.question),
            count(&self.answer),
            count(&self.authority),
            count(&self.additional),
        )
    }

    /// Returns the complete header section for composing the message.
    pub fn header_section(&self) -> Result<HeaderSection, ComposeError> {
        fn count<T>(section: &[T]) -> Result<u16, ComposeError> {
            u16::try_from(section.len()).map_err(|_| ComposeError::LongSection)
        }
        Ok(HeaderSection::new(
            self.header,
            HeaderCounts::from_counts(
                count(&self.question)?,
                count(&self.answer)?,
                count(&self.authority)?,
                count(&self.additional)?,
            ),
        ))
    }

    /// Returns whether the rcode of the header is NoError.
    pub fn no_error(&self) -> bool {
        self.header.rcode() == Rcode::NOERROR
    }

    /// Returns whether the rcode of the header is one of the error values.
    pub fn is_error(&self) -> bool {
        !self.no_error()
    }
}

/// # Sections
///
impl Message {
    /// Returns the question section.
    pub fn question(&self) -> &[Question] {
        &self.question
    }

    /// Returns the answer section.
    pub fn answer(&self) -> &[Record] {
        &self.answer
    }

    /// Returns the authority section.
    pub fn authority(&self) -> &[Record] {
        &self.authority
    }

    /// Returns the additional section.
    pub fn additional(&self) -> &[Record] {
        &self.additional
    }

    /// Returns the first question, if there is any.
    pub fn first_question(&self) -> Option<&Question> {
        self.question.first()
    }

    /// Returns an iterator over the records of all three record sections.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.answer
            .iter()
            .chain(self.authority.iter())
            .chain(self.additional.iter())
    }

    /// Returns an iterator over all records with an anomalous TTL.
    ///
    /// See [`Ttl::is_anomalous`][super::Ttl::is_anomalous] for what makes a
    /// TTL anomalous.
    pub fn anomalous_ttls(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records().filter(|record| record.ttl().is_anomalous())
    }
}

/// # Helpers for Common Tasks
///
impl Message {
    /// Returns whether this is the answer to some other message.
    ///
    /// The method checks whether the ID fields of the headers are the same,
    /// whether the QR flag is set in this message, and whether the questions
    /// are the same.
    ///
    /// A response that was truncated or reports an error may legitimately
    /// come without a question section. Such a response is accepted, too.
    pub fn is_answer_to(&self, query: &Message) -> bool {
        if !self.header.qr() || self.header.id() != query.header.id() {
            false
        } else if self.question.is_empty()
            && (self.header.tc() || self.is_error())
        {
            true
        } else {
            self.question == query.question
        }
    }

    /// Returns a value that displays the message the way `dig` does.
    pub fn display_dig(&self) -> impl fmt::Display + '_ {
        DigPrinter { msg: self }
    }
}

/// # Parsing and Composing
///
impl Message {
    /// Decodes a message from its wire format.
    ///
    /// The slice must contain the message without any framing. Exactly as
    /// many questions and records are parsed as the header section says.
    /// Any octets left over after the additional section are ignored.
    pub fn decode(octets: &[u8]) -> Result<Self, ParseError> {
        let mut parser = Parser::from_ref(octets);
        Self::parse(&mut parser)
    }

    /// Parses a message from the start of the parser.
    ///
    /// The parser must start at the beginning of the message as compression
    /// pointers are relative to it.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, ParseError> {
        let section = HeaderSection::parse(parser)?;
        let counts = section.counts();
        let question = (0..counts.qdcount())
            .map(|_| Question::parse(parser))
            .collect::<Result<Vec<_>, _>>()?;
        let answer = parse_records(parser, counts.ancount())?;
        let authority = parse_records(parser, counts.nscount())?;
        let additional = parse_records(parser, counts.arcount())?;
        Ok(Message {
            header: section.header(),
            question,
            answer,
            authority,
            additional,
        })
    }

    /// Appends the wire format of the message to `target`.
    ///
    /// All names are checked before they are written and composed without
    /// compression.
    pub fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError>
    where
        ComposeError: From<Target::AppendError>,
    {
        self.header_section()?.compose(target)?;
        for question in &self.question {
            question.qname().check()?;
            question.compose(target)?;
        }
        for record in self.records() {
            record.compose(target)?;
        }
        Ok(())
    }

    /// Encodes the message into a new vec.
    pub fn encode(&self) -> Result<Vec<u8>, ComposeError> {
        let mut target = Vec::new();
        self.compose(&mut target)?;
        Ok(target)
    }
}

/// Parses `count` records from `parser`.
fn parse_records(
    parser: &mut Parser<'_, [u8]>,
    count: u16,
) -> Result<Vec<Record>, ParseError> {
    (0..count).map(|_| Record::parse(parser)).collect()
}

//--- Display

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.display_dig(), f)
    }
}

//============ Testing =======================================================
