//! Building a new DNS message.
//!
//! A [`MessageBuilder`] collects the header and the entries of the four
//! sections and turns them into an immutable [`Message`] once done. Since
//! the section counts are derived from the sections, the only thing that
//! can go wrong while building is exceeding the 65535 entries a section can
//! hold.

use super::header::Header;
#[cfg(feature = "rand")]
use super::iana::Opcode;
use super::iana::Rcode;
use super::message::Message;
use super::question::Question;
use super::record::Record;
use super::wire::ComposeError;

//------------ MessageBuilder ------------------------------------------------

/// Builds a message.
///
/// A new builder starts out with an all-zero header and empty sections.
/// The header can be manipulated via [`header_mut`][Self::header_mut] and
/// entries are added to the sections with the various `push_` methods.
/// They can be added in any order, the sections are composed in their
/// fixed order anyway. Finally, [`finish`][Self::finish] returns the
/// message.
#[derive(Clone, Debug, Default)]
pub struct MessageBuilder {
    msg: Message,
}

/// # Creating Message Builders
///
impl MessageBuilder {
    /// Creates a new, empty message builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for a response to the given query.
    ///
    /// The ID, opcode, and RD flag are copied from the query, QR is set,
    /// the response code is set to `rcode`, and the questions of the query
    /// are copied into the question section.
    #[must_use]
    pub fn answer_to(query: &Message, rcode: Rcode) -> Self {
        let mut res = Self::new();
        {
            let header = res.header_mut();
            header.set_id(query.header().id());
            header.set_qr(true);
            header.set_opcode(query.header().opcode());
            header.set_rd(query.header().rd());
            header.set_rcode(rcode);
        }
        res.msg.question = query.question().to_vec();
        res
    }

    /// Creates a standard query for the given question.
    ///
    /// The query gets a random ID, the opcode QUERY, and the RD flag
    /// according to `recursion_desired`. It has the one question and empty
    /// record sections.
    #[cfg(feature = "rand")]
    #[must_use]
    pub fn new_query(question: Question, recursion_desired: bool) -> Message {
        let mut res = Self::new();
        {
            let header = res.header_mut();
            header.set_random_id();
            header.set_qr(false);
            header.set_opcode(Opcode::QUERY);
            header.set_rd(recursion_desired);
        }
        res.msg.question.push(question);
        res.finish()
    }
}

/// # Access to the Header
///
impl MessageBuilder {
    /// Returns the header of the message.
    pub fn header(&self) -> Header {
        self.msg.header
    }

    /// Returns a mutable reference to the header of the message.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.msg.header
    }
}

/// # Adding Entries
///
impl MessageBuilder {
    /// Appends a question to the question section.
    pub fn push_question(
        &mut self,
        question: impl Into<Question>,
    ) -> Result<(), ComposeError> {
        push(&mut self.msg.question, question.into())
    }

    /// Appends a record to the answer section.
    pub fn push_answer(
        &mut self,
        record: impl Into<Record>,
    ) -> Result<(), ComposeError> {
        push(&mut self.msg.answer, record.into())
    }

    /// Appends a record to the authority section.
    pub fn push_authority(
        &mut self,
        record: impl Into<Record>,
    ) -> Result<(), ComposeError> {
        push(&mut self.msg.authority, record.into())
    }

    /// Appends a record to the additional section.
    pub fn push_additional(
        &mut self,
        record: impl Into<Record>,
    ) -> Result<(), ComposeError> {
        push(&mut self.msg.additional, record.into())
    }

    /// Finishes the message.
    #[must_use]
    pub fn finish(self) -> Message {
        self.msg
    }
}

/// Pushes `item` to `section` unless the section is full.
fn push<T>(section: &mut Vec<T>, item: T) -> Result<(), ComposeError> {
    if section.len() >= usize::from(u16::MAX) {
        return Err(ComposeError::LongSection);
    }
    section.push(item);
    Ok(())
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::Rtype;
    use crate::base::name::Name;

    #[test]
    #[cfg(feature = "rand")]
    fn new_query() {
        let question = Question::new_in(Name::root(), Rtype::NS);
        let msg = MessageBuilder::new_query(question.clone(), true);
        let header = msg.header();
        assert!(!header.qr());
        assert!(header.rd());
        assert_eq!(header.opcode(), Opcode::QUERY);
        assert_eq!(header.z(), 0);
        assert_eq!(msg.question(), &[question]);
        assert!(msg.answer().is_empty());
        assert_eq!(msg.header_counts().qdcount(), 1);

        let msg = MessageBuilder::new_query(
            Question::new_in(Name::root(), Rtype::NS),
            false,
        );
        assert!(!msg.header().rd());
    }

    #[test]
    fn answer_to() {
        let mut query = MessageBuilder::new();
        query.header_mut().set_id(7);
        query.header_mut().set_rd(true);
        query
            .push_question(Question::new_in(Name::root(), Rtype::A))
            .unwrap();
        let query = query.finish();

        let answer = MessageBuilder::answer_to(&query, Rcode::NXDOMAIN).finish();
        assert_eq!(answer.header().id(), 7);
        assert!(answer.header().qr());
        assert!(answer.header().rd());
        assert_eq!(answer.header().rcode(), Rcode::NXDOMAIN);
        assert_eq!(answer.question(), query.question());
    }

    #[test]
    fn long_section() {
        let mut section = vec![(); usize::from(u16::MAX) - 1];
        assert_eq!(push(&mut section, ()), Ok(()));
        assert_eq!(push(&mut section, ()), Err(ComposeError::LongSection));
    }
}
