use core::fmt;

use super::{Message, Record};

/// Internal type for printing a message in dig style
///
/// This is only exposed to users of this library as `impl fmt::Display`.
pub(super) struct DigPrinter<'a> {
    pub msg: &'a Message,
}

impl<'a> fmt::Display for DigPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = self.msg;

        // Header
        let header = msg.header();
        let counts = msg.header_counts();

        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, rcode: {}, id: {}",
            header.opcode(),
            header.rcode(),
            header.id()
        )?;
        write!(f, ";; flags: {}", header.flags())?;
        if header.z() != 0 {
            write!(f, " Z={}", header.z())?;
        }
        writeln!(
            f,
            "; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            counts.qdcount(),
            counts.ancount(),
            counts.nscount(),
            counts.arcount()
        )?;

        // Question
        if !msg.question().is_empty() {
            writeln!(f, "\n;; QUESTION SECTION:")?;
            for item in msg.question() {
                writeln!(
                    f,
                    ";{}\t\t{}\t{}",
                    item.qname().fqdn(),
                    item.qclass(),
                    item.qtype()
                )?;
            }
        }

        write_section(f, "ANSWER", msg.answer())?;
        write_section(f, "AUTHORITY", msg.authority())?;
        write_section(f, "ADDITIONAL", msg.additional())
    }
}

fn write_section(
    f: &mut impl fmt::Write,
    title: &str,
    section: &[Record],
) -> fmt::Result {
    if section.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n;; {} SECTION:", title)?;
    for item in section {
        writeln!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            item.owner().fqdn(),
            item.ttl(),
            item.class(),
            item.rtype(),
            item.data()
        )?;
    }
    Ok(())
}
