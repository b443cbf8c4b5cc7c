//! Framing messages for transport.
//!
//! Datagram transports carry a message as the complete payload of a
//! datagram. Stream transports need to tell where one message ends and the
//! next begins, so each message is preceded by its length as a 16 bit
//! integer in network byte order as described in section 4.2.2 of
//! [RFC 1035]. The length doesn’t include the two octets of the prefix.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::message::Message;
use super::wire::{ComposeError, ParseError};
use core::fmt;

//------------ Transport -----------------------------------------------------

/// The kind of transport a message is sent over.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Transport {
    /// A datagram transport such as UDP.
    #[default]
    Datagram,

    /// A stream transport such as TCP.
    Stream,
}

impl Transport {
    /// The largest message traditionally sent over a datagram transport.
    pub const MAX_DATAGRAM_SIZE: usize = 512;

    /// The largest message that can be sent over a stream transport.
    pub const MAX_STREAM_SIZE: usize = 0xFFFF;

    /// Returns the maximum size of a message for this transport.
    ///
    /// This is the size of the receive buffer a client needs.
    pub fn max_message_size(self) -> usize {
        match self {
            Transport::Datagram => Self::MAX_DATAGRAM_SIZE,
            Transport::Stream => Self::MAX_STREAM_SIZE,
        }
    }

    /// Returns whether this is a stream transport.
    pub fn is_stream(self) -> bool {
        matches!(self, Transport::Stream)
    }
}

//--- Display

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Transport::Datagram => "udp",
            Transport::Stream => "tcp",
        })
    }
}

//------------ frame and unframe ---------------------------------------------

/// Frames the wire format of a message for the given transport.
///
/// For a stream transport, the result is the message preceded by the two
/// octet length. For a datagram transport, it is a copy of the message.
/// Fails with [`ComposeError::LongMessage`] if a message for a stream
/// transport is longer than 65535 octets.
pub fn frame(
    octets: &[u8],
    transport: Transport,
) -> Result<Vec<u8>, ComposeError> {
    match transport {
        Transport::Datagram => Ok(octets.to_vec()),
        Transport::Stream => {
            let len = u16::try_from(octets.len())
                .map_err(|_| ComposeError::LongMessage)?;
            let mut res = Vec::with_capacity(octets.len() + 2);
            res.extend_from_slice(&len.to_be_bytes());
            res.extend_from_slice(octets);
            Ok(res)
        }
    }
}

/// Removes the framing from a received message.
///
/// For a stream transport, the first two octets must hold the length of
/// the remaining octets. If they are missing or the length doesn’t match,
/// the function fails with [`ParseError::FrameLengthMismatch`]. For a
/// datagram transport, the octets are returned unchanged.
pub fn unframe(
    octets: &[u8],
    transport: Transport,
) -> Result<&[u8], ParseError> {
    match transport {
        Transport::Datagram => Ok(octets),
        Transport::Stream => {
            let (len, msg) = match octets {
                [high, low, msg @ ..] => {
                    (u16::from_be_bytes([*high, *low]), msg)
                }
                _ => return Err(ParseError::FrameLengthMismatch),
            };
            if usize::from(len) != msg.len() {
                return Err(ParseError::FrameLengthMismatch);
            }
            Ok(msg)
        }
    }
}

impl Message {
    /// Encodes the message and frames it for the given transport.
    pub fn encode_framed(
        &self,
        transport: Transport,
    ) -> Result<Vec<u8>, ComposeError> {
        frame(&self.encode()?, transport)
    }

    /// Removes the framing from `octets` and decodes the message.
    pub fn decode_framed(
        octets: &[u8],
        transport: Transport,
    ) -> Result<Self, ParseError> {
        Self::decode(unframe(octets, transport)?)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stream() {
        let msg = [0x42; 25];
        let framed = frame(&msg, Transport::Stream).unwrap();
        assert_eq!(framed.len(), 27);
        assert_eq!(&framed[..2], &[0x00, 0x19]);
        assert_eq!(unframe(&framed, Transport::Stream), Ok(&msg[..]));
    }

    #[test]
    fn datagram() {
        let msg = [0x42; 25];
        let framed = frame(&msg, Transport::Datagram).unwrap();
        assert_eq!(framed, msg);
        assert_eq!(unframe(&framed, Transport::Datagram), Ok(&msg[..]));
    }

    #[test]
    fn stream_mismatch() {
        assert_eq!(
            unframe(&[0x00, 0x03, 1, 2], Transport::Stream),
            Err(ParseError::FrameLengthMismatch)
        );
        assert_eq!(
            unframe(&[0x00, 0x01, 1, 2], Transport::Stream),
            Err(ParseError::FrameLengthMismatch)
        );
        assert_eq!(
            unframe(&[0x00], Transport::Stream),
            Err(ParseError::FrameLengthMismatch)
        );
        assert_eq!(unframe(&[0x00, 0x00], Transport::Stream), Ok(&[][..]));
    }

    #[test]
    fn stream_too_long() {
        let msg = vec![0; 0x10000];
        assert_eq!(
            frame(&msg, Transport::Stream),
            Err(ComposeError::LongMessage)
        );
        assert!(frame(&msg[1..], Transport::Stream).is_ok());
    }

    #[test]
    fn max_message_size() {
        assert_eq!(Transport::Datagram.max_message_size(), 512);
        assert_eq!(Transport::Stream.max_message_size(), 65535);
    }
}
