//! Hex digits for the generic presentation of record data.
//!
//! [RFC 3597] writes the data of records of unknown type as Base 16, i.e.,
//! plain hex digits as defined in [RFC 4648]. We encode using upper case
//! letters and accept either case when decoding.
//!
//! [RFC 3597]: https://tools.ietf.org/html/rfc3597
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use core::fmt;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Decodes hex digits into a vec, skipping over white space.
pub fn decode_vec(s: &str) -> Result<Vec<u8>, DecodeError> {
    let mut digits = s
        .chars()
        .filter(|ch| !ch.is_ascii_whitespace())
        .map(|ch| {
            ch.to_digit(16)
                .map(|value| value as u8)
                .ok_or(DecodeError::IllegalChar(ch))
        });
    let mut res = Vec::with_capacity(s.len() / 2);
    while let Some(high) = digits.next() {
        let low = digits.next().ok_or(DecodeError::ShortInput)??;
        res.push(high? << 4 | low);
    }
    Ok(res)
}

/// Returns a value displaying `octets` as upper case hex digits.
pub fn encode_display<Octets: AsRef<[u8]> + ?Sized>(
    octets: &Octets,
) -> impl fmt::Display + '_ {
    struct Hex<'a>(&'a [u8]);

    impl<'a> fmt::Display for Hex<'a> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            use core::fmt::Write;

            for &octet in self.0 {
                f.write_char(char::from(DIGITS[usize::from(octet >> 4)]))?;
                f.write_char(char::from(DIGITS[usize::from(octet & 0x0F)]))?;
            }
            Ok(())
        }
    }

    Hex(octets.as_ref())
}

/// Returns `octets` as a string of upper case hex digits.
pub fn encode_string<Octets: AsRef<[u8]> + ?Sized>(octets: &Octets) -> String {
    encode_display(octets).to_string()
}

//------------ DecodeError ---------------------------------------------------

/// Hex digits couldn’t be decoded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// A character wasn’t a hex digit.
    IllegalChar(char),

    /// There was an odd number of digits.
    ShortInput,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::IllegalChar(ch) => {
                write!(f, "illegal character '{}'", ch)
            }
            DecodeError::ShortInput => f.write_str("odd number of digits"),
        }
    }
}

impl std::error::Error for DecodeError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode() {
        assert_eq!(encode_string(b""), "");
        assert_eq!(encode_string(b"\x00\x7f\xab"), "007FAB");
        assert_eq!(encode_display(&[0xDE, 0xAD][..]).to_string(), "DEAD");
    }

    #[test]
    fn decode() {
        assert_eq!(decode_vec("007fAB"), Ok(vec![0x00, 0x7F, 0xAB]));
        assert_eq!(decode_vec("00 7f"), Ok(vec![0x00, 0x7F]));
        assert_eq!(decode_vec(""), Ok(vec![]));
        assert_eq!(decode_vec("0"), Err(DecodeError::ShortInput));
        assert_eq!(decode_vec("0g"), Err(DecodeError::IllegalChar('g')));
        assert_eq!(decode_vec("g0"), Err(DecodeError::IllegalChar('g')));
    }
}
