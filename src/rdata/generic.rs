//! Record data of types this crate doesn’t know about.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::{Aaaa, A};
use crate::base::iana::Rtype;
use crate::utils::base16;
use core::fmt;

//------------ Generic -------------------------------------------------------

/// Record data kept as a plain octets sequence.
///
/// This type is used for all record types other than those with a
/// dedicated type. It is also used when the record data of a known type
/// has the wrong length, so that the data survives a round trip unchanged.
///
/// The presentation format is the generic one defined in [RFC 3597]: the
/// token `\#`, the length of the data in octets, and the data in hex.
///
/// [RFC 3597]: https://tools.ietf.org/html/rfc3597
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Generic {
    /// The record type of this data.
    rtype: Rtype,

    /// The record data.
    data: Vec<u8>,
}

impl Generic {
    /// Creates generic record data from its type and octets.
    ///
    /// Fails if the data is longer than 65535 octets or if it is data a
    /// parser would turn into one of the dedicated record data types. The
    /// latter are NS data of any length, A data of four octets, and AAAA
    /// data of sixteen octets.
    pub fn from_octets(
        rtype: Rtype,
        data: Vec<u8>,
    ) -> Result<Self, GenericError> {
        check_data(rtype, data.len())?;
        Ok(Generic { rtype, data })
    }

    /// Creates generic record data without checking the length.
    ///
    /// Only for data taken from a message where the length came from a
    /// 16 bit field.
    pub(crate) fn from_data_unchecked(rtype: Rtype, data: Vec<u8>) -> Self {
        Generic { rtype, data }
    }

    /// Creates generic record data from its presentation format.
    ///
    /// The string has to start with `\#` followed by the length and the
    /// hex-encoded data. White space in the data is allowed.
    pub fn from_presentation(
        rtype: Rtype,
        s: &str,
    ) -> Result<Self, GenericFromStrError> {
        let s = s
            .trim_start()
            .strip_prefix("\\#")
            .ok_or(GenericFromStrError::MissingMarker)?;
        let s = s.trim_start();
        let (len, data) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let len = len
            .parse::<u16>()
            .map_err(|_| GenericFromStrError::BadLength)?;
        let data = base16::decode_vec(data)
            .map_err(|_| GenericFromStrError::BadData)?;
        if data.len() != usize::from(len) {
            return Err(GenericFromStrError::BadLength);
        }
        check_data(rtype, data.len())
            .map_err(|_| GenericFromStrError::TypedData)?;
        Ok(Generic { rtype, data })
    }

    /// Returns the record type this data is for.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns a reference to the record data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Converts the value into the record data.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

//--- Display and Debug

impl fmt::Display for Generic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.data.len())?;
        if !self.data.is_empty() {
            write!(f, " {}", base16::encode_display(&self.data))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Generic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Generic({} {})", self.rtype, self)
    }
}

/// Checks that data of this type and length stays generic on the wire.
fn check_data(rtype: Rtype, len: usize) -> Result<(), GenericError> {
    if len > 0xFFFF {
        return Err(GenericError::LongData);
    }
    match rtype {
        Rtype::NS => Err(GenericError::TypedData),
        Rtype::A if len == usize::from(A::RDLEN) => {
            Err(GenericError::TypedData)
        }
        Rtype::AAAA if len == usize::from(Aaaa::RDLEN) => {
            Err(GenericError::TypedData)
        }
        _ => Ok(()),
    }
}

//------------ GenericError --------------------------------------------------

/// Octets can’t be used as generic record data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GenericError {
    /// The data was longer than 65535 octets.
    LongData,

    /// The data belongs into one of the dedicated record data types.
    TypedData,
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            GenericError::LongData => "record data too long",
            GenericError::TypedData => "record data has a dedicated type",
        })
    }
}

impl std::error::Error for GenericError {}

//------------ GenericFromStrError -------------------------------------------

/// The presentation format of generic record data was invalid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GenericFromStrError {
    /// The leading `\#` token was missing.
    MissingMarker,

    /// The length was not a number or didn’t match the data.
    BadLength,

    /// The data wasn’t valid hex.
    BadData,

    /// The data belongs into one of the dedicated record data types.
    TypedData,
}

impl fmt::Display for GenericFromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            GenericFromStrError::MissingMarker => "'\\#' expected",
            GenericFromStrError::BadLength => "incorrect data length",
            GenericFromStrError::BadData => "invalid hex data",
            GenericFromStrError::TypedData => {
                "record data has a dedicated type"
            }
        })
    }
}

impl std::error::Error for GenericFromStrError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let data =
            Generic::from_octets(Rtype::from_int(65280), vec![0xAB, 0x01])
                .unwrap();
        assert_eq!(data.to_string(), "\\# 2 AB01");

        let empty = Generic::from_octets(Rtype::NULL, Vec::new()).unwrap();
        assert_eq!(empty.to_string(), "\\# 0");
    }

    #[test]
    fn from_presentation() {
        let data = Generic::from_presentation(Rtype::TXT, "\\# 3 01 ab02")
            .unwrap();
        assert_eq!(data.data(), &[0x01, 0xAB, 0x02]);
        assert_eq!(data.rtype(), Rtype::TXT);
        assert_eq!(
            Generic::from_presentation(Rtype::TXT, "\\# 0").unwrap().data(),
            b""
        );
        assert_eq!(
            Generic::from_presentation(Rtype::TXT, "\\# 2 01"),
            Err(GenericFromStrError::BadLength)
        );
        assert_eq!(
            Generic::from_presentation(Rtype::TXT, "2 0102"),
            Err(GenericFromStrError::MissingMarker)
        );
        assert_eq!(
            Generic::from_presentation(Rtype::TXT, "\\# 1 zz"),
            Err(GenericFromStrError::BadData)
        );
    }

    #[test]
    fn long() {
        assert_eq!(
            Generic::from_octets(Rtype::NULL, vec![0; 0x10000]),
            Err(GenericError::LongData)
        );
        assert!(Generic::from_octets(Rtype::NULL, vec![0; 0xFFFF]).is_ok());
    }

    #[test]
    fn typed_data() {
        assert_eq!(
            Generic::from_octets(Rtype::A, vec![1, 2, 3, 4]),
            Err(GenericError::TypedData)
        );
        assert_eq!(
            Generic::from_octets(Rtype::AAAA, vec![0; 16]),
            Err(GenericError::TypedData)
        );
        assert_eq!(
            Generic::from_octets(Rtype::NS, vec![0xff]),
            Err(GenericError::TypedData)
        );
        assert_eq!(
            Generic::from_octets(Rtype::NS, Vec::new()),
            Err(GenericError::TypedData)
        );
        assert!(Generic::from_octets(Rtype::A, vec![1, 2, 3]).is_ok());
        assert!(Generic::from_octets(Rtype::AAAA, vec![0; 4]).is_ok());
        assert_eq!(
            Generic::from_presentation(Rtype::A, "\\# 4 01020304"),
            Err(GenericFromStrError::TypedData)
        );
        assert_eq!(
            Generic::from_presentation(Rtype::NS, "\\# 0"),
            Err(GenericFromStrError::TypedData)
        );
    }
}
