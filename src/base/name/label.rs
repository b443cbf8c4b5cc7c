//! Domain name labels.
//!
//! This is a private module. Its public types are re-exported by the parent
//! module.

use super::super::wire::Compose;
use core::{fmt, hash};
use octseq::builder::OctetsBuilder;

//------------ Label ---------------------------------------------------------

/// A single label of a domain name.
///
/// A label is a sequence of up to 63 octets. In wire format it is preceded
/// by an octet holding its length. The empty label is the *root label* and
/// terminates every absolute domain name.
///
/// Since labels are relatively short, this type doesn’t allocate any
/// memory but keeps the label in wire format in a 64 octet array: the
/// first octet is the length octet, the remainder is the content padded
/// with zeros.
///
/// Comparison is exact, i.e., case-sensitive. Two labels are equal only if
/// their wire formats are identical.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Label([u8; 64]);

/// # Creation
///
impl Label {
    /// The maximum length of a label’s content in octets.
    pub const MAX_LEN: usize = 63;

    /// Returns the root label.
    #[must_use]
    pub const fn root() -> Self {
        Label([0; 64])
    }

    /// Creates a label from its content.
    ///
    /// Returns an error if the slice is longer than 63 octets. An empty
    /// slice results in the root label.
    pub fn from_slice(slice: &[u8]) -> Result<Self, LongLabelError> {
        if slice.len() > Self::MAX_LEN {
            return Err(LongLabelError(()));
        }
        let mut res = [0; 64];
        res[0] = slice.len() as u8;
        res[1..=slice.len()].copy_from_slice(slice);
        Ok(Label(res))
    }
}

/// # Properties
///
impl Label {
    /// Returns the length of the label’s content.
    ///
    /// This is the value of the length octet in wire format.
    #[must_use]
    pub fn len(&self) -> u8 {
        self.0[0]
    }

    /// Returns whether this is the root label.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0[0] == 0
    }

    /// Returns whether the label is empty.
    ///
    /// This is the same as [`is_root`][Self::is_root].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// Returns the content of the label.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0[1..=usize::from(self.len())]
    }

    /// Returns the label in wire format, i.e., including the length octet.
    #[must_use]
    pub fn as_wire_slice(&self) -> &[u8] {
        &self.0[..=usize::from(self.len())]
    }

    /// Returns the length of the label in wire format.
    #[must_use]
    pub fn compose_len(&self) -> u16 {
        u16::from(self.len()) + 1
    }
}

//--- Compose

impl Compose for Label {
    fn compose<Target: OctetsBuilder + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), Target::AppendError> {
        target.append_slice(self.as_wire_slice())
    }
}

//--- AsRef

impl AsRef<[u8]> for Label {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- Hash

impl hash::Hash for Label {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_wire_slice().hash(state)
    }
}

//--- Display and Debug

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &ch in self.as_slice() {
            if ch == b' ' || ch == b'.' || ch == b'\\' {
                write!(f, "\\{}", ch as char)?;
            } else if !(0x20..0x7F).contains(&ch) {
                write!(f, "\\{:03}", ch)?;
            } else {
                write!(f, "{}", (ch as char))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Label(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

//------------ LongLabelError ------------------------------------------------

/// A label was longer than the allowed 63 octets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongLabelError(());

impl fmt::Display for LongLabelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("long label")
    }
}

impl std::error::Error for LongLabelError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn root() {
        let root = Label::root();
        assert!(root.is_root());
        assert_eq!(root.len(), 0);
        assert_eq!(root.as_slice(), b"");
        assert_eq!(root.as_wire_slice(), b"\0");
        assert_eq!(Label::from_slice(b"").unwrap(), root);
    }

    #[test]
    fn from_slice() {
        let label = Label::from_slice(b"example").unwrap();
        assert_eq!(label.len(), 7);
        assert_eq!(label.as_slice(), b"example");
        assert_eq!(label.as_wire_slice(), b"\x07example");
        assert_eq!(label.compose_len(), 8);

        assert!(Label::from_slice(&[b'x'; 63]).is_ok());
        assert_eq!(
            Label::from_slice(&[b'x'; 64]),
            Err(LongLabelError(()))
        );
    }

    #[test]
    fn case_sensitive_eq() {
        assert_ne!(
            Label::from_slice(b"COM").unwrap(),
            Label::from_slice(b"com").unwrap()
        );
    }

    #[test]
        fn display() {
        use std::string::ToString;

        assert_eq!(Label::from_slice(b"www").unwrap().to_string(), "www");
        assert_eq!(
            Label::from_slice(b"a.b\\c\x01").unwrap().to_string(),
            "a\\.b\\\\c\\001"
        );
    }
}
