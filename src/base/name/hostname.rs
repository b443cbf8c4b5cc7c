//! Checking host names entered by users.

use core::fmt;

/// The maximum length of a host name in its textual form.
const MAX_HOSTNAME_LEN: usize = 253;

/// The maximum length of a single host name label.
const MAX_LABEL_LEN: usize = 63;

/// Checks that `domain` is an acceptable host name to query for.
///
/// A host name is a non-empty sequence of labels separated by dots with an
/// optional trailing dot. Without that dot, it must not be longer than 253
/// characters. Each label is between 1 and 63 characters long, consists of
/// ASCII letters, digits, and hyphens, and neither starts nor ends with a
/// hyphen.
///
/// This is deliberately stricter than what [`Name`][super::Name] accepts
/// and is meant for input from the command line.
pub fn check_hostname(domain: &str) -> Result<(), HostnameError> {
    let err = |reason| Err(HostnameError::new(domain, reason));
    if domain.is_empty() {
        return err(HostnameReason::Empty);
    }
    let trimmed = domain.strip_suffix('.').unwrap_or(domain);
    if trimmed.is_empty() {
        return err(HostnameReason::EmptyLabel);
    }
    if trimmed.len() > MAX_HOSTNAME_LEN {
        return err(HostnameReason::TooLong);
    }
    for label in trimmed.split('.') {
        if label.is_empty() {
            return err(HostnameReason::EmptyLabel);
        }
        if label.len() > MAX_LABEL_LEN {
            return err(HostnameReason::LongLabel);
        }
        if !label.bytes().all(|ch| ch.is_ascii_alphanumeric() || ch == b'-')
        {
            return err(HostnameReason::IllegalCharacter);
        }
        if label.starts_with('-') || label.ends_with('-') {
            return err(HostnameReason::EdgeHyphen);
        }
    }
    Ok(())
}

//------------ HostnameError -------------------------------------------------

/// A host name was rejected by [`check_hostname`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HostnameError {
    domain: String,
    reason: HostnameReason,
}

impl HostnameError {
    fn new(domain: &str, reason: HostnameReason) -> Self {
        HostnameError {
            domain: domain.into(),
            reason,
        }
    }

    /// Returns the rejected host name.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns why the host name was rejected.
    pub fn reason(&self) -> HostnameReason {
        self.reason
    }
}

impl fmt::Display for HostnameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid host name '{}': {}", self.domain, self.reason)
    }
}

impl std::error::Error for HostnameError {}

//------------ HostnameReason ------------------------------------------------

/// The reason a host name was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HostnameReason {
    /// The host name was empty.
    Empty,

    /// The host name was longer than 253 characters.
    TooLong,

    /// A label was empty.
    EmptyLabel,

    /// A label was longer than 63 characters.
    LongLabel,

    /// A label contained something other than letters, digits, or hyphens.
    IllegalCharacter,

    /// A label started or ended with a hyphen.
    EdgeHyphen,
}

impl fmt::Display for HostnameReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            HostnameReason::Empty => "empty",
            HostnameReason::TooLong => "longer than 253 characters",
            HostnameReason::EmptyLabel => "empty label",
            HostnameReason::LongLabel => "label longer than 63 characters",
            HostnameReason::IllegalCharacter => "illegal character in label",
            HostnameReason::EdgeHyphen => {
                "label starts or ends with a hyphen"
            }
        })
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn reason(domain: &str) -> HostnameReason {
        check_hostname(domain).unwrap_err().reason()
    }

    #[test]
    fn accepted() {
        check_hostname("example.com").unwrap();
        check_hostname("example.com.").unwrap();
        check_hostname("a").unwrap();
        check_hostname("x-1.y2.Z3").unwrap();
        check_hostname(&"a".repeat(63)).unwrap();
    }

    #[test]
    fn rejected() {
        assert_eq!(reason(""), HostnameReason::Empty);
        assert_eq!(reason("."), HostnameReason::EmptyLabel);
        assert_eq!(reason("a..b"), HostnameReason::EmptyLabel);
        assert_eq!(reason("a.b.."), HostnameReason::EmptyLabel);
        assert_eq!(reason(&"a".repeat(64)), HostnameReason::LongLabel);
        assert_eq!(reason("foo_bar.com"), HostnameReason::IllegalCharacter);
        assert_eq!(reason("-foo.com"), HostnameReason::EdgeHyphen);
        assert_eq!(reason("foo-.com"), HostnameReason::EdgeHyphen);

        let long = vec!["a".repeat(63); 4].join(".");
        assert_eq!(reason(&long), HostnameReason::TooLong);
        assert_eq!(reason(&format!("{}.", long)), HostnameReason::TooLong);
    }

    #[test]
    fn longest() {
        // Three labels of 63 plus one of 61 make 253 characters.
        let longest = format!(
            "{}.{}",
            vec!["a".repeat(63); 3].join("."),
            "b".repeat(61)
        );
        assert_eq!(longest.len(), 253);
        check_hostname(&longest).unwrap();
        check_hostname(&format!("{}.", longest)).unwrap();
        assert_eq!(
            reason(&format!("{}b", longest)),
            HostnameReason::TooLong
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            check_hostname("a..b").unwrap_err().to_string(),
            "invalid host name 'a..b': empty label"
        );
    }
}
