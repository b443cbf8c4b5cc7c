//! Error type for the client.

use crate::base::name::{HostnameError, NameError};
use crate::base::wire::{ComposeError, ParseError};
use std::error;
use std::fmt::{Display, Formatter};
use std::io;
use std::sync::Arc;

//------------ Error ---------------------------------------------------------

/// Error type for client transports.
#[derive(Clone, Debug)]
pub enum Error {
    /// The domain to query for isn’t a valid host name.
    Hostname(HostnameError),

    /// The domain to query for couldn’t be turned into a domain name.
    Name(NameError),

    /// The query couldn’t be composed.
    Compose(ComposeError),

    /// The response couldn’t be parsed.
    Parse(ParseError),

    /// Connecting to the server failed.
    Connect(Arc<io::Error>),

    /// Sending the query failed.
    Send(Arc<io::Error>),

    /// Only part of the query was sent.
    ShortSend,

    /// Receiving the response failed.
    Receive(Arc<io::Error>),

    /// No response was received before the timeout expired.
    Timeout,

    /// The response received over a stream doesn’t match the query.
    WrongReply,
}

impl Error {
    /// Returns whether a new attempt may succeed where this one failed.
    ///
    /// This is true for timeouts and I/O errors.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Connect(_)
                | Error::Send(_)
                | Error::ShortSend
                | Error::Receive(_)
                | Error::Timeout
        )
    }
}

//--- From

impl From<HostnameError> for Error {
    fn from(err: HostnameError) -> Self {
        Error::Hostname(err)
    }
}

impl From<NameError> for Error {
    fn from(err: NameError) -> Self {
        Error::Name(err)
    }
}

impl From<ComposeError> for Error {
    fn from(err: ComposeError) -> Self {
        Error::Compose(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

//--- Display and Error

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::Hostname(err) => Display::fmt(err, f),
            Error::Name(err) => write!(f, "invalid domain name: {}", err),
            Error::Compose(err) => {
                write!(f, "failed to compose query: {}", err)
            }
            Error::Parse(err) => {
                write!(f, "failed to parse response: {}", err)
            }
            Error::Connect(err) => {
                write!(f, "failed to connect to server: {}", err)
            }
            Error::Send(err) => write!(f, "failed to send query: {}", err),
            Error::ShortSend => write!(f, "query was only partially sent"),
            Error::Receive(err) => {
                write!(f, "failed to receive response: {}", err)
            }
            Error::Timeout => write!(f, "timeout waiting for response"),
            Error::WrongReply => write!(f, "reply does not match query"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Hostname(err) => Some(err),
            Error::Name(err) => Some(err),
            Error::Compose(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Connect(err) => Some(err.as_ref()),
            Error::Send(err) => Some(err.as_ref()),
            Error::Receive(err) => Some(err.as_ref()),
            Error::ShortSend | Error::Timeout | Error::WrongReply => None,
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn retryable() {
        assert!(Error::Timeout.is_retryable());
        assert!(Error::Receive(Arc::new(io::ErrorKind::Other.into()))
            .is_retryable());
        assert!(!Error::Parse(ParseError::TruncatedRecord).is_retryable());
        assert!(!Error::WrongReply.is_retryable());
    }

    #[test]
    fn source() {
        let err = Error::from(ParseError::MalformedLabel);
        assert_eq!(err.to_string(), "failed to parse response: malformed label");
        assert!(err.source().is_some());
        assert!(Error::Timeout.source().is_none());
    }
}
