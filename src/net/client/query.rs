//! The client sending queries.

use super::config::Config;
use super::error::Error;
use crate::base::iana::Rtype;
use crate::base::name::{check_hostname, Name};
use crate::base::{Message, MessageBuilder, Question, Transport};
use core::str::FromStr;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};
use tokio::time::{timeout, Instant};
use tracing::{debug, trace, warn};

//------------ Client --------------------------------------------------------

/// A client for a single name server.
///
/// The client sends one query at a time. Each call to
/// [`query`][Self::query] or [`request`][Self::request] makes up to one
/// plus the configured number of retries attempts, every one of them
/// limited by the configured timeout.
#[derive(Clone, Debug)]
pub struct Client {
    config: Config,
}

impl Client {
    /// Creates a new client from the given config.
    pub fn new(config: Config) -> Self {
        Client { config }
    }

    /// Returns the config of the client.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Queries the name server for records of `qtype` for `domain`.
    ///
    /// The domain is checked to be a valid host name first. The query has
    /// a random ID, a single question of class IN, and the RD flag as
    /// configured.
    pub async fn query(
        &self,
        domain: &str,
        qtype: Rtype,
    ) -> Result<Message, Error> {
        check_hostname(domain)?;
        let qname = Name::from_str(domain)?;
        let query = MessageBuilder::new_query(
            Question::new_in(qname, qtype),
            self.config.recursion_desired(),
        );
        self.request(&query).await
    }

    /// Sends a query message to the name server and returns the response.
    ///
    /// Attempts that time out or fail with an I/O error are repeated as
    /// often as configured. Errors parsing the response are returned right
    /// away.
    pub async fn request(&self, query: &Message) -> Result<Message, Error> {
        let transport = self.config.transport();
        let octets = query.encode_framed(transport)?;
        let mut retries = 0;
        loop {
            debug!(
                server = %self.config.server(),
                %transport,
                size = octets.len(),
                id = query.header().id(),
                "sending query"
            );
            let res = match timeout(
                self.config.timeout(),
                self.attempt(&octets, query),
            )
            .await
            {
                Ok(res) => res,
                Err(_) => Err(Error::Timeout),
            };
            match res {
                Ok(answer) => {
                    report_anomalies(&answer);
                    return Ok(answer);
                }
                Err(err)
                    if err.is_retryable() && retries < self.config.retries() =>
                {
                    retries += 1;
                    trace!(%err, retries, "attempt failed, retrying");
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Makes a single attempt over the configured transport.
    async fn attempt(
        &self,
        octets: &[u8],
        query: &Message,
    ) -> Result<Message, Error> {
        match self.config.transport() {
            Transport::Datagram => self.attempt_dgram(octets, query).await,
            Transport::Stream => self.attempt_stream(octets, query).await,
        }
    }

    /// Makes a single attempt over UDP.
    ///
    /// Datagrams that fail to decode or are not an answer to the query are
    /// ignored.
    async fn attempt_dgram(
        &self,
        octets: &[u8],
        query: &Message,
    ) -> Result<Message, Error> {
        let server = self.config.server();
        let sock = UdpSocket::bind(unspecified_for(server))
            .await
            .map_err(|err| Error::Connect(Arc::new(err)))?;
        sock.connect(server)
            .await
            .map_err(|err| Error::Connect(Arc::new(err)))?;
        let sent = sock
            .send(octets)
            .await
            .map_err(|err| Error::Send(Arc::new(err)))?;
        if sent != octets.len() {
            return Err(Error::ShortSend);
        }

        let start = Instant::now();
        let mut buf = vec![0; Transport::Datagram.max_message_size()];
        loop {
            let len = sock
                .recv(&mut buf)
                .await
                .map_err(|err| Error::Receive(Arc::new(err)))?;
            debug!(size = len, elapsed = ?start.elapsed(), "received response");
            let answer =
                match Message::decode_framed(&buf[..len], Transport::Datagram)
                {
                    Ok(answer) => answer,
                    Err(err) => {
                        warn!(%err, "ignoring undecodable datagram");
                        continue;
                    }
                };
            if answer.is_answer_to(query) {
                return Ok(answer);
            }
            warn!(
                id = answer.header().id(),
                expected = query.header().id(),
                "ignoring datagram that doesn’t answer the query"
            );
        }
    }

    /// Makes a single attempt over a new TCP connection.
    async fn attempt_stream(
        &self,
        octets: &[u8],
        query: &Message,
    ) -> Result<Message, Error> {
        let mut stream = TcpStream::connect(self.config.server())
            .await
            .map_err(|err| Error::Connect(Arc::new(err)))?;
        stream
            .write_all(octets)
            .await
            .map_err(|err| Error::Send(Arc::new(err)))?;

        let len = stream
            .read_u16()
            .await
            .map_err(|err| Error::Receive(Arc::new(err)))?;
        let mut buf = vec![0; usize::from(len) + 2];
        buf[..2].copy_from_slice(&len.to_be_bytes());
        stream
            .read_exact(&mut buf[2..])
            .await
            .map_err(|err| Error::Receive(Arc::new(err)))?;
        debug!(size = buf.len(), "received response");

        let answer = Message::decode_framed(&buf, Transport::Stream)?;
        if !answer.is_answer_to(query) {
            warn!(
                id = answer.header().id(),
                expected = query.header().id(),
                "response doesn’t answer the query"
            );
            return Err(Error::WrongReply);
        }
        Ok(answer)
    }
}

/// Returns the unspecified address of the same family as `addr`.
fn unspecified_for(addr: SocketAddr) -> SocketAddr {
    match addr {
        SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
        SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
    }
}

/// Logs a warning for every record with an anomalous TTL.
fn report_anomalies(answer: &Message) {
    for record in answer.anomalous_ttls() {
        warn!(
            owner = %record.owner(),
            rtype = %record.rtype(),
            ttl = record.ttl().as_signed(),
            "record has a negative TTL"
        );
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::name::HostnameReason;

    #[test]
    fn invalid_hostname() {
        let client = Client::new(Config::new());
        let res = tokio_test::block_on(client.query("foo..bar", Rtype::A));
        match res {
            Err(Error::Hostname(err)) => {
                assert_eq!(err.reason(), HostnameReason::EmptyLabel)
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn unspecified() {
        let v4: SocketAddr = "192.0.2.1:53".parse().unwrap();
        assert_eq!(unspecified_for(v4), "0.0.0.0:0".parse().unwrap());
        let v6: SocketAddr = "[2001:db8::1]:53".parse().unwrap();
        assert_eq!(unspecified_for(v6), "[::]:0".parse().unwrap());
    }
}
