//! DNS response codes.

//------------ Rcode ---------------------------------------------------------

int_enum! {
    /// DNS Response Codes.
    ///
    /// The response code of a response indicates what happend on the server
    /// when trying to answer the query. The code is a 4 bit value in the
    /// message header.
    ///
    /// The values are defined in section 4.1.1 of [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    =>
    Rcode, u8, decimal, "unknown rcode";

    /// No error condition.
    (NOERROR => 0, "NOERROR")

    /// Format error.
    ///
    /// The name server was unable to interpret the query.
    (FORMERR => 1, "FORMERR")

    /// Server failure.
    ///
    /// The name server was unable to process this query due to a problem
    /// with the name server.
    (SERVFAIL => 2, "SERVFAIL")

    /// Name error.
    ///
    /// The domain name given in the query does not exist at the name server.
    (NXDOMAIN => 3, "NXDOMAIN")

    /// Not implemented.
    ///
    /// The name server does not support the requested kind of query.
    (NOTIMP => 4, "NOTIMP")

    /// Query refused.
    ///
    /// The name server refused to perform the operation requested by the
    /// query for policy reasons.
    (REFUSED => 5, "REFUSED")
}

#[cfg(test)]
mod test {
    use super::Rcode;
    use core::str::FromStr;
    use std::string::ToString;

    #[test]
    fn mnemonics() {
        assert_eq!(Rcode::from_str("nxdomain").unwrap(), Rcode::NXDOMAIN);
        assert_eq!(Rcode::from_str("9").unwrap(), Rcode::from_int(9));
        assert_eq!(Rcode::REFUSED.to_string(), "REFUSED");
        assert_eq!(Rcode::from_int(11).to_string(), "11");
    }
}
