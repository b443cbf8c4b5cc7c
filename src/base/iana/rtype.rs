//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource records has a 16 bit type value indicating what kind
    /// of information is represented by the record. Normal query includes
    /// the type of record information sought in the question part. Some
    /// values are only valid in queries, these are the QTYPEs.
    ///
    /// The values here are those of section 3.2.2 and 3.2.3 of [RFC 1035]
    /// plus AAAA from [RFC 3596]. Any other value is carried through as
    /// is.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    /// [RFC 3596]: https://tools.ietf.org/html/rfc3596
    =>
    Rtype, u16, prefix "TYPE", "unknown record type";

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// A mail destination (obsolete, use MX).
    (MD => 3, "MD")

    /// A mail forwarder (obsolete, use MX).
    (MF => 4, "MF")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A mailbox domain name (experimental).
    (MB => 7, "MB")

    /// A mail group member (experimental).
    (MG => 8, "MG")

    /// A mail rename domain name (experimental).
    (MR => 9, "MR")

    /// A null resource record (experimental).
    (NULL => 10, "NULL")

    /// A well known service description.
    (WKS => 11, "WKS")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Host information.
    (HINFO => 13, "HINFO")

    /// Mailbox or mail list information.
    (MINFO => 14, "MINFO")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// IPv6 address.
    (AAAA => 28, "AAAA")

    /// A request for a transfer of an entire zone.
    (AXFR => 252, "AXFR")

    /// A request for mailbox-related records (MB, MG or MR).
    (MAILB => 253, "MAILB")

    /// A request for mail agent RRs (obsolete, see MX).
    (MAILA => 254, "MAILA")

    /// A request for all records the server/cache has available.
    (ANY => 255, "ANY")
}

//============ Tests =========================================================
