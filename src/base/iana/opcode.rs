//! DNS OpCodes.

//------------ Opcode --------------------------------------------------------

int_enum! {
    /// DNS OpCodes.
    ///
    /// The opcode specifies the kind of query to be performed. It lives in
    /// four bits of the message header, so only the lower four bits of the
    /// wrapped value are ever transmitted.
    ///
    /// The opcode and its initial set of values are defined in [RFC 1035].
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    =>
    Opcode, u8, decimal, "unknown opcode";

    /// A standard query (0).
    ///
    /// This query requests all records matching the name, class, and record
    /// type given in the query’s question section.
    (QUERY => 0, "QUERY")

    /// An inverse query (IQUERY) (1, obsolete).
    ///
    /// Retired by [RFC 3425].
    ///
    /// [RFC 3425]: https://tools.ietf.org/html/rfc3425
    (IQUERY => 1, "IQUERY")

    /// A server status request (2).
    (STATUS => 2, "STATUS")
}
