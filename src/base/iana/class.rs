//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. In practice, only the IN class is really
    /// relevant.
    ///
    /// Classes are represented by a 16 bit value. See [RFC 1035], section
    /// 3.2.4 and 3.2.5, for the values defined there.
    ///
    /// [RFC 1035]: https://tools.ietf.org/html/rfc1035
    =>
    Class, u16, prefix "CLASS", "unknown class";

    /// Internet (IN).
    (IN => 1, "IN")

    /// CSNET (CS).
    ///
    /// Obsolete and only used in examples in some obsolete RFCs.
    (CS => 2, "CS")

    /// Chaosnet (CH).
    ///
    /// Reused by BIND for built-in server information zones.
    (CH => 3, "CH")

    /// Hesiod (HS).
    (HS => 4, "HS")

    /// Query class * (ANY).
    ///
    /// This class can be used in a query to indicate that records for the
    /// given name from any class are requested.
    (ANY => 0xFF, "*")
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::Class;
    use core::str::FromStr;
    use std::string::ToString;

    #[test]
    fn from_str() {
        assert_eq!(Class::from_str("in").unwrap(), Class::IN);
        assert_eq!(Class::from_str("*").unwrap(), Class::ANY);
        assert_eq!(Class::from_str("CLASS77").unwrap(), Class::from_int(77));
        assert!(Class::from_str("CLASS").is_err());
        assert!(Class::from_str("bogus").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Class::CH.to_string(), "CH");
        assert_eq!(Class::from_int(77).to_string(), "CLASS77");
        assert_eq!(format!("{:?}", Class::IN), "Class::IN");
        assert_eq!(format!("{:?}", Class::from_int(9)), "Class(9)");
    }
}
