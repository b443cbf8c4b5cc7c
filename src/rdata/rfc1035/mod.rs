//! Record data from [RFC 1035]: initial record types.
//!
//! Only the address and name server types are implemented. Data of the
//! other types defined by the RFC is kept as [`Generic`][super::Generic]
//! record data.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

pub use self::a::A;
pub use self::ns::Ns;

mod a;
mod ns;
