//! The macro defining the IANA registry types.

/// Defines a newtype over an integer for one IANA registry.
///
/// The invocation starts with the type’s attributes, followed by `=>`,
/// the type name, the wrapped integer type, the generic text notation
/// and the message for the `FromStr` error. The notation is either
/// `prefix "TYPE"`, writing unknown values as e.g. `TYPE65`, or
/// `decimal`, writing them as a plain number. Then the known values are
/// listed as `(CONST => value, "MNEMONIC")`.
///
/// The type gets an associated constant per known value, conversion from
/// and into the integer, mnemonic lookup both ways, `parse` and `compose`
/// for the wire format, as well as `Debug`, `Display`, and `FromStr`. The
/// module gets a `FromStrError` type.
macro_rules! int_enum {
    ( $(#[$attr:meta])* =>
      $ianatype:ident, $inttype:ident, $notation:ident $($prefix:literal)?,
      $error:literal;
      $( $(#[$variant_attr:meta])* ( $variant:ident =>
                                        $value:expr, $mnemonic:literal) )* ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $ianatype($inttype);

        impl $ianatype {
            $(
                $(#[$variant_attr])*
                pub const $variant: $ianatype = $ianatype($value);
            )*

            /// The known values and their mnemonics.
            const MNEMONICS: &'static [($ianatype, &'static str)] = &[
                $( ($ianatype::$variant, $mnemonic), )*
            ];

            /// The length of the wire format.
            pub const COMPOSE_LEN: u16 =
                <$inttype as $crate::base::wire::Compose>::COMPOSE_LEN;

            #[must_use]
            pub const fn from_int(value: $inttype) -> Self {
                Self(value)
            }

            #[must_use]
            pub const fn to_int(self) -> $inttype {
                self.0
            }

            /// Looks up a value by its mnemonic, ignoring case.
            #[must_use]
            pub fn from_mnemonic(m: &[u8]) -> Option<Self> {
                Self::MNEMONICS
                    .iter()
                    .find(|(_, known)| m.eq_ignore_ascii_case(known.as_bytes()))
                    .map(|(value, _)| *value)
            }

            /// Returns the mnemonic if the value is a known one.
            #[must_use]
            pub fn to_mnemonic(self) -> Option<&'static str> {
                Self::MNEMONICS
                    .iter()
                    .find(|(value, _)| *value == self)
                    .map(|(_, mnemonic)| *mnemonic)
            }

            pub fn parse(
                parser: &mut octseq::parse::Parser<'_, [u8]>
            ) -> Result<Self, $crate::base::wire::ParseError> {
                <$inttype as $crate::base::wire::Parse>::parse(parser)
                    .map(Self)
            }

            pub fn compose<Target: octseq::builder::OctetsBuilder + ?Sized>(
                &self,
                target: &mut Target
            ) -> Result<(), Target::AppendError> {
                $crate::base::wire::Compose::compose(&self.0, target)
            }
        }

        impl From<$inttype> for $ianatype {
            fn from(value: $inttype) -> Self {
                Self(value)
            }
        }

        impl From<$ianatype> for $inttype {
            fn from(value: $ianatype) -> Self {
                value.0
            }
        }

        impl core::fmt::Debug for $ianatype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self.to_mnemonic() {
                    Some(m) => {
                        write!(f, concat!(stringify!($ianatype), "::{}"), m)
                    }
                    None => write!(
                        f, concat!(stringify!($ianatype), "({})"), self.0
                    ),
                }
            }
        }

        impl core::fmt::Display for $ianatype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self.to_mnemonic() {
                    Some(m) => f.write_str(m),
                    None => write!(
                        f, "{}{}", int_enum!(@prefix $($prefix)?), self.0
                    ),
                }
            }
        }

        impl core::str::FromStr for $ianatype {
            type Err = FromStrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Some(res) = Self::from_mnemonic(s.as_bytes()) {
                    return Ok(res)
                }
                int_enum!(@generic $notation $($prefix)?, s)
                    .and_then(|digits| digits.parse().ok())
                    .map(Self)
                    .ok_or(FromStrError(()))
            }
        }

        /// A string was neither a known mnemonic nor in generic notation.
        #[derive(Clone, Debug)]
        pub struct FromStrError(());

        impl core::fmt::Display for FromStrError {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str($error)
            }
        }

        impl std::error::Error for FromStrError {}
    };

    (@prefix $prefix:literal) => { $prefix };
    (@prefix) => { "" };

    // Strips the generic notation, returning the digits.
    (@generic prefix $prefix:literal, $s:expr) => {
        match ($s.get(..$prefix.len()), $s.get($prefix.len()..)) {
            (Some(head), Some(digits))
                if head.eq_ignore_ascii_case($prefix) && !digits.is_empty() =>
            {
                Some(digits)
            }
            _ => None,
        }
    };
    (@generic decimal, $s:expr) => { Some($s) };
}
