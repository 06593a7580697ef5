//! Strongly-typed identifiers for reference-table rows.
//!
//! Every row in the species, stat, nature, and type tables is addressed by a
//! name. Names are normalized to ASCII upper case on construction so lookups
//! behave the same regardless of how a data file or caller spells them.

macro_rules! data_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier, normalizing it to upper case.
            pub fn new(name: impl AsRef<str>) -> Self {
                Self(name.as_ref().trim().to_ascii_uppercase())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl core::str::FromStr for $name {
            type Err = core::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::new(s))
            }
        }
    };
}

data_id!(
    /// Identifier of a species row (e.g. `GARCHOMP`).
    SpeciesId
);

data_id!(
    /// Identifier of a stat row (e.g. `HP`, `ATTACK`, `ACCURACY`).
    StatId
);

data_id!(
    /// Identifier of a nature row (e.g. `ADAMANT`).
    NatureId
);

data_id!(
    /// Identifier of an elemental type row (e.g. `FIGHTING`).
    TypeId
);
