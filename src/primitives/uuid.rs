//! The `uuid` primitive: a 16-octet RFC-4122 identifier, built on the [`uuid`] crate.

use std::str::FromStr;

use crate::error::Error;
use crate::fixed_width::UUID_WIDTH;

/// A universally unique identifier as defined by RFC-4122 §4.1.2.
///
/// encoding code = 0x98, category = fixed, width = 16.
///
/// Accepts, via its `From`/`TryFrom` impls, the three shapes AMQP 1.0 allows as input: 16 raw
/// octets, a [`uuid::Uuid`], or a canonical dashed-hex string.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Uuid(uuid::Uuid);

impl Uuid {
    /// Borrows the UUID as its 16-octet big-endian form.
    pub fn as_bytes(&self) -> &[u8; UUID_WIDTH] {
        self.0.as_bytes()
    }

    /// Consumes the wrapper, returning the inner [`uuid::Uuid`].
    pub fn into_inner(self) -> uuid::Uuid {
        self.0
    }
}

impl From<[u8; UUID_WIDTH]> for Uuid {
    fn from(val: [u8; UUID_WIDTH]) -> Self {
        Self(uuid::Uuid::from_bytes(val))
    }
}

impl From<uuid::Uuid> for Uuid {
    fn from(val: uuid::Uuid) -> Self {
        Self(val)
    }
}

impl From<Uuid> for [u8; UUID_WIDTH] {
    fn from(val: Uuid) -> Self {
        *val.0.as_bytes()
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; UUID_WIDTH] = value
            .try_into()
            .map_err(|_| Error::range("uuid", format!("{value:?}"), "must be exactly 16 octets"))?;
        Ok(Self::from(array))
    }
}

impl FromStr for Uuid {
    type Err = Error;

    /// Parses a canonical dashed-hex UUID string, e.g.
    /// `"f81d4fae-7dec-11d0-a765-00a0c91e6bf6"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| Error::range("uuid", s, "not a canonical UUID string"))
    }
}
