//! Account address handling.
//!
//! Scored accounts are identified by 20-byte addresses with the familiar
//! `0x`-prefixed hex text form. The zero address is reserved as the null
//! value and is rejected by every scoring operation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::AddressError;

/// Length of an account address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte account address.
///
/// Human-readable form is `0x` followed by 40 lowercase hex characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// The all-zero null address.
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    /// Create an address from raw bytes.
    pub fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Whether this is the reserved null address.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Encode as a `0x`-prefixed lowercase hex string.
    pub fn encode(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Decode a `0x`-prefixed hex address string.
    ///
    /// Accepts mixed-case hex digits; any other character is rejected.
    pub fn decode(s: &str) -> Result<Self, AddressError> {
        let body = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(AddressError::MissingPrefix)?;

        if body.len() != ADDRESS_LEN * 2 {
            return Err(AddressError::InvalidLength(body.len()));
        }
        if let Some(c) = body.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidCharacter(c));
        }

        let mut bytes = [0u8; ADDRESS_LEN];
        // Length and charset were checked above.
        hex::decode_to_slice(body.to_ascii_lowercase(), &mut bytes)
            .map_err(|_| AddressError::InvalidLength(body.len()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::decode(&s).map_err(serde::de::Error::custom)
    }
}

impl bincode::Encode for Address {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        self.0.encode(encoder)
    }
}

impl<Context> bincode::Decode<Context> for Address {
    fn decode<D: bincode::de::Decoder<Context = Context>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        Ok(Self(<[u8; ADDRESS_LEN]>::decode(decoder)?))
    }
}
