//! Defines the fixed-length account address and its text encodings.

use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use subtle_encoding::bech32;

use crate::error::AddressError;

/// Number of bytes in an account address.
pub const ADDRESS_LEN: usize = 20;

/// The binary identifier of an account.
///
/// Its canonical text form is bech32 under a network-specific prefix (`bnb`,
/// `tbnb`), which is only known to the caller; use [`Address::to_bech32`] with
/// the configured prefix. `Display` renders upper-case hex, and `FromStr`
/// accepts either hex or bech32 under any prefix.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    borsh::BorshSerialize,
    borsh::BorshDeserialize,
)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    pub const fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        let array = <[u8; ADDRESS_LEN]>::try_from(bytes).map_err(|_| {
            AddressError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: bytes.len(),
            }
        })?;
        Ok(Self(array))
    }

    /// Decodes a bech32 address, whatever its human-readable prefix.
    pub fn from_bech32(text: &str) -> Result<Self, AddressError> {
        let (_prefix, bytes) = bech32::decode(text).map_err(|e| AddressError::InvalidBech32 {
            address: text.to_string(),
            description: e.to_string(),
        })?;
        Self::from_slice(&bytes)
    }

    /// Encodes the address as bech32 under the given human-readable prefix.
    pub fn to_bech32(&self, prefix: &str) -> String {
        bech32::encode(prefix, self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::serializers::serialize(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::serializers::deserialize(deserializer)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == ADDRESS_LEN * 2 && s.chars().all(|c| c.is_ascii_hexdigit()) {
            let bytes = hex::decode(s).map_err(|e| AddressError::InvalidHex {
                address: s.to_string(),
                description: e.to_string(),
            })?;
            return Self::from_slice(&bytes);
        }
        Self::from_bech32(s)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn dummy_address() -> Address {
        Address::new([
            0x1d, 0x0e, 0x3e, 0x4a, 0x22, 0x68, 0x53, 0xb9, 0x4f, 0x2b, 0x7c, 0x83, 0x1f, 0x0b,
            0x22, 0x2d, 0x0a, 0x98, 0x5d, 0x3c,
        ])
    }

    #[rstest]
    #[case("bnb")]
    #[case("tbnb")]
    fn bech32_text_decodes_back_to_the_same_bytes(#[case] prefix: &str) {
        let address = dummy_address();
        let text = address.to_bech32(prefix);

        assert!(text.starts_with(prefix));
        assert_eq!(Address::from_bech32(&text).expect("valid bech32"), address);
        assert_eq!(text.parse::<Address>().expect("valid bech32"), address);
    }

    #[test]
    fn hex_text_parses() {
        let address = dummy_address();
        let parsed: Address = address.to_string().parse().expect("valid hex");
        assert_eq!(parsed, address);
    }

    #[rstest]
    #[case("")]
    #[case("bnb1")]
    #[case("not an address")]
    fn invalid_text_is_rejected(#[case] text: &str) {
        assert!(text.parse::<Address>().is_err());
    }

    #[test]
    fn wrong_length_payload_is_rejected() {
        let text = bech32::encode("bnb", [1u8; 32]);
        assert_eq!(
            Address::from_bech32(&text),
            Err(AddressError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: 32
            })
        );
    }
}
