use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use derive_more::{From, Into};

use crate::error::DecodingError;

/// Opaque bytes whose text form is upper-case hex, e.g. swap hashes and
/// transaction hashes.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    From,
    Into,
    borsh::BorshSerialize,
    borsh::BorshDeserialize,
)]
pub struct HexData(Vec<u8>);

impl HexData {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for HexData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for HexData {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", hex::encode_upper(&self.0))
    }
}

impl FromStr for HexData {
    type Err = DecodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex::decode(s)
            .map(Self)
            .map_err(|e| DecodingError::InvalidBinary {
                description: format!("invalid hex `{s}`: {e}"),
            })
    }
}

impl serde::Serialize for HexData {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::serializers::serialize(self, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for HexData {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::serializers::deserialize(deserializer)
    }
}
