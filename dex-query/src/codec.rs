//! Decodes response payloads under the encoding each query is served with.
//!
//! The encoding is a property of the route, not something negotiated at run
//! time: a payload decoded under the wrong encoding fails deterministically.

use borsh::{BorshDeserialize, BorshSerialize};
use derive_more::Display;
use dex_types::error::DecodingError;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum Encoding {
    /// Binary encoding preceded by its own length as an unsigned varint. Used
    /// by the list- and struct-valued ABCI routes.
    #[display(fmt = "length-prefixed binary")]
    LengthPrefixed,
    /// Binary encoding with no framing. Used by raw store reads and the
    /// account route.
    #[display(fmt = "bare binary")]
    Bare,
    /// Used by the custom module routes.
    #[display(fmt = "JSON")]
    Json,
}

/// Decodes `bytes` into a `T`. Every byte must be consumed.
pub fn decode<T>(bytes: &[u8], encoding: Encoding) -> Result<T, DecodingError>
where
    T: BorshDeserialize + DeserializeOwned,
{
    match encoding {
        Encoding::LengthPrefixed => decode_bare(strip_length_prefix(bytes)?),
        Encoding::Bare => decode_bare(bytes),
        Encoding::Json => serde_json::from_slice(bytes).map_err(|e| DecodingError::InvalidJson {
            description: e.to_string(),
        }),
    }
}

pub fn encode<T>(value: &T, encoding: Encoding) -> Result<Vec<u8>, DecodingError>
where
    T: BorshSerialize + Serialize,
{
    let failed = |description: String| DecodingError::FailedToEncode { description };

    match encoding {
        Encoding::LengthPrefixed => {
            let body = borsh::to_vec(value).map_err(|e| failed(e.to_string()))?;
            let mut bytes =
                Vec::with_capacity(prost::length_delimiter_len(body.len()) + body.len());
            prost::encode_length_delimiter(body.len(), &mut bytes)
                .map_err(|e| failed(e.to_string()))?;
            bytes.extend_from_slice(&body);
            Ok(bytes)
        }
        Encoding::Bare => borsh::to_vec(value).map_err(|e| failed(e.to_string())),
        Encoding::Json => serde_json::to_vec(value).map_err(|e| failed(e.to_string())),
    }
}

fn strip_length_prefix(bytes: &[u8]) -> Result<&[u8], DecodingError> {
    let mut body = bytes;
    let declared = prost::decode_length_delimiter(&mut body).map_err(|e| {
        DecodingError::InvalidLengthPrefix {
            description: e.to_string(),
        }
    })?;
    if declared != body.len() {
        return Err(DecodingError::MismatchedLength {
            declared,
            actual: body.len(),
        });
    }
    Ok(body)
}

fn decode_bare<T: BorshDeserialize>(bytes: &[u8]) -> Result<T, DecodingError> {
    borsh::from_slice(bytes).map_err(|e| DecodingError::InvalidBinary {
        description: e.to_string(),
    })
}
