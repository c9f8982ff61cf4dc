//! Foundational error types shared by the entity shapes and the query layer.

use displaydoc::Display;

/// Errors that arise when turning text or raw bytes into an [`Address`](crate::Address).
#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum AddressError {
    /// invalid bech32 address `{address}`: `{description}`
    InvalidBech32 {
        address: String,
        description: String,
    },
    /// invalid hex address `{address}`: `{description}`
    InvalidHex {
        address: String,
        description: String,
    },
    /// address must be `{expected}` bytes long, got `{actual}`
    InvalidLength { expected: usize, actual: usize },
}

/// Errors that occur while decoding wire payloads into domain types.
#[derive(Debug, Display)]
pub enum DecodingError {
    /// invalid length prefix: `{description}`
    InvalidLengthPrefix { description: String },
    /// length prefix declares `{declared}` bytes but `{actual}` remain
    MismatchedLength { declared: usize, actual: usize },
    /// invalid binary data: `{description}`
    InvalidBinary { description: String },
    /// invalid JSON data: `{description}`
    InvalidJson { description: String },
    /// empty payload where `{description}` was expected
    EmptyPayload { description: String },
    /// failed to encode value: `{description}`
    FailedToEncode { description: String },
    /// address error: `{0}`
    Address(AddressError),
}

impl From<AddressError> for DecodingError {
    fn from(e: AddressError) -> Self {
        Self::Address(e)
    }
}

impl std::error::Error for AddressError {}

impl std::error::Error for DecodingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Address(e) => Some(e),
            _ => None,
        }
    }
}
