use dex_types::error::{AddressError, DecodingError};
use displaydoc::Display;

use crate::types::QueryKind;

/// A query parameter failed a local grammar or range check. Raised before
/// any request reaches the transport.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum ValidationError {
    /// offset must be non-negative, got `{0}`
    NegativeOffset(i64),
    /// limit must be between 0 and `{max}`, got `{actual}`
    InvalidLimit { actual: i64, max: u64 },
    /// invalid symbol `{symbol}`: `{description}`
    InvalidSymbol { symbol: String, description: String },
    /// invalid trading pair `{pair}`: `{description}`
    InvalidPair { pair: String, description: String },
    /// depth level `{level}` is not one of `{allowed:?}`
    InvalidDepthLevel { level: u32, allowed: Vec<u32> },
    /// invalid search query `{query}`: `{description}`
    InvalidSearchQuery { query: String, description: String },
    /// search page must be at least 1, got `{0}`
    InvalidSearchPage(i64),
    /// search page size must be between 1 and `{max}`, got `{actual}`
    InvalidSearchPageSize { actual: i64, max: u32 },
    /// random number hash must be `{expected}` bytes long, got `{actual}`
    InvalidSwapHash { expected: usize, actual: usize },
}

/// The transport could not perform the call (network, timeout, framing).
/// Produced by the host's [`QueryTransport`](crate::context::QueryTransport)
/// and surfaced unchanged.
#[derive(Debug, Display)]
pub enum TransportError {
    /// request failed: `{description}`
    Request { description: String },
    /// request timed out: `{description}`
    Timeout { description: String },
    /// malformed response: `{description}`
    MalformedResponse { description: String },
    /// request cancelled
    Cancelled,
}

impl TransportError {
    pub fn request<T: ToString>(description: T) -> Self {
        Self::Request {
            description: description.to_string(),
        }
    }
}

/// The main error type of the dex-query crate. Each variant is one class of
/// the failure taxonomy; an absent record is not an error and is reported as
/// `Ok(None)` by the operations that tolerate it.
#[derive(Debug, Display)]
pub enum QueryError {
    /// validation error: `{0}`
    Validation(ValidationError),
    /// transport error: `{0}`
    Transport(TransportError),
    /// remote error (code `{code}`): `{log}`
    Remote { code: u32, log: String },
    /// decoding error: `{0}`
    Decoding(DecodingError),
    /// symbol not found: `{symbol}`
    SymbolNotFound { symbol: String },
    /// missing record: `{description}`
    MissingRecord { description: String },
}

impl QueryError {
    pub fn missing_record<T: ToString>(description: T) -> Self {
        Self::MissingRecord {
            description: description.to_string(),
        }
    }
}

impl From<ValidationError> for QueryError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<TransportError> for QueryError {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

impl From<DecodingError> for QueryError {
    fn from(e: DecodingError) -> Self {
        Self::Decoding(e)
    }
}

impl From<AddressError> for QueryError {
    fn from(e: AddressError) -> Self {
        Self::Decoding(DecodingError::Address(e))
    }
}

// Returned by every `DexClient` operation: names the query and its
// parameters alongside the underlying cause.
/// `{query}` query with `{params}` failed: {error}
#[derive(Debug, Display)]
pub struct ClientError {
    pub query: QueryKind,
    pub params: String,
    pub error: QueryError,
}

impl ClientError {
    pub fn new(query: QueryKind, params: impl Into<String>, error: QueryError) -> Self {
        Self {
            query,
            params: params.into(),
            error,
        }
    }

    pub fn error(&self) -> &QueryError {
        &self.error
    }

    pub fn into_error(self) -> QueryError {
        self.error
    }
}

impl std::error::Error for ValidationError {}

impl std::error::Error for TransportError {}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Transport(e) => Some(e),
            Self::Decoding(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
