//! Interprets low-level responses before anything is decoded.
//!
//! Every query routes its raw [`AbciResponse`] through [`classify`], then
//! turns the outcome into a list, an optional value or a required value
//! depending on what it serves.

use borsh::BorshDeserialize;
use dex_types::error::DecodingError;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::codec::{decode, Encoding};
use crate::context::{AbciResponse, CODE_OK};
use crate::error::QueryError;

/// Status code the time-lock module answers with when the requested record
/// does not exist.
pub const TIMELOCK_NOT_FOUND_CODE: u32 = 458760;

/// Status code of a store read at a height whose state is not (or no longer)
/// available on the node.
pub const HEIGHT_UNAVAILABLE_CODE: u32 = 26;

/// The outcome of a successful or "record absent" response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classified {
    /// Success with a non-empty payload.
    Value(Vec<u8>),
    /// Success with an empty payload.
    Empty,
    /// The remote reported that the record does not exist.
    NotFound,
}

/// Classifies a response. Any non-success status other than the not-found
/// sentinel is a [`QueryError::Remote`] carrying the remote log verbatim.
pub fn classify(response: AbciResponse) -> Result<Classified, QueryError> {
    match response.code {
        CODE_OK if response.value.is_empty() => Ok(Classified::Empty),
        CODE_OK => Ok(Classified::Value(response.value)),
        TIMELOCK_NOT_FOUND_CODE => Ok(Classified::NotFound),
        code => Err(QueryError::Remote {
            code,
            log: response.log,
        }),
    }
}

/// Returns whether a store read failed only because the requested height
/// has no state on the node.
pub fn is_height_unavailable(response: &AbciResponse) -> bool {
    response.code == HEIGHT_UNAVAILABLE_CODE
}

impl Classified {
    /// Logs an empty or not-found outcome for `what`, then passes it on.
    pub fn logged(self, what: &str) -> Self {
        match &self {
            Self::Empty => debug!(what, "empty response"),
            Self::NotFound => debug!(what, "record not found"),
            Self::Value(_) => {}
        }
        self
    }

    /// For list queries: absence and emptiness both mean "no entries".
    pub fn into_list<T>(self, encoding: Encoding) -> Result<Vec<T>, QueryError>
    where
        T: BorshDeserialize + DeserializeOwned,
    {
        match self {
            Self::Value(bytes) => Ok(decode(&bytes, encoding)?),
            Self::Empty | Self::NotFound => Ok(Vec::new()),
        }
    }

    /// For lookups where absence is a legitimate outcome.
    pub fn into_optional<T>(self, encoding: Encoding) -> Result<Option<T>, QueryError>
    where
        T: BorshDeserialize + DeserializeOwned,
    {
        match self {
            Self::Value(bytes) => Ok(Some(decode(&bytes, encoding)?)),
            Self::Empty | Self::NotFound => Ok(None),
        }
    }

    /// For lookups that must yield a value; `what` names it in errors.
    pub fn into_required<T>(self, encoding: Encoding, what: &str) -> Result<T, QueryError>
    where
        T: BorshDeserialize + DeserializeOwned,
    {
        match self {
            Self::Value(bytes) => Ok(decode(&bytes, encoding)?),
            Self::Empty => Err(DecodingError::EmptyPayload {
                description: what.to_string(),
            }
            .into()),
            Self::NotFound => Err(QueryError::missing_record(what)),
        }
    }
}
