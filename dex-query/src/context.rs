//! The transport capabilities the host must provide to a [`DexClient`](crate::client::DexClient).

use dex_types::TxInfo;

use crate::error::TransportError;

/// Status code of a successful ABCI response.
pub const CODE_OK: u32 = 0;

/// The low-level answer of the remote state machine to a path query or a
/// store read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbciResponse {
    pub code: u32,
    pub value: Vec<u8>,
    pub log: String,
}

impl AbciResponse {
    pub fn ok(value: impl Into<Vec<u8>>) -> Self {
        Self {
            code: CODE_OK,
            value: value.into(),
            log: String::new(),
        }
    }

    pub fn empty() -> Self {
        Self::ok(Vec::new())
    }

    pub fn failure(code: u32, log: impl Into<String>) -> Self {
        Self {
            code,
            value: Vec::new(),
            log: log.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == CODE_OK
    }
}

/// Context to be implemented by the host to reach a node. Every method is a
/// single round trip; retries, connection management and cancellation are the
/// implementor's concern.
pub trait QueryTransport {
    /// Performs a generic path-addressed query.
    fn abci_query(&self, path: &str, data: &[u8]) -> Result<AbciResponse, TransportError>;

    /// Reads the raw value stored under `key` in the store `store_name`, as of
    /// `height` (the latest committed height when `None`). An absent key is a
    /// successful response with an empty value.
    fn query_store(
        &self,
        key: &[u8],
        store_name: &str,
        height: Option<u64>,
    ) -> Result<AbciResponse, TransportError>;

    /// Returns the height of the latest committed block.
    fn latest_height(&self) -> Result<u64, TransportError>;

    /// Searches committed transactions. The query has already been validated.
    fn search_txs(
        &self,
        query: &str,
        prove: bool,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<TxInfo>, TransportError>;
}

impl<T: QueryTransport + ?Sized> QueryTransport for &T {
    fn abci_query(&self, path: &str, data: &[u8]) -> Result<AbciResponse, TransportError> {
        (**self).abci_query(path, data)
    }

    fn query_store(
        &self,
        key: &[u8],
        store_name: &str,
        height: Option<u64>,
    ) -> Result<AbciResponse, TransportError> {
        (**self).query_store(key, store_name, height)
    }

    fn latest_height(&self) -> Result<u64, TransportError> {
        (**self).latest_height()
    }

    fn search_txs(
        &self,
        query: &str,
        prove: bool,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<TxInfo>, TransportError> {
        (**self).search_txs(query, prove, page, per_page)
    }
}
