use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use borsh::BorshSerialize;
use dex_query::classify::HEIGHT_UNAVAILABLE_CODE;
use dex_query::codec::{encode, Encoding};
use dex_query::context::{AbciResponse, QueryTransport};
use dex_query::error::TransportError;
use dex_query::path::{AbciPath, StoreKey};
use dex_types::TxInfo;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::trace;

/// Height of a freshly created [`MockTransport`].
pub const DEFAULT_LATEST_HEIGHT: u64 = 5;

/// One call received by a [`MockTransport`], in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Abci {
        path: String,
        data: Vec<u8>,
    },
    Store {
        store_name: String,
        key: Vec<u8>,
        height: Option<u64>,
    },
    LatestHeight,
    SearchTxs {
        query: String,
        prove: bool,
        page: u32,
        per_page: u32,
    },
}

#[derive(Debug, Default)]
struct MockState {
    latest_height: u64,
    abci: BTreeMap<String, AbciResponse>,
    /// Values of each store key, by the height at which they were written.
    store: BTreeMap<(String, Vec<u8>), BTreeMap<u64, Vec<u8>>>,
    unavailable_heights: BTreeSet<u64>,
    failing_paths: BTreeSet<String>,
    txs: Vec<TxInfo>,
    calls: Vec<Call>,
}

/// A transport serving scripted responses.
///
/// Path queries answer from a table of responses keyed by the full path;
/// unknown paths answer with an empty success. Store reads answer with the
/// most recent value written at or below the requested height, or with the
/// height-unavailable status for heights marked as such.
///
/// Clones share their state, so a test can keep a handle to inspect the
/// calls made through a client that owns another.
#[derive(Clone, Debug)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                latest_height: DEFAULT_LATEST_HEIGHT,
                ..Default::default()
            })),
        }
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latest_height(self, height: u64) -> Self {
        self.state.lock().latest_height = height;
        self
    }

    /// Answers `path` with `response`, whatever the request data.
    pub fn with_response(self, path: &AbciPath, response: AbciResponse) -> Self {
        self.state.lock().abci.insert(path.to_string(), response);
        self
    }

    /// Answers `path` with `value` encoded under `encoding`.
    pub fn with_value<V>(self, path: &AbciPath, value: &V, encoding: Encoding) -> Self
    where
        V: BorshSerialize + Serialize,
    {
        let bytes = encode(value, encoding).expect("fixture is encodable");
        self.with_response(path, AbciResponse::ok(bytes))
    }

    /// Stores `value`, encoded as bare binary, under `key` from `height` on.
    pub fn with_stored<V>(self, key: &StoreKey, height: u64, value: &V) -> Self
    where
        V: BorshSerialize + Serialize,
    {
        let bytes = encode(value, Encoding::Bare).expect("fixture is encodable");
        self.state
            .lock()
            .store
            .entry((key.store_name().to_string(), key.to_bytes()))
            .or_default()
            .insert(height, bytes);
        self
    }

    /// Makes store reads at `height` answer with the height-unavailable status.
    pub fn with_unavailable_height(self, height: u64) -> Self {
        self.state.lock().unavailable_heights.insert(height);
        self
    }

    /// Makes path queries to `path` fail at the transport level.
    pub fn with_failing_path(self, path: &AbciPath) -> Self {
        self.state.lock().failing_paths.insert(path.to_string());
        self
    }

    pub fn with_txs(self, txs: Vec<TxInfo>) -> Self {
        self.state.lock().txs = txs;
        self
    }

    /// Moves the chain one block forward.
    pub fn advance_height(&self) {
        self.state.lock().latest_height += 1;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    /// Returns whether no request of any kind has been received.
    pub fn is_untouched(&self) -> bool {
        self.state.lock().calls.is_empty()
    }
}

impl QueryTransport for MockTransport {
    fn abci_query(&self, path: &str, data: &[u8]) -> Result<AbciResponse, TransportError> {
        trace!(path, "mock path query");
        let mut state = self.state.lock();
        state.calls.push(Call::Abci {
            path: path.to_string(),
            data: data.to_vec(),
        });

        if state.failing_paths.contains(path) {
            return Err(TransportError::request(format!("connection to {path} refused")));
        }
        Ok(state.abci.get(path).cloned().unwrap_or_default())
    }

    fn query_store(
        &self,
        key: &[u8],
        store_name: &str,
        height: Option<u64>,
    ) -> Result<AbciResponse, TransportError> {
        trace!(store_name, ?height, "mock store read");
        let mut state = self.state.lock();
        state.calls.push(Call::Store {
            store_name: store_name.to_string(),
            key: key.to_vec(),
            height,
        });

        let height = height.unwrap_or(state.latest_height);
        if height > state.latest_height || state.unavailable_heights.contains(&height) {
            return Ok(AbciResponse::failure(
                HEIGHT_UNAVAILABLE_CODE,
                format!("failed to load state at height {height}"),
            ));
        }

        let value = state
            .store
            .get(&(store_name.to_string(), key.to_vec()))
            .and_then(|versions| versions.range(..=height).next_back())
            .map(|(_, value)| value.clone())
            .unwrap_or_default();
        Ok(AbciResponse::ok(value))
    }

    fn latest_height(&self) -> Result<u64, TransportError> {
        let mut state = self.state.lock();
        state.calls.push(Call::LatestHeight);
        Ok(state.latest_height)
    }

    fn search_txs(
        &self,
        query: &str,
        prove: bool,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<TxInfo>, TransportError> {
        let mut state = self.state.lock();
        state.calls.push(Call::SearchTxs {
            query: query.to_string(),
            prove,
            page,
            per_page,
        });

        let skip = (page.saturating_sub(1) as usize).saturating_mul(per_page as usize);
        Ok(state
            .txs
            .iter()
            .skip(skip)
            .take(per_page as usize)
            .cloned()
            .collect())
    }
}
