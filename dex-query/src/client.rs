//! [`DexClient`] wraps a host transport and an immutable configuration and
//! exposes one method per query.
//!
//! The client holds no mutable state, so a single instance can be shared by
//! reference between threads whenever its transport allows it.

use dex_types::{
    Account, Address, AtomicSwap, FeeParam, HexData, OpenOrder, OrderBook, Proposal,
    ProposalStatus, SwapStatus, TimeLockRecord, Token, TokenBalance, TradingPair, TxInfo,
};
use tracing::trace;

use crate::account::{committed_account, latest_account};
use crate::config::QueryConfig;
use crate::context::QueryTransport;
use crate::error::{ClientError, QueryError};
use crate::query::{
    query_balance, query_balances, query_depth, query_fees, query_open_orders, query_proposal,
    query_proposals, query_swap_by_hash, query_swaps_by_creator, query_swaps_by_recipient,
    query_timelock, query_timelocks, query_token_info, query_tokens, query_trading_pairs,
    query_tx_search,
};
use crate::types::QueryKind;

pub struct DexClient<T>
where
    T: QueryTransport,
{
    transport: T,
    config: QueryConfig,
}

impl<T> DexClient<T>
where
    T: QueryTransport,
{
    pub fn new(transport: T, config: QueryConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn tx_search(
        &self,
        query: &str,
        prove: bool,
        page: i64,
        per_page: i64,
    ) -> Result<Vec<TxInfo>, ClientError> {
        trace!(query, prove, page, per_page, "Got tx search request");

        with_context(
            query_tx_search(&self.transport, &self.config, query, prove, page, per_page),
            QueryKind::TxSearch,
            || format!("query={query}, prove={prove}, page={page}, per_page={per_page}"),
        )
    }

    pub fn list_tokens(&self, offset: i64, limit: i64) -> Result<Vec<Token>, ClientError> {
        trace!(offset, limit, "Got token list request");

        with_context(
            query_tokens(&self.transport, &self.config, offset, limit),
            QueryKind::Tokens,
            || format!("offset={offset}, limit={limit}"),
        )
    }

    pub fn get_token_info(&self, symbol: &str) -> Result<Token, ClientError> {
        trace!(symbol, "Got token info request");

        with_context(
            query_token_info(&self.transport, symbol),
            QueryKind::TokenInfo,
            || format!("symbol={symbol}"),
        )
    }

    /// Returns the account as seen by the node's working state, including
    /// the effects of transactions not yet committed to a block.
    pub fn get_account(&self, address: &Address) -> Result<Option<Account>, ClientError> {
        trace!(%address, "Got account request");

        with_context(
            latest_account(&self.transport, &self.config, address),
            QueryKind::Account,
            || format!("address={address}"),
        )
    }

    /// Returns the account as of the last finalized block.
    pub fn get_commit_account(&self, address: &Address) -> Result<Option<Account>, ClientError> {
        trace!(%address, "Got committed account request");

        with_context(
            committed_account(&self.transport, address),
            QueryKind::CommitAccount,
            || format!("address={address}"),
        )
    }

    pub fn get_balances(&self, address: &Address) -> Result<Vec<TokenBalance>, ClientError> {
        trace!(%address, "Got balances request");

        with_context(
            query_balances(&self.transport, &self.config, address),
            QueryKind::Balances,
            || format!("address={address}"),
        )
    }

    pub fn get_balance(
        &self,
        address: &Address,
        symbol: &str,
    ) -> Result<TokenBalance, ClientError> {
        trace!(%address, symbol, "Got balance request");

        with_context(
            query_balance(&self.transport, &self.config, address, symbol),
            QueryKind::Balance,
            || format!("address={address}, symbol={symbol}"),
        )
    }

    pub fn get_fee(&self) -> Result<Vec<FeeParam>, ClientError> {
        trace!("Got fee parameters request");

        with_context(query_fees(&self.transport), QueryKind::Fees, String::new)
    }

    pub fn get_open_orders(
        &self,
        address: &Address,
        pair: &str,
    ) -> Result<Vec<OpenOrder>, ClientError> {
        trace!(%address, pair, "Got open orders request");

        with_context(
            query_open_orders(&self.transport, &self.config, address, pair),
            QueryKind::OpenOrders,
            || format!("address={address}, pair={pair}"),
        )
    }

    pub fn get_trading_pairs(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<TradingPair>, ClientError> {
        trace!(offset, limit, "Got trading pairs request");

        with_context(
            query_trading_pairs(&self.transport, &self.config, offset, limit),
            QueryKind::TradingPairs,
            || format!("offset={offset}, limit={limit}"),
        )
    }

    pub fn get_depth(&self, pair: &str, level: u32) -> Result<OrderBook, ClientError> {
        trace!(pair, level, "Got depth request");

        with_context(
            query_depth(&self.transport, &self.config, pair, level),
            QueryKind::Depth,
            || format!("pair={pair}, level={level}"),
        )
    }

    pub fn get_timelocks(&self, address: &Address) -> Result<Vec<TimeLockRecord>, ClientError> {
        trace!(%address, "Got time-locks request");

        with_context(
            query_timelocks(&self.transport, &self.config, address),
            QueryKind::TimeLocks,
            || format!("address={address}"),
        )
    }

    pub fn get_timelock(
        &self,
        address: &Address,
        time_lock_id: i64,
    ) -> Result<Option<TimeLockRecord>, ClientError> {
        trace!(%address, time_lock_id, "Got time-lock request");

        with_context(
            query_timelock(&self.transport, &self.config, address, time_lock_id),
            QueryKind::TimeLock,
            || format!("address={address}, time_lock_id={time_lock_id}"),
        )
    }

    pub fn get_proposals(
        &self,
        status: ProposalStatus,
        num_latest: i64,
    ) -> Result<Vec<Proposal>, ClientError> {
        trace!(?status, num_latest, "Got proposals request");

        with_context(
            query_proposals(&self.transport, status, num_latest),
            QueryKind::Proposals,
            || format!("status={status:?}, num_latest={num_latest}"),
        )
    }

    pub fn get_proposal(&self, proposal_id: i64) -> Result<Proposal, ClientError> {
        trace!(proposal_id, "Got proposal request");

        with_context(
            query_proposal(&self.transport, proposal_id),
            QueryKind::Proposal,
            || format!("proposal_id={proposal_id}"),
        )
    }

    pub fn get_swap_by_hash(
        &self,
        random_number_hash: &[u8],
    ) -> Result<Option<AtomicSwap>, ClientError> {
        let hash = HexData::new(random_number_hash);
        trace!(%hash, "Got swap by hash request");

        with_context(
            query_swap_by_hash(&self.transport, random_number_hash),
            QueryKind::SwapByHash,
            || format!("random_number_hash={hash}"),
        )
    }

    pub fn get_swap_by_creator(
        &self,
        creator: &str,
        status: SwapStatus,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<AtomicSwap>, ClientError> {
        trace!(creator, ?status, offset, limit, "Got swaps by creator request");

        with_context(
            query_swaps_by_creator(&self.transport, &self.config, creator, status, offset, limit),
            QueryKind::SwapsByCreator,
            || format!("creator={creator}, status={status:?}, offset={offset}, limit={limit}"),
        )
    }

    pub fn get_swap_by_recipient(
        &self,
        recipient: &str,
        status: SwapStatus,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<AtomicSwap>, ClientError> {
        trace!(recipient, ?status, offset, limit, "Got swaps by recipient request");

        with_context(
            query_swaps_by_recipient(
                &self.transport,
                &self.config,
                recipient,
                status,
                offset,
                limit,
            ),
            QueryKind::SwapsByRecipient,
            || format!("recipient={recipient}, status={status:?}, offset={offset}, limit={limit}"),
        )
    }
}

fn with_context<R>(
    result: Result<R, QueryError>,
    query: QueryKind,
    params: impl FnOnce() -> String,
) -> Result<R, ClientError> {
    result.map_err(|error| ClientError::new(query, params(), error))
}
