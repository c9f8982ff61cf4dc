//! Provides one function per query: validate, route, call the transport,
//! classify and decode.

use dex_types::error::DecodingError;
use dex_types::{
    Address, AtomicSwap, FeeParam, HexData, OpenOrder, OrderBook, Proposal, ProposalStatus,
    SwapStatus, TimeLockRecord, Token, TokenBalance, TradingPair, TxInfo,
};
use serde::Serialize;
use tracing::debug;

use crate::account::{latest_account, read_committed};
use crate::balance::{balance_of, balances};
use crate::classify::{classify, Classified};
use crate::codec::{decode, Encoding};
use crate::config::QueryConfig;
use crate::context::QueryTransport;
use crate::error::QueryError;
use crate::path::{AbciPath, StoreKey};
use crate::types::{
    QueryProposalParams, QueryProposalsParams, QuerySwapByCreatorParams,
    QuerySwapByRecipientParams, QueryTimeLockParams, QueryTimeLocksParams,
};
use crate::validate::{
    validate_depth_level, validate_page, validate_pair, validate_search_page,
    validate_search_query, validate_swap_hash, validate_symbol,
};

/// Searches committed transactions. Only the query grammar and pagination
/// are checked here; the transport returns typed results.
pub fn query_tx_search<T>(
    transport: &T,
    config: &QueryConfig,
    query: &str,
    prove: bool,
    page: i64,
    per_page: i64,
) -> Result<Vec<TxInfo>, QueryError>
where
    T: QueryTransport,
{
    validate_search_query(query, config.max_search_query_len)?;
    let page = validate_search_page(page, per_page, config.max_search_per_page)?;

    Ok(transport.search_txs(query, prove, page.page, page.per_page)?)
}

pub fn query_tokens<T>(
    transport: &T,
    config: &QueryConfig,
    offset: i64,
    limit: i64,
) -> Result<Vec<Token>, QueryError>
where
    T: QueryTransport,
{
    let page = validate_page(offset, limit, config.max_limit)?;
    let path = AbciPath::Tokens {
        offset: page.offset,
        limit: page.limit,
    };

    abci_query(transport, &path, &[])?.into_list(Encoding::LengthPrefixed)
}

pub fn query_token_info<T>(transport: &T, symbol: &str) -> Result<Token, QueryError>
where
    T: QueryTransport,
{
    validate_symbol(symbol)?;
    let path = AbciPath::TokenInfo {
        symbol: symbol.to_string(),
    };

    abci_query(transport, &path, &[])?
        .into_required(Encoding::LengthPrefixed, &format!("token `{symbol}`"))
}

/// Returns whether `symbol` is a registered token: the token info route
/// answers with a payload that decodes as a [`Token`]. An empty or not-found
/// answer means "not registered"; remote and transport failures propagate.
pub fn token_exists<T>(transport: &T, symbol: &str) -> Result<bool, QueryError>
where
    T: QueryTransport,
{
    let path = AbciPath::TokenInfo {
        symbol: symbol.to_string(),
    };

    match abci_query(transport, &path, &[])? {
        Classified::Value(bytes) => {
            let registered = decode::<Token>(&bytes, Encoding::LengthPrefixed).is_ok();
            if !registered {
                debug!(symbol, "token info does not decode");
            }
            Ok(registered)
        }
        Classified::Empty | Classified::NotFound => Ok(false),
    }
}

/// Returns one balance per symbol held by the account in the node's working
/// state. An absent account holds nothing.
pub fn query_balances<T>(
    transport: &T,
    config: &QueryConfig,
    address: &Address,
) -> Result<Vec<TokenBalance>, QueryError>
where
    T: QueryTransport,
{
    let account = latest_account(transport, config, address)?;

    Ok(account.as_ref().map(balances).unwrap_or_default())
}

/// Returns the balance of a registered token; an unregistered symbol is an
/// error whatever the account holds.
pub fn query_balance<T>(
    transport: &T,
    config: &QueryConfig,
    address: &Address,
    symbol: &str,
) -> Result<TokenBalance, QueryError>
where
    T: QueryTransport,
{
    validate_symbol(symbol)?;
    if !token_exists(transport, symbol)? {
        return Err(QueryError::SymbolNotFound {
            symbol: symbol.to_string(),
        });
    }
    let account = latest_account(transport, config, address)?;

    Ok(balance_of(account.as_ref(), symbol))
}

pub fn query_fees<T>(transport: &T) -> Result<Vec<FeeParam>, QueryError>
where
    T: QueryTransport,
{
    abci_query(transport, &AbciPath::Fees, &[])?.into_list(Encoding::LengthPrefixed)
}

pub fn query_open_orders<T>(
    transport: &T,
    config: &QueryConfig,
    address: &Address,
    pair: &str,
) -> Result<Vec<OpenOrder>, QueryError>
where
    T: QueryTransport,
{
    validate_pair(pair)?;
    let path = AbciPath::OpenOrders {
        pair: pair.to_string(),
        address: address.to_bech32(&config.bech32_prefix),
    };

    abci_query(transport, &path, &[])?.into_list(Encoding::LengthPrefixed)
}

pub fn query_trading_pairs<T>(
    transport: &T,
    config: &QueryConfig,
    offset: i64,
    limit: i64,
) -> Result<Vec<TradingPair>, QueryError>
where
    T: QueryTransport,
{
    let page = validate_page(offset, limit, config.max_limit)?;
    let path = AbciPath::TradingPairs {
        offset: page.offset,
        limit: page.limit,
    };

    abci_query(transport, &path, &[])?.into_list(Encoding::LengthPrefixed)
}

pub fn query_depth<T>(
    transport: &T,
    config: &QueryConfig,
    pair: &str,
    level: u32,
) -> Result<OrderBook, QueryError>
where
    T: QueryTransport,
{
    validate_pair(pair)?;
    validate_depth_level(level, &config.depth_levels)?;
    let path = AbciPath::Depth {
        pair: pair.to_string(),
        level,
    };

    abci_query(transport, &path, &[])?
        .into_required(Encoding::LengthPrefixed, &format!("order book of `{pair}`"))
}

pub fn query_timelocks<T>(
    transport: &T,
    config: &QueryConfig,
    address: &Address,
) -> Result<Vec<TimeLockRecord>, QueryError>
where
    T: QueryTransport,
{
    let params = QueryTimeLocksParams {
        account: address.to_bech32(&config.bech32_prefix),
    };

    abci_query(transport, &AbciPath::TimeLocks, &json_params(&params)?)?.into_list(Encoding::Json)
}

pub fn query_timelock<T>(
    transport: &T,
    config: &QueryConfig,
    address: &Address,
    time_lock_id: i64,
) -> Result<Option<TimeLockRecord>, QueryError>
where
    T: QueryTransport,
{
    let params = QueryTimeLockParams {
        account: address.to_bech32(&config.bech32_prefix),
        time_lock_id,
    };

    abci_query(transport, &AbciPath::TimeLock, &json_params(&params)?)?
        .into_optional(Encoding::Json)
}

/// Lists proposals. [`ProposalStatus::Nil`] disables the status filter and
/// a non-positive `num_latest` disables the count limit.
pub fn query_proposals<T>(
    transport: &T,
    status: ProposalStatus,
    num_latest: i64,
) -> Result<Vec<Proposal>, QueryError>
where
    T: QueryTransport,
{
    let params = QueryProposalsParams::new(status, num_latest);

    abci_query(transport, &AbciPath::Proposals, &json_params(&params)?)?.into_list(Encoding::Json)
}

pub fn query_proposal<T>(transport: &T, proposal_id: i64) -> Result<Proposal, QueryError>
where
    T: QueryTransport,
{
    let params = QueryProposalParams { proposal_id };

    abci_query(transport, &AbciPath::Proposal, &json_params(&params)?)?
        .into_required(Encoding::Json, &format!("proposal {proposal_id}"))
}

/// Reads a swap from the committed swap store by its random number hash.
pub fn query_swap_by_hash<T>(
    transport: &T,
    random_number_hash: &[u8],
) -> Result<Option<AtomicSwap>, QueryError>
where
    T: QueryTransport,
{
    validate_swap_hash(random_number_hash)?;
    let key = StoreKey::SwapByHash(HexData::new(random_number_hash));
    let classified = classify(read_committed(transport, &key)?)?;

    classified.logged("atomic swap").into_optional(Encoding::Bare)
}

/// Lists swaps created by the bech32 address `creator`.
/// [`SwapStatus::Null`] matches every status.
pub fn query_swaps_by_creator<T>(
    transport: &T,
    config: &QueryConfig,
    creator: &str,
    status: SwapStatus,
    offset: i64,
    limit: i64,
) -> Result<Vec<AtomicSwap>, QueryError>
where
    T: QueryTransport,
{
    let page = validate_page(offset, limit, config.max_limit)?;
    let creator = Address::from_bech32(creator)?;
    let params = QuerySwapByCreatorParams {
        creator: creator.to_bech32(&config.bech32_prefix),
        status,
        limit: page.limit,
        offset: page.offset,
    };

    abci_query(transport, &AbciPath::SwapsByCreator, &json_params(&params)?)?
        .into_list(Encoding::Json)
}

/// Lists swaps whose recipient is the bech32 address `recipient`.
/// [`SwapStatus::Null`] matches every status.
pub fn query_swaps_by_recipient<T>(
    transport: &T,
    config: &QueryConfig,
    recipient: &str,
    status: SwapStatus,
    offset: i64,
    limit: i64,
) -> Result<Vec<AtomicSwap>, QueryError>
where
    T: QueryTransport,
{
    let page = validate_page(offset, limit, config.max_limit)?;
    let recipient = Address::from_bech32(recipient)?;
    let params = QuerySwapByRecipientParams {
        recipient: recipient.to_bech32(&config.bech32_prefix),
        status,
        limit: page.limit,
        offset: page.offset,
    };

    abci_query(transport, &AbciPath::SwapsByRecipient, &json_params(&params)?)?
        .into_list(Encoding::Json)
}

fn abci_query<T>(transport: &T, path: &AbciPath, data: &[u8]) -> Result<Classified, QueryError>
where
    T: QueryTransport,
{
    let path = path.to_string();
    let classified = classify(transport.abci_query(&path, data)?)?;

    Ok(classified.logged(&path))
}

fn json_params<P: Serialize>(params: &P) -> Result<Vec<u8>, QueryError> {
    serde_json::to_vec(params).map_err(|e| {
        DecodingError::FailedToEncode {
            description: e.to_string(),
        }
        .into()
    })
}
