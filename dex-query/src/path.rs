//! Defines every ABCI path and raw store key the client reads from.
//!
//! Each query maps to exactly one route: either an [`AbciPath`] or a
//! [`StoreKey`], never both.

use derive_more::Display;
use dex_types::{Address, HexData};

pub const TOKENS_PREFIX: &str = "tokens";
pub const DEX_PREFIX: &str = "dex";
pub const PARAM_PREFIX: &str = "param";
pub const ACCOUNT_PREFIX: &str = "/account";
pub const CUSTOM_PREFIX: &str = "custom";

pub const TIMELOCK_ROUTE: &str = "timelock";
pub const GOV_ROUTE: &str = "gov";
pub const ATOMIC_SWAP_ROUTE: &str = "atomicswap";

pub const ACCOUNT_STORE: &str = "acc";
pub const ATOMIC_SWAP_STORE: &str = "atomic_swap";

/// Key prefix of accounts in the account store.
pub const ACCOUNT_KEY_PREFIX: &[u8] = b"account:";
/// Key prefix of swaps indexed by random number hash in the swap store.
pub const SWAP_HASH_KEY_PREFIX: u8 = 0x01;

/// A path-addressed query. Addresses are carried in their bech32 text form,
/// rendered with the client's configured prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum AbciPath {
    #[display(fmt = "{TOKENS_PREFIX}/list/{offset}/{limit}")]
    Tokens { offset: u64, limit: u64 },
    #[display(fmt = "{TOKENS_PREFIX}/info/{symbol}")]
    TokenInfo { symbol: String },
    #[display(fmt = "{ACCOUNT_PREFIX}/{address}")]
    Account { address: String },
    #[display(fmt = "{PARAM_PREFIX}/fees")]
    Fees,
    #[display(fmt = "{DEX_PREFIX}/openorders/{pair}/{address}")]
    OpenOrders { pair: String, address: String },
    #[display(fmt = "{DEX_PREFIX}/pairs/{offset}/{limit}")]
    TradingPairs { offset: u64, limit: u64 },
    #[display(fmt = "{DEX_PREFIX}/orderbook/{pair}/{level}")]
    Depth { pair: String, level: u32 },
    #[display(fmt = "{CUSTOM_PREFIX}/{TIMELOCK_ROUTE}/timelocks")]
    TimeLocks,
    #[display(fmt = "{CUSTOM_PREFIX}/{TIMELOCK_ROUTE}/timelock")]
    TimeLock,
    #[display(fmt = "{CUSTOM_PREFIX}/{GOV_ROUTE}/proposals")]
    Proposals,
    #[display(fmt = "{CUSTOM_PREFIX}/{GOV_ROUTE}/proposal")]
    Proposal,
    #[display(fmt = "{CUSTOM_PREFIX}/{ATOMIC_SWAP_ROUTE}/swapcreator")]
    SwapsByCreator,
    #[display(fmt = "{CUSTOM_PREFIX}/{ATOMIC_SWAP_ROUTE}/swaprecipient")]
    SwapsByRecipient,
}

/// A raw key in a named store.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Account(Address),
    SwapByHash(HexData),
}

impl StoreKey {
    pub fn store_name(&self) -> &'static str {
        match self {
            Self::Account(_) => ACCOUNT_STORE,
            Self::SwapByHash(_) => ATOMIC_SWAP_STORE,
        }
    }

    /// Returns the key bytes: the semantic prefix followed by the raw
    /// address or hash.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Account(address) => [ACCOUNT_KEY_PREFIX, address.as_bytes()].concat(),
            Self::SwapByHash(hash) => [&[SWAP_HASH_KEY_PREFIX][..], hash.as_bytes()].concat(),
        }
    }
}
