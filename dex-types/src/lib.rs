//! Contains the entity shapes held by the DEX chain state machine, as they are
//! returned by its ABCI query endpoints and raw stores.
//!
//! Apart from [`Address`], [`Coins`] and [`Account`], these types are opaque
//! payloads: the query layer only knows how to locate and decode them.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

pub mod account;
pub mod address;
pub mod coin;
pub mod error;
pub mod gov;
pub mod market;
pub mod serializers;
pub mod swap;
pub mod timelock;
pub mod token;
pub mod tx;

mod bytes;

pub use account::{Account, BaseAccount, NamedAccount};
pub use address::Address;
pub use bytes::HexData;
pub use coin::{Coin, Coins, Fixed8};
pub use gov::{Proposal, ProposalKind, ProposalStatus, TallyResult};
pub use market::{
    DexFeeField, FeeDistribution, FeeParam, FixedFeeParams, OpenOrder, OrderBook, PriceLevel,
    TradingPair, TransferFeeParam,
};
pub use swap::{AtomicSwap, SwapStatus};
pub use timelock::TimeLockRecord;
pub use token::{Token, TokenBalance};
pub use tx::{TxInfo, TxResult};
