//! Contains the query-translation layer of a read-only client for the DEX
//! chain: each strongly-typed query is validated, mapped onto one of the two
//! primitives the remote state machine exposes (an ABCI path query or a raw
//! store read), and its response is classified and decoded.
//!
//! The entry point is [`DexClient`](crate::client::DexClient), built from a
//! host-provided [`QueryTransport`](crate::context::QueryTransport) and an
//! immutable [`QueryConfig`](crate::config::QueryConfig).
//!
//! Example
//! ```rust,ignore
//! use dex_query::client::DexClient;
//! use dex_query::config::QueryConfig;
//!
//! let client = DexClient::new(transport, QueryConfig::mainnet());
//!
//! let book = client.get_depth("BNB_BUSD-BD1", 5)?;
//! let committed = client.get_commit_account(&address)?;
//! let pending = client.get_account(&address)?;
//! ```
//!
//! The two account operations deliberately read different views of state:
//! [`get_commit_account`](crate::client::DexClient::get_commit_account)
//! reads the last finalized block, while
//! [`get_account`](crate::client::DexClient::get_account) reads the node's
//! working state, which already reflects transactions that passed validation
//! but are not yet in a block.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

pub mod account;
pub mod balance;
pub mod classify;
pub mod client;
pub mod codec;
pub mod config;
pub mod context;
pub mod error;
pub mod path;
pub mod query;
pub mod types;
pub mod validate;

pub use client::DexClient;
pub use config::QueryConfig;
pub use context::{AbciResponse, QueryTransport};
pub use error::{ClientError, QueryError, TransportError, ValidationError};
