//! Defines token metadata and the per-symbol balance view of an account.

use crate::address::Address;
use crate::coin::Fixed8;

/// Static metadata of an issued token.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    borsh::BorshSerialize,
    borsh::BorshDeserialize,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Token {
    pub name: String,
    pub symbol: String,
    pub original_symbol: String,
    pub total_supply: Fixed8,
    pub owner: Address,
    pub mintable: bool,
}

/// The holdings of one symbol by one account.
///
/// `free` is the account's gross holding of the symbol: the `locked` and
/// `frozen` amounts are reported alongside it and are not subtracted from it.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    borsh::BorshSerialize,
    borsh::BorshDeserialize,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct TokenBalance {
    pub symbol: String,
    pub free: Fixed8,
    pub locked: Fixed8,
    pub frozen: Fixed8,
}
