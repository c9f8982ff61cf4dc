//! Defines the order-book side of the state machine: listed pairs, book
//! depth, open orders and fee parameters.

use crate::coin::Fixed8;

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
pub struct TradingPair {
    pub base_asset_symbol: String,
    pub quote_asset_symbol: String,
    pub list_price: Fixed8,
    pub tick_size: Fixed8,
    pub lot_size: Fixed8,
}

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
pub struct PriceLevel {
    pub price: Fixed8,
    pub quantity: Fixed8,
}

/// The aggregated depth of one trading pair at some height. Levels are kept
/// in the order the state machine returns them.
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
pub struct OrderBook {
    pub height: i64,
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
}

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
pub struct OpenOrder {
    pub id: String,
    pub symbol: String,
    pub price: Fixed8,
    pub quantity: Fixed8,
    pub cumulative_quantity: Fixed8,
    pub created_height: i64,
    pub created_timestamp: i64,
    pub last_updated_height: i64,
    pub last_updated_timestamp: i64,
}

/// Who receives a fixed fee.
#[derive(
    Copy,
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
pub enum FeeDistribution {
    #[default]
    Proposer,
    All,
    Free,
}

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
pub struct FixedFeeParams {
    pub msg_type: String,
    pub fee: i64,
    pub fee_for: FeeDistribution,
}

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
pub struct TransferFeeParam {
    pub fixed_fee_params: FixedFeeParams,
    pub multi_transfer_fee: i64,
    pub lower_limit_as_multi: i64,
}

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
pub struct DexFeeField {
    pub fee_name: String,
    pub fee_value: i64,
}

/// One entry of the fee schedule.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    borsh::BorshSerialize,
    borsh::BorshDeserialize,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum FeeParam {
    Fixed(FixedFeeParams),
    Transfer(TransferFeeParam),
    Dex(Vec<DexFeeField>),
}
