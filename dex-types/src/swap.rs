//! Defines cross-chain atomic swaps (hash time-locked transfers).

use crate::address::Address;
use crate::bytes::HexData;
use crate::coin::Coins;

/// Length of a swap's random number hash.
pub const RANDOM_NUMBER_HASH_LEN: usize = 32;

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
pub enum SwapStatus {
    #[default]
    Null,
    Open,
    Completed,
    Expired,
}

impl SwapStatus {
    /// Parses a status name case-insensitively. Unknown names map to
    /// [`SwapStatus::Null`], which the swap queries treat as "any status".
    pub fn from_text(text: &str) -> Self {
        match text.to_ascii_lowercase().as_str() {
            "open" => Self::Open,
            "completed" => Self::Completed,
            "expired" => Self::Expired,
            _ => Self::Null,
        }
    }
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
pub struct AtomicSwap {
    pub from: Address,
    pub to: Address,
    pub out_amount: Coins,
    pub in_amount: Coins,
    pub expected_income: String,
    pub recipient_other_chain: String,
    pub random_number_hash: HexData,
    pub random_number: HexData,
    pub timestamp: i64,
    pub cross_chain: bool,
    pub expire_height: i64,
    pub index: i64,
    pub closed_time: i64,
    pub status: SwapStatus,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Open", SwapStatus::Open)]
    #[case("completed", SwapStatus::Completed)]
    #[case("EXPIRED", SwapStatus::Expired)]
    #[case("", SwapStatus::Null)]
    #[case("pending", SwapStatus::Null)]
    fn status_from_text(#[case] text: &str, #[case] expected: SwapStatus) {
        assert_eq!(SwapStatus::from_text(text), expected);
    }

    #[test]
    fn swap_json_accepts_bech32_addresses() {
        let from = Address::new([7; 20]);
        let json = serde_json::json!({
            "from": from.to_bech32("bnb"),
            "to": from.to_string(),
            "out_amount": [{ "denom": "BNB", "amount": 5 }],
            "in_amount": [],
            "expected_income": "5:BNB",
            "recipient_other_chain": "",
            "random_number_hash": "AB".repeat(RANDOM_NUMBER_HASH_LEN),
            "random_number": "",
            "timestamp": 1,
            "cross_chain": false,
            "expire_height": 100,
            "index": 0,
            "closed_time": 0,
            "status": "Open",
        });

        let swap: AtomicSwap = serde_json::from_value(json).expect("valid swap");
        assert_eq!(swap.from, from);
        assert_eq!(swap.to, from);
        assert_eq!(swap.random_number_hash.len(), RANDOM_NUMBER_HASH_LEN);
        assert_eq!(swap.status, SwapStatus::Open);
    }
}
