use crate::coin::Coins;

/// Coins locked by an account until `lock_time` (unix seconds).
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
pub struct TimeLockRecord {
    pub id: i64,
    pub description: String,
    pub amount: Coins,
    pub lock_time: i64,
}
