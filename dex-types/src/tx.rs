use crate::bytes::HexData;

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
pub struct TxResult {
    pub code: u32,
    pub data: HexData,
    pub log: String,
}

/// A committed transaction as returned by a transaction search.
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
pub struct TxInfo {
    pub hash: HexData,
    pub height: i64,
    pub index: u32,
    pub tx: HexData,
    pub result: TxResult,
}
