//! Defines governance proposals.

use crate::coin::Coins;

/// The voting stage of a proposal. `Nil` is only meaningful as a query
/// filter and stands for "any status".
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
pub enum ProposalStatus {
    #[default]
    Nil,
    DepositPeriod,
    VotingPeriod,
    Passed,
    Rejected,
    Executed,
}

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
pub enum ProposalKind {
    #[default]
    Text,
    ParameterChange,
    SoftwareUpgrade,
    ListTradingPair,
    FeeChange,
    CreateValidator,
    RemoveValidator,
    DelistTradingPair,
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
pub struct TallyResult {
    pub yes: i64,
    pub abstain: i64,
    pub no: i64,
    pub no_with_veto: i64,
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
pub struct Proposal {
    pub proposal_id: i64,
    pub title: String,
    pub description: String,
    pub proposal_type: ProposalKind,
    pub proposal_status: ProposalStatus,
    pub tally_result: TallyResult,
    pub submit_time: String,
    pub total_deposit: Coins,
    pub voting_start_time: String,
    pub voting_period: i64,
}
