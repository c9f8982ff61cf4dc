use dex_types::{ProposalStatus, SwapStatus};
use displaydoc::Display;

/// A validated offset/limit window of a paginated query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRange {
    /// Number of entries to skip.
    pub offset: u64,
    /// Maximum number of entries to return.
    pub limit: u64,
}

/// A validated page of a transaction search. Pages are 1-based.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchPage {
    pub page: u32,
    pub per_page: u32,
}

/// Every logical query served by the client, used to name the query that
/// failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum QueryKind {
    /// transaction search
    TxSearch,
    /// token list
    Tokens,
    /// token info
    TokenInfo,
    /// latest account
    Account,
    /// committed account
    CommitAccount,
    /// balances
    Balances,
    /// balance
    Balance,
    /// fee parameters
    Fees,
    /// open orders
    OpenOrders,
    /// trading pairs
    TradingPairs,
    /// order book depth
    Depth,
    /// time-lock list
    TimeLocks,
    /// time-lock
    TimeLock,
    /// proposal list
    Proposals,
    /// proposal
    Proposal,
    /// swap by hash
    SwapByHash,
    /// swaps by creator
    SwapsByCreator,
    /// swaps by recipient
    SwapsByRecipient,
}

/// JSON parameters of the time-lock list route.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryTimeLocksParams {
    /// Bech32 address of the owner.
    pub account: String,
}

/// JSON parameters of the single time-lock route.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryTimeLockParams {
    /// Bech32 address of the owner.
    pub account: String,
    pub time_lock_id: i64,
}

/// JSON parameters of the proposal list route. Absent fields are not
/// filters.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryProposalsParams {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub proposal_status: Option<ProposalStatus>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub num_latest_proposals: Option<i64>,
}

impl QueryProposalsParams {
    /// `ProposalStatus::Nil` and a non-positive `num_latest` both mean "no
    /// filter".
    pub fn new(status: ProposalStatus, num_latest: i64) -> Self {
        Self {
            proposal_status: (status != ProposalStatus::Nil).then_some(status),
            num_latest_proposals: (num_latest > 0).then_some(num_latest),
        }
    }
}

/// JSON parameters of the single proposal route.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QueryProposalParams {
    pub proposal_id: i64,
}

/// JSON parameters of the swaps-by-creator route.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuerySwapByCreatorParams {
    /// Bech32 address of the swap creator.
    pub creator: String,
    pub status: SwapStatus,
    pub limit: u64,
    pub offset: u64,
}

/// JSON parameters of the swaps-by-recipient route.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuerySwapByRecipientParams {
    /// Bech32 address of the swap recipient.
    pub recipient: String,
    pub status: SwapStatus,
    pub limit: u64,
    pub offset: u64,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(ProposalStatus::Nil, 0, r#"{}"#)]
    #[case(ProposalStatus::Nil, -3, r#"{}"#)]
    #[case(ProposalStatus::Passed, 0, r#"{"proposal_status":"Passed"}"#)]
    #[case(
        ProposalStatus::VotingPeriod,
        10,
        r#"{"proposal_status":"VotingPeriod","num_latest_proposals":10}"#
    )]
    fn proposal_filters_are_omitted_when_unset(
        #[case] status: ProposalStatus,
        #[case] num_latest: i64,
        #[case] expected: &str,
    ) {
        let json = serde_json::to_string(&QueryProposalsParams::new(status, num_latest))
            .expect("serializable");
        assert_eq!(json, expected);
    }
}
