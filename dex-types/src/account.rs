//! Defines the two account shapes stored by the state machine.

use crate::address::Address;
use crate::bytes::HexData;
use crate::coin::Coins;

/// A plain account: an address and its total holdings.
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
pub struct BaseAccount {
    pub address: Address,
    pub coins: Coins,
    #[serde(default, with = "crate::serializers::option")]
    pub public_key: Option<HexData>,
    pub account_number: i64,
    pub sequence: i64,
}

/// An account that additionally tracks the subsets of its coins that are
/// locked in open orders and frozen by the owner.
///
/// The locked and frozen coins are part of `base.coins`, not in addition to
/// them.
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
pub struct NamedAccount {
    pub base: BaseAccount,
    pub name: String,
    pub frozen_coins: Coins,
    pub locked_coins: Coins,
    pub flags: u64,
}

/// An account as decoded from the account store or the account query
/// endpoint.
///
/// Every account exposes its total coins; only the [`Account::Named`]
/// variant exposes locked and frozen coins, which [`Account::locked_coins`]
/// and [`Account::frozen_coins`] report as `None` for plain accounts.
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
pub enum Account {
    Base(BaseAccount),
    Named(NamedAccount),
}

impl Account {
    fn base(&self) -> &BaseAccount {
        match self {
            Self::Base(base) => base,
            Self::Named(named) => &named.base,
        }
    }

    pub fn address(&self) -> &Address {
        &self.base().address
    }

    pub fn coins(&self) -> &Coins {
        &self.base().coins
    }

    pub fn account_number(&self) -> i64 {
        self.base().account_number
    }

    pub fn sequence(&self) -> i64 {
        self.base().sequence
    }

    /// Returns the named view of this account, if it has one.
    pub fn as_named(&self) -> Option<&NamedAccount> {
        match self {
            Self::Named(named) => Some(named),
            Self::Base(_) => None,
        }
    }

    pub fn locked_coins(&self) -> Option<&Coins> {
        self.as_named().map(|named| &named.locked_coins)
    }

    pub fn frozen_coins(&self) -> Option<&Coins> {
        self.as_named().map(|named| &named.frozen_coins)
    }
}

impl From<BaseAccount> for Account {
    fn from(base: BaseAccount) -> Self {
        Self::Base(base)
    }
}

impl From<NamedAccount> for Account {
    fn from(named: NamedAccount) -> Self {
        Self::Named(named)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::Coin;

    #[test]
    fn plain_account_has_no_locked_or_frozen_coins() {
        let account = Account::from(BaseAccount {
            coins: Coins::new(vec![Coin::new("BNB", 10)]),
            ..Default::default()
        });

        assert_eq!(account.coins().amount_of("BNB"), 10);
        assert!(account.as_named().is_none());
        assert!(account.locked_coins().is_none());
        assert!(account.frozen_coins().is_none());
    }

    #[test]
    fn named_account_exposes_its_subsets() {
        let account = Account::from(NamedAccount {
            base: BaseAccount {
                coins: Coins::new(vec![Coin::new("BNB", 10)]),
                sequence: 3,
                ..Default::default()
            },
            locked_coins: Coins::new(vec![Coin::new("BNB", 4)]),
            ..Default::default()
        });

        assert_eq!(account.sequence(), 3);
        assert_eq!(account.locked_coins().map(|c| c.amount_of("BNB")), Some(4));
        assert_eq!(account.frozen_coins().map(|c| c.amount_of("BNB")), Some(0));
    }
}
