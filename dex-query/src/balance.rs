//! Derives per-symbol balances from a decoded account.

use dex_types::{Account, Coins, Fixed8, TokenBalance};

/// Returns one balance per symbol held by the account, in the order the
/// account lists its coins.
pub fn balances(account: &Account) -> Vec<TokenBalance> {
    account
        .coins()
        .iter()
        .map(|coin| balance_of(Some(account), &coin.denom))
        .collect()
}

/// Returns the balance of `symbol`. An absent account, or an account that
/// does not track locked and frozen coins, reports zeros for what it lacks.
///
/// `free` is the gross holding: locked and frozen amounts are part of it.
pub fn balance_of(account: Option<&Account>, symbol: &str) -> TokenBalance {
    let amount = |coins: Option<&Coins>| Fixed8::new(coins.map_or(0, |c| c.amount_of(symbol)));

    TokenBalance {
        symbol: symbol.to_string(),
        free: amount(account.map(Account::coins)),
        locked: amount(account.and_then(Account::locked_coins)),
        frozen: amount(account.and_then(Account::frozen_coins)),
    }
}
