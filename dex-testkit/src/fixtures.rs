//! Dummy entities, for testing purposes only!

use dex_types::{
    Account, Address, AtomicSwap, BaseAccount, Coin, Coins, Fixed8, HexData, NamedAccount,
    OrderBook, PriceLevel, Proposal, ProposalKind, ProposalStatus, SwapStatus, TimeLockRecord,
    Token, TradingPair,
};

/// Returns an address whose every byte is `seed`.
pub fn dummy_address(seed: u8) -> Address {
    Address::new([seed; 20])
}

/// Returns a token with a total supply of one million units.
pub fn dummy_token(symbol: &str) -> Token {
    let original_symbol = symbol.split('-').next().unwrap_or(symbol);

    Token {
        name: format!("{original_symbol} token"),
        symbol: symbol.to_string(),
        original_symbol: original_symbol.to_string(),
        total_supply: Fixed8::new(1_000_000 * Fixed8::ONE.raw()),
        owner: dummy_address(0xEE),
        mintable: false,
    }
}

pub fn dummy_coins(coins: &[(&str, i64)]) -> Coins {
    coins
        .iter()
        .map(|(denom, amount)| Coin::new(*denom, *amount))
        .collect()
}

pub fn dummy_base_account(address: Address, coins: &[(&str, i64)], sequence: i64) -> Account {
    BaseAccount {
        address,
        coins: dummy_coins(coins),
        account_number: 1,
        sequence,
        ..Default::default()
    }
    .into()
}

/// Returns a named account holding `coins`, of which `locked` and `frozen`
/// are subsets.
pub fn dummy_named_account(
    address: Address,
    coins: &[(&str, i64)],
    locked: &[(&str, i64)],
    frozen: &[(&str, i64)],
) -> Account {
    NamedAccount {
        base: BaseAccount {
            address,
            coins: dummy_coins(coins),
            account_number: 1,
            ..Default::default()
        },
        name: String::new(),
        locked_coins: dummy_coins(locked),
        frozen_coins: dummy_coins(frozen),
        flags: 0,
    }
    .into()
}

pub fn dummy_trading_pair(base: &str, quote: &str) -> TradingPair {
    TradingPair {
        base_asset_symbol: base.to_string(),
        quote_asset_symbol: quote.to_string(),
        list_price: Fixed8::ONE,
        tick_size: Fixed8::new(1),
        lot_size: Fixed8::new(100_000),
    }
}

pub fn dummy_price_level(price: i64, quantity: i64) -> PriceLevel {
    PriceLevel {
        price: Fixed8::new(price),
        quantity: Fixed8::new(quantity),
    }
}

/// Returns a book at `height` whose levels are `(price, quantity)` pairs.
pub fn dummy_order_book(height: i64, bids: &[(i64, i64)], asks: &[(i64, i64)]) -> OrderBook {
    let levels = |side: &[(i64, i64)]| -> Vec<PriceLevel> {
        side.iter()
            .map(|(price, quantity)| dummy_price_level(*price, *quantity))
            .collect()
    };

    OrderBook {
        height,
        bids: levels(bids),
        asks: levels(asks),
    }
}

pub fn dummy_time_lock(id: i64, coins: &[(&str, i64)]) -> TimeLockRecord {
    TimeLockRecord {
        id,
        description: format!("time-lock {id}"),
        amount: dummy_coins(coins),
        lock_time: 1_700_000_000,
    }
}

pub fn dummy_proposal(proposal_id: i64, status: ProposalStatus) -> Proposal {
    Proposal {
        proposal_id,
        title: format!("proposal {proposal_id}"),
        description: String::new(),
        proposal_type: ProposalKind::Text,
        proposal_status: status,
        voting_period: 14_400,
        ..Default::default()
    }
}

/// Returns an open swap from `from` to `to` locked under `random_number_hash`.
pub fn dummy_swap(from: Address, to: Address, random_number_hash: &[u8]) -> AtomicSwap {
    AtomicSwap {
        from,
        to,
        out_amount: dummy_coins(&[("BNB", 10_000)]),
        expected_income: "10000:BNB".to_string(),
        random_number_hash: HexData::new(random_number_hash),
        timestamp: 1_700_000_000,
        expire_height: 1_000,
        status: SwapStatus::Open,
        ..Default::default()
    }
}
