//! Reads accounts under the two views of state the node exposes.
//!
//! The committed view reads the account store as of the last finalized
//! block. The latest view asks the node's working state, which may already
//! reflect transactions that passed validation but are not yet in a block.
//! The two can disagree and are never reconciled here.

use dex_types::{Account, Address};
use tracing::debug;

use crate::classify::{classify, is_height_unavailable};
use crate::codec::Encoding;
use crate::config::QueryConfig;
use crate::context::{AbciResponse, QueryTransport};
use crate::error::QueryError;
use crate::path::{AbciPath, StoreKey};

/// Reads the account from the node's working state.
pub fn latest_account<T>(
    transport: &T,
    config: &QueryConfig,
    address: &Address,
) -> Result<Option<Account>, QueryError>
where
    T: QueryTransport,
{
    let path = AbciPath::Account {
        address: address.to_bech32(&config.bech32_prefix),
    };
    let path = path.to_string();
    let response = transport.abci_query(&path, &[])?;

    classify(response)?.logged(&path).into_optional(Encoding::Bare)
}

/// Reads the account from the account store as of the last finalized block.
pub fn committed_account<T>(transport: &T, address: &Address) -> Result<Option<Account>, QueryError>
where
    T: QueryTransport,
{
    let response = read_committed(transport, &StoreKey::Account(*address))?;

    classify(response)?
        .logged("committed account")
        .into_optional(Encoding::Bare)
}

/// Reads `key` at the height preceding the latest one, falling back once to
/// the current height when that height does not exist yet or its state is
/// no longer served.
pub fn read_committed<T>(transport: &T, key: &StoreKey) -> Result<AbciResponse, QueryError>
where
    T: QueryTransport,
{
    let bytes = key.to_bytes();
    let store_name = key.store_name();
    let latest = transport.latest_height()?;

    let committed = latest.saturating_sub(1);
    if committed > 0 {
        let response = transport.query_store(&bytes, store_name, Some(committed))?;
        if !is_height_unavailable(&response) {
            return Ok(response);
        }
        debug!(height = committed, store = store_name, "committed height unavailable");
    }

    debug!(latest, store = store_name, "reading store at the current height");
    let height = (latest > 0).then_some(latest);
    Ok(transport.query_store(&bytes, store_name, height)?)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use dex_types::{BaseAccount, Coin, Coins, NamedAccount, TxInfo};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::classify::HEIGHT_UNAVAILABLE_CODE;
    use crate::codec::encode;
    use crate::error::TransportError;

    /// Serves one account at heights listed as available and records the
    /// heights it was asked for.
    struct StoreStub {
        latest: u64,
        available: Vec<u64>,
        account: Account,
        heights: RefCell<Vec<Option<u64>>>,
        paths: RefCell<Vec<String>>,
    }

    impl QueryTransport for StoreStub {
        fn abci_query(&self, path: &str, _data: &[u8]) -> Result<AbciResponse, TransportError> {
            self.paths.borrow_mut().push(path.to_string());
            let bytes = encode(&self.account, Encoding::Bare)
                .map_err(TransportError::request)?;
            Ok(AbciResponse::ok(bytes))
        }

        fn query_store(
            &self,
            key: &[u8],
            store_name: &str,
            height: Option<u64>,
        ) -> Result<AbciResponse, TransportError> {
            assert_eq!(store_name, "acc");
            assert!(key.starts_with(b"account:"));
            self.heights.borrow_mut().push(height);

            match height {
                Some(h) if !self.available.contains(&h) => Ok(AbciResponse::failure(
                    HEIGHT_UNAVAILABLE_CODE,
                    format!("height {h} is not available"),
                )),
                _ => {
                    let bytes = encode(&self.account, Encoding::Bare)
                        .map_err(TransportError::request)?;
                    Ok(AbciResponse::ok(bytes))
                }
            }
        }

        fn latest_height(&self) -> Result<u64, TransportError> {
            Ok(self.latest)
        }

        fn search_txs(
            &self,
            _query: &str,
            _prove: bool,
            _page: u32,
            _per_page: u32,
        ) -> Result<Vec<TxInfo>, TransportError> {
            Ok(Vec::new())
        }
    }

    #[fixture]
    fn account() -> Account {
        NamedAccount {
            base: BaseAccount {
                address: Address::new([9; 20]),
                coins: Coins::new(vec![Coin::new("BNB", 100)]),
                sequence: 4,
                ..Default::default()
            },
            name: "alice".to_string(),
            ..Default::default()
        }
        .into()
    }

    fn stub(latest: u64, available: Vec<u64>, account: Account) -> StoreStub {
        StoreStub {
            latest,
            available,
            account,
            heights: RefCell::default(),
            paths: RefCell::default(),
        }
    }

    #[rstest]
    fn committed_view_reads_the_previous_height(account: Account) {
        let transport = stub(10, vec![9, 10], account.clone());

        let read = committed_account(&transport, account.address()).expect("readable");

        assert_eq!(read, Some(account));
        assert_eq!(*transport.heights.borrow(), vec![Some(9)]);
    }

    #[rstest]
    fn committed_view_falls_back_when_height_is_unavailable(account: Account) {
        let transport = stub(10, vec![10], account.clone());

        let read = committed_account(&transport, account.address()).expect("readable");

        assert_eq!(read, Some(account));
        assert_eq!(*transport.heights.borrow(), vec![Some(9), Some(10)]);
    }

    #[rstest]
    #[case(1, vec![Some(1)])]
    #[case(0, vec![None])]
    fn committed_view_early_in_the_chain(
        account: Account,
        #[case] latest: u64,
        #[case] expected: Vec<Option<u64>>,
    ) {
        let transport = stub(latest, vec![1], account.clone());

        let read = committed_account(&transport, account.address()).expect("readable");

        assert_eq!(read, Some(account));
        assert_eq!(*transport.heights.borrow(), expected);
    }

    #[rstest]
    fn latest_view_uses_the_bech32_account_path(account: Account) {
        let transport = stub(10, vec![], account.clone());
        let config = QueryConfig::testnet();

        let read = latest_account(&transport, &config, account.address()).expect("readable");

        assert_eq!(read, Some(account.clone()));
        assert_eq!(
            *transport.paths.borrow(),
            vec![format!("/account/{}", account.address().to_bech32("tbnb"))]
        );
        assert!(transport.heights.borrow().is_empty());
    }
}
