use dex_query::codec::Encoding;
use dex_query::context::AbciResponse;
use dex_query::error::{QueryError, ValidationError};
use dex_query::path::AbciPath;
use dex_query::{DexClient, QueryConfig};
use dex_testkit::fixtures::{
    dummy_address, dummy_order_book, dummy_price_level, dummy_token, dummy_trading_pair,
};
use dex_testkit::transport::{Call, MockTransport};
use dex_types::{
    DexFeeField, FeeParam, Fixed8, FixedFeeParams, OpenOrder, OrderBook, TransferFeeParam,
};
use test_log::test;

fn client(transport: &MockTransport) -> DexClient<MockTransport> {
    DexClient::new(transport.clone(), QueryConfig::default())
}

#[test]
fn depth_returns_the_levels_in_the_order_received() {
    let path = AbciPath::Depth {
        pair: "BNB_BUSD".to_string(),
        level: 5,
    };
    let book = dummy_order_book(42, &[(101, 3), (100, 7)], &[(102, 1), (103, 9)]);
    let transport = MockTransport::new().with_value(&path, &book, Encoding::LengthPrefixed);

    let read: OrderBook = client(&transport)
        .get_depth("BNB_BUSD", 5)
        .expect("book is served");

    assert_eq!(read.height, 42);
    assert_eq!(
        read.bids,
        vec![dummy_price_level(101, 3), dummy_price_level(100, 7)]
    );
    assert_eq!(
        read.asks,
        vec![dummy_price_level(102, 1), dummy_price_level(103, 9)]
    );
    assert_eq!(
        transport.calls(),
        vec![Call::Abci {
            path: "dex/orderbook/BNB_BUSD/5".to_string(),
            data: Vec::new(),
        }]
    );
}

#[test]
fn depth_served_under_the_wrong_encoding_fails_to_decode() {
    let path = AbciPath::Depth {
        pair: "BNB_BUSD-BD1".to_string(),
        level: 5,
    };
    let book = dummy_order_book(1, &[(1, 1)], &[]);
    let transport = MockTransport::new().with_value(&path, &book, Encoding::Bare);

    let err = client(&transport)
        .get_depth("BNB_BUSD-BD1", 5)
        .expect_err("bare payload on a length-prefixed route");

    assert!(matches!(err.error(), QueryError::Decoding(_)));
}

#[test]
fn empty_depth_is_an_error() {
    let transport = MockTransport::new();

    let err = client(&transport)
        .get_depth("BNB_BUSD-BD1", 10)
        .expect_err("a book is required");

    assert!(matches!(err.error(), QueryError::Decoding(_)));
}

#[test]
fn remote_failure_carries_the_remote_log() {
    let path = AbciPath::Depth {
        pair: "XYZ-000_BNB".to_string(),
        level: 20,
    };
    let transport = MockTransport::new()
        .with_response(&path, AbciResponse::failure(6, "pair XYZ-000_BNB does not exist"));

    let err = client(&transport)
        .get_depth("XYZ-000_BNB", 20)
        .expect_err("remote failure");

    match err.error() {
        QueryError::Remote { code, log } => {
            assert_eq!(*code, 6);
            assert_eq!(log, "pair XYZ-000_BNB does not exist");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains("pair=XYZ-000_BNB, level=20"));
}

#[test]
fn token_list_and_info() {
    let tokens = vec![dummy_token("BNB"), dummy_token("BUSD-BD1")];
    let transport = MockTransport::new()
        .with_value(
            &AbciPath::Tokens {
                offset: 0,
                limit: 10,
            },
            &tokens,
            Encoding::LengthPrefixed,
        )
        .with_value(
            &AbciPath::TokenInfo {
                symbol: "BUSD-BD1".to_string(),
            },
            &tokens[1],
            Encoding::LengthPrefixed,
        );
    let client = client(&transport);

    assert_eq!(client.list_tokens(0, 10).expect("listed"), tokens);
    assert_eq!(client.get_token_info("BUSD-BD1").expect("known"), tokens[1]);
    assert!(client.list_tokens(10, 10).expect("listed").is_empty());
}

#[test]
fn trading_pairs_and_open_orders() {
    let pairs = vec![dummy_trading_pair("BUSD-BD1", "BNB")];
    let owner = dummy_address(3);
    let orders = vec![OpenOrder {
        id: "order-1".to_string(),
        symbol: "BUSD-BD1_BNB".to_string(),
        price: Fixed8::ONE,
        quantity: Fixed8::new(5),
        ..Default::default()
    }];
    let transport = MockTransport::new()
        .with_value(
            &AbciPath::TradingPairs {
                offset: 0,
                limit: 100,
            },
            &pairs,
            Encoding::LengthPrefixed,
        )
        .with_value(
            &AbciPath::OpenOrders {
                pair: "BUSD-BD1_BNB".to_string(),
                address: owner.to_bech32("bnb"),
            },
            &orders,
            Encoding::LengthPrefixed,
        );
    let client = client(&transport);

    assert_eq!(client.get_trading_pairs(0, 100).expect("listed"), pairs);
    assert_eq!(
        client
            .get_open_orders(&owner, "BUSD-BD1_BNB")
            .expect("listed"),
        orders
    );
    assert!(client
        .get_open_orders(&dummy_address(4), "BUSD-BD1_BNB")
        .expect("listed")
        .is_empty());
}

#[test]
fn fee_parameters_of_every_shape() {
    let fees = vec![
        FeeParam::Fixed(FixedFeeParams {
            msg_type: "submit_proposal".to_string(),
            fee: 1_000_000_000,
            ..Default::default()
        }),
        FeeParam::Transfer(TransferFeeParam {
            multi_transfer_fee: 30_000,
            lower_limit_as_multi: 2,
            ..Default::default()
        }),
        FeeParam::Dex(vec![DexFeeField {
            fee_name: "ExpireFee".to_string(),
            fee_value: 20_000,
        }]),
    ];
    let transport =
        MockTransport::new().with_value(&AbciPath::Fees, &fees, Encoding::LengthPrefixed);

    assert_eq!(client(&transport).get_fee().expect("served"), fees);
}

#[test]
fn invalid_market_parameters_never_reach_the_transport() {
    let transport = MockTransport::new();
    let client = client(&transport);

    let err = client.get_depth("BNB-BUSD", 5).expect_err("not a pair");
    assert!(matches!(
        err.error(),
        QueryError::Validation(ValidationError::InvalidPair { .. })
    ));

    let err = client.get_depth("BNB_BUSD-BD1", 3).expect_err("not a level");
    assert!(matches!(
        err.error(),
        QueryError::Validation(ValidationError::InvalidDepthLevel { .. })
    ));

    assert!(client.get_trading_pairs(-1, 10).is_err());
    assert!(client.list_tokens(0, 1_001).is_err());
    assert!(client.get_token_info("bnb").is_err());
    assert!(client.get_open_orders(&dummy_address(1), "BNB").is_err());

    assert!(transport.is_untouched());
}

#[test]
fn transport_failures_surface_unchanged() {
    let transport = MockTransport::new().with_failing_path(&AbciPath::Fees);

    let err = client(&transport).get_fee().expect_err("connection refused");

    assert!(matches!(err.error(), QueryError::Transport(_)));
}
