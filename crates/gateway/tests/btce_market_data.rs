//! Integration tests: BTC-e market data polling against a scripted transport

mod support;

use std::sync::Arc;
use std::time::Duration;

use helios_clock::Clock;
use helios_core::{ConnectivityStatus, Side};
use helios_gateway::{
    GatewayError, MarketDataGateway, Subscriber,
    adapters::btce::{BtceMarketDataGateway, PublicApiClient},
};
use rust_decimal_macros::dec;
use support::{MockTransport, depth_url, manual_clock, manual_timer, test_config, trades_url, PUBLIC_URL};
use tokio::time::timeout;

const PAIR: &str = "btc_usd";

const DEPTH: &str = r#"{"btc_usd":{
    "bids":[[100.5,2],[100.0,5]],
    "asks":[[101.0,1.25],[101.5,3]]
}}"#;

const TRADES_FIRST: &str = r#"{"btc_usd":[
    {"type":"ask","price":430.1,"amount":0.5,"tid":103,"timestamp":1400000000},
    {"type":"bid","price":430.2,"amount":1,"tid":102,"timestamp":1399999990},
    {"type":"bid","price":430.0,"amount":2,"tid":101,"timestamp":1399999980}
]}"#;

const TRADES_SECOND: &str = r#"{"btc_usd":[
    {"type":"bid","price":431.0,"amount":0.1,"tid":104,"timestamp":1400000005},
    {"type":"ask","price":430.1,"amount":0.5,"tid":103,"timestamp":1400000000},
    {"type":"bid","price":430.2,"amount":1,"tid":102,"timestamp":1399999990}
]}"#;

fn gateway(
    mock: &Arc<MockTransport>,
) -> (Arc<BtceMarketDataGateway>, helios_clock::ManualTimer, Arc<helios_clock::ManualClock>) {
    let timer = manual_timer();
    let clock = manual_clock();
    let gateway = BtceMarketDataGateway::new(
        PAIR,
        PublicApiClient::new(mock.clone(), PUBLIC_URL),
        &timer,
        clock.clone(),
        &test_config(),
    );
    (gateway, timer, clock)
}

#[tokio::test]
async fn test_book_levels_keep_exchange_order() {
    let _ = env_logger::try_init();
    let mock = MockTransport::new();
    mock.respond(&depth_url(PAIR), DEPTH);
    let (gateway, _timer, clock) = gateway(&mock);
    let mut books = gateway.subscribe_market_data();

    let market = gateway.refresh_market_data().await.unwrap();

    let bids: Vec<_> = market.bids.iter().map(|l| (l.price, l.size)).collect();
    assert_eq!(bids, vec![(dec!(100.5), dec!(2)), (dec!(100.0), dec!(5))]);
    let asks: Vec<_> = market.asks.iter().map(|l| (l.price, l.size)).collect();
    assert_eq!(asks, vec![(dec!(101.0), dec!(1.25)), (dec!(101.5), dec!(3))]);
    assert_eq!(market.time, clock.now());

    assert_eq!(books.try_next().unwrap(), Some(market));

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, depth_url(PAIR));
    assert_eq!(requests[0].query, vec![("limit".to_string(), "5".to_string())]);
}

#[tokio::test]
async fn test_repeated_trades_published_once() {
    let _ = env_logger::try_init();
    let mock = MockTransport::new();
    mock.respond(&trades_url(PAIR), TRADES_FIRST);
    mock.respond(&trades_url(PAIR), TRADES_SECOND);
    let (gateway, _timer, _clock) = gateway(&mock);
    let mut trades = gateway.subscribe_market_trades();

    let first = gateway.refresh_market_trades().await.unwrap();
    let second = gateway.refresh_market_trades().await.unwrap();
    // Third poll repeats the second answer: nothing new
    let third = gateway.refresh_market_trades().await.unwrap();

    let ids = |batch: &[helios_gateway::MarketTrade]| {
        batch.iter().map(|t| t.trade_id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), vec!["103", "102", "101"]);
    assert_eq!(ids(&second), vec!["104"]);
    assert!(third.is_empty());
    assert_eq!(gateway.seen_trades().len(), 4);

    let mut published = Vec::new();
    while let Some(trade) = trades.try_next().unwrap() {
        published.push(trade.trade_id);
    }
    assert_eq!(published, vec!["103", "102", "101", "104"]);
}

#[tokio::test]
async fn test_trade_fields_converted() {
    let mock = MockTransport::new();
    mock.respond(&trades_url(PAIR), TRADES_FIRST);
    let (gateway, _timer, _clock) = gateway(&mock);

    let trades = gateway.refresh_market_trades().await.unwrap();

    assert_eq!(trades[0].side, Some(Side::Sell));
    assert_eq!(trades[0].price, dec!(430.1));
    assert_eq!(trades[0].size, dec!(0.5));
    assert_eq!(trades[0].time.timestamp(), 1_400_000_000);
    assert_eq!(trades[1].side, Some(Side::Buy));
}

#[tokio::test]
async fn test_failed_poll_recovers_on_next_tick() {
    let _ = env_logger::try_init();
    let mock = MockTransport::new();
    mock.respond(&depth_url(PAIR), "<html>502 Bad Gateway</html>");
    mock.respond(&depth_url(PAIR), DEPTH);
    let (gateway, _timer, _clock) = gateway(&mock);

    let err = gateway.refresh_market_data().await.unwrap_err();
    assert!(matches!(err, GatewayError::Deserialization(_)));

    let market = gateway.refresh_market_data().await.unwrap();
    assert_eq!(market.best_bid().unwrap().price, dec!(100.5));
}

#[tokio::test]
async fn test_missing_pair_in_body() {
    let mock = MockTransport::new();
    mock.respond(&depth_url(PAIR), r#"{"ltc_btc":{"bids":[],"asks":[]}}"#);
    let (gateway, _timer, _clock) = gateway(&mock);

    let err = gateway.refresh_market_data().await.unwrap_err();
    assert!(matches!(err, GatewayError::Conversion(_)));
}

#[tokio::test]
async fn test_transport_failure_is_an_error() {
    let mock = MockTransport::new();
    mock.fail(&trades_url(PAIR));
    let (gateway, _timer, _clock) = gateway(&mock);

    let err = gateway.refresh_market_trades().await.unwrap_err();
    assert!(matches!(err, GatewayError::Transport(_)));
    assert!(gateway.seen_trades().is_empty());
}

#[tokio::test]
async fn test_each_refresh_registered_once() {
    let _ = env_logger::try_init();
    let mock = MockTransport::new();
    mock.respond(&depth_url(PAIR), DEPTH);
    mock.respond(&trades_url(PAIR), TRADES_FIRST);
    let (gateway, timer, _clock) = gateway(&mock);
    let mut books = gateway.subscribe_market_data();
    let mut trades = gateway.subscribe_market_trades();

    assert_eq!(
        timer.interval_periods(),
        vec![Duration::from_secs(2), Duration::from_secs(2)]
    );

    assert_eq!(timer.tick(), 2);
    let book = timeout(Duration::from_secs(1), books.next()).await.unwrap().unwrap();
    assert_eq!(book.bids.len(), 2);
    let trade = timeout(Duration::from_secs(1), trades.next()).await.unwrap().unwrap();
    assert_eq!(trade.trade_id, "103");

    assert_eq!(mock.requests_to(&depth_url(PAIR)).len(), 1);
    assert_eq!(mock.requests_to(&trades_url(PAIR)).len(), 1);
}

#[tokio::test]
async fn test_connected_once_on_immediate() {
    let mock = MockTransport::new();
    let (gateway, timer, _clock) = gateway(&mock);
    let mut connectivity = gateway.subscribe_connectivity();

    assert_eq!(gateway.connectivity(), ConnectivityStatus::Disconnected);
    assert_eq!(timer.fire_immediates(), 1);

    assert_eq!(gateway.connectivity(), ConnectivityStatus::Connected);
    assert_eq!(
        connectivity.try_next().unwrap(),
        Some(ConnectivityStatus::Connected)
    );
    assert_eq!(connectivity.try_next().unwrap(), None);
}

#[tokio::test]
async fn test_dropped_gateway_stops_polling() {
    let mock = MockTransport::new();
    mock.respond(&depth_url(PAIR), DEPTH);
    let (gateway, timer, _clock) = gateway(&mock);

    drop(gateway);
    timer.tick();
    timer.fire_immediates();
    tokio::task::yield_now().await;

    assert!(mock.requests().is_empty());
}
