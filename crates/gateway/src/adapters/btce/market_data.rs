//! Polled market data: book snapshots and deduplicated trade prints

use std::collections::HashSet;
use std::sync::{Arc, Weak};

use chrono::DateTime;
use helios_core::{ConnectivityStatus, Side};
use helios_ports::{Clock, Timer};
use log::{debug, error};
use parking_lot::Mutex;
use rust_decimal::Decimal;

use super::config::BtceConfig;
use super::public_client::PublicApiClient;
use super::spawn_detached;
use super::wire::{DepthBook, PairKeyed, WireTrade};
use crate::error::GatewayError;
use crate::gateway::{ConnectivityFeed, MarketDataGateway};
use crate::messages::{Market, MarketSide, MarketTrade};
use crate::transport::Subjects;
use crate::transport::channel::{ChannelPublisher, ChannelSubscriber};

const LOG_TARGET: &str = "helios::btce::md";

/// Trade ids already published by one gateway
///
/// Grows for the lifetime of the gateway; ids are never evicted.
#[derive(Default)]
pub struct SeenTradeIds {
    ids: Mutex<HashSet<u64>>,
}

impl SeenTradeIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as seen. Returns `true` only the first time.
    pub fn check_and_mark(&self, id: u64) -> bool {
        self.ids.lock().insert(id)
    }

    pub fn len(&self) -> usize {
        self.ids.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.lock().is_empty()
    }
}

/// BTC-e market data, polled over the public REST API
///
/// Registers one book refresh and one trade refresh with the timer, each
/// every `poll_interval`. A failed poll is logged and skipped.
pub struct BtceMarketDataGateway {
    pair_key: String,
    client: PublicApiClient,
    clock: Arc<dyn Clock>,
    depth_limit: u32,
    trade_limit: u32,
    market_data: ChannelPublisher<Market>,
    market_trades: ChannelPublisher<MarketTrade>,
    connectivity: ConnectivityFeed,
    seen_trades: SeenTradeIds,
}

impl BtceMarketDataGateway {
    pub fn new(
        pair_key: impl Into<String>,
        client: PublicApiClient,
        timer: &dyn Timer,
        clock: Arc<dyn Clock>,
        config: &BtceConfig,
    ) -> Arc<Self> {
        let capacity = config.channel_capacity;
        let gateway = Arc::new(Self {
            pair_key: pair_key.into(),
            client,
            clock,
            depth_limit: config.depth_limit,
            trade_limit: config.trade_limit,
            market_data: ChannelPublisher::with_capacity(capacity),
            market_trades: ChannelPublisher::with_capacity(capacity),
            connectivity: ConnectivityFeed::new("btce-md", capacity),
            seen_trades: SeenTradeIds::new(),
        });

        let weak = Arc::downgrade(&gateway);
        timer.set_interval(
            config.poll_interval(),
            Arc::new(move || Self::spawn_refresh_market_data(&weak)),
        );
        let weak = Arc::downgrade(&gateway);
        timer.set_interval(
            config.poll_interval(),
            Arc::new(move || Self::spawn_refresh_market_trades(&weak)),
        );

        let weak = Arc::downgrade(&gateway);
        timer.set_immediate(Box::new(move || {
            if let Some(gateway) = weak.upgrade() {
                gateway.connectivity.set(ConnectivityStatus::Connected);
            }
        }));

        gateway
    }

    pub fn pair_key(&self) -> &str {
        &self.pair_key
    }

    /// Trade ids published so far
    pub fn seen_trades(&self) -> &SeenTradeIds {
        &self.seen_trades
    }

    /// Fetch the book, publish it and return it
    pub async fn refresh_market_data(&self) -> Result<Market, GatewayError> {
        let path = format!("depth/{}", self.pair_key);
        let query = [("limit", self.depth_limit.to_string())];
        let mut body: PairKeyed<DepthBook> = self.client.get(&path, &query).await?;

        let book = body.remove(&self.pair_key).ok_or_else(|| {
            GatewayError::Conversion(format!("depth response has no {} entry", self.pair_key))
        })?;
        let market = Market::new(
            convert_side(book.bids),
            convert_side(book.asks),
            self.clock.now(),
        );

        debug!(
            target: LOG_TARGET,
            "Publishing book ({} bids, {} asks) on subject {}",
            market.bids.len(),
            market.asks.len(),
            Subjects::market_data(&self.pair_key)
        );
        self.market_data.send(market.clone());
        Ok(market)
    }

    /// Fetch recent trades and publish the ones not seen before, in
    /// response order. Returns what was published.
    pub async fn refresh_market_trades(&self) -> Result<Vec<MarketTrade>, GatewayError> {
        let path = format!("trades/{}", self.pair_key);
        let query = [("limit", self.trade_limit.to_string())];
        let mut body: PairKeyed<Vec<WireTrade>> = self.client.get(&path, &query).await?;

        let trades = body.remove(&self.pair_key).ok_or_else(|| {
            GatewayError::Conversion(format!("trades response has no {} entry", self.pair_key))
        })?;
        let trades = trades
            .iter()
            .map(|t| Ok((t.tid, convert_trade(t)?)))
            .collect::<Result<Vec<_>, GatewayError>>()?;

        let mut published = Vec::new();
        for (tid, trade) in trades {
            if !self.seen_trades.check_and_mark(tid) {
                continue;
            }
            debug!(
                target: LOG_TARGET,
                "Publishing trade {} ({} @ {}) on subject {}",
                tid,
                trade.size,
                trade.price,
                Subjects::trades(&self.pair_key)
            );
            self.market_trades.send(trade.clone());
            published.push(trade);
        }
        Ok(published)
    }

    fn spawn_refresh_market_data(weak: &Weak<Self>) {
        let Some(gateway) = weak.upgrade() else {
            return;
        };
        spawn_detached("market data refresh", async move {
            if let Err(e) = gateway.refresh_market_data().await {
                error!(target: LOG_TARGET, "Failed to refresh {} book: {}", gateway.pair_key, e);
            }
        });
    }

    fn spawn_refresh_market_trades(weak: &Weak<Self>) {
        let Some(gateway) = weak.upgrade() else {
            return;
        };
        spawn_detached("market trades refresh", async move {
            if let Err(e) = gateway.refresh_market_trades().await {
                error!(target: LOG_TARGET, "Failed to refresh {} trades: {}", gateway.pair_key, e);
            }
        });
    }
}

impl MarketDataGateway for BtceMarketDataGateway {
    fn subscribe_market_data(&self) -> ChannelSubscriber<Market> {
        self.market_data.subscribe()
    }

    fn subscribe_market_trades(&self) -> ChannelSubscriber<MarketTrade> {
        self.market_trades.subscribe()
    }

    fn subscribe_connectivity(&self) -> ChannelSubscriber<ConnectivityStatus> {
        self.connectivity.subscribe()
    }

    fn connectivity(&self) -> ConnectivityStatus {
        self.connectivity.current()
    }
}

fn convert_side(levels: Vec<(Decimal, Decimal)>) -> Vec<MarketSide> {
    levels
        .into_iter()
        .map(|(price, size)| MarketSide::new(price, size))
        .collect()
}

fn convert_trade(trade: &WireTrade) -> Result<MarketTrade, GatewayError> {
    let time = DateTime::from_timestamp(trade.timestamp, 0).ok_or_else(|| {
        GatewayError::Conversion(format!("trade {} has invalid timestamp {}", trade.tid, trade.timestamp))
    })?;

    Ok(MarketTrade {
        trade_id: trade.tid.to_string(),
        price: trade.price,
        size: trade.amount,
        time,
        side: aggressor_side(&trade.kind),
    })
}

fn aggressor_side(kind: &str) -> Option<Side> {
    match kind {
        "bid" => Some(Side::Buy),
        "ask" => Some(Side::Sell),
        _ => None,
    }
}
