//! Normalized gateway contract
//!
//! An exchange connector is split into four independent facets, each behind
//! its own trait so the engine can hold them as trait objects:
//!
//! - [`MarketDataGateway`]: book snapshots, trade prints, connectivity
//! - [`OrderEntryGateway`]: new/cancel/replace plus order status reports
//! - [`PositionGateway`]: balance updates
//! - [`ExchangeDetailsGateway`]: static facts (fees, name)
//!
//! [`CombinedGateway`] bundles one of each.

use std::fmt;
use std::sync::Arc;

use helios_core::{ConnectivityStatus, CurrencyPosition, OrderStatusReport};
use log::info;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::messages::{
    CancelRequest, GatewayActionReport, Market, MarketTrade, OrderRequest, ReplaceRequest,
};
use crate::transport::Subjects;
use crate::transport::channel::{ChannelPublisher, ChannelSubscriber};

/// Exchanges with a connector in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    BtcE,
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exchange::BtcE => write!(f, "BtcE"),
        }
    }
}

/// Market data facet
pub trait MarketDataGateway: Send + Sync {
    /// Full book snapshots, one per successful poll
    fn subscribe_market_data(&self) -> ChannelSubscriber<Market>;

    /// Trade prints, each at most once
    fn subscribe_market_trades(&self) -> ChannelSubscriber<MarketTrade>;

    fn subscribe_connectivity(&self) -> ChannelSubscriber<ConnectivityStatus>;

    /// Latest connectivity published on this facet
    fn connectivity(&self) -> ConnectivityStatus;
}

/// Order entry facet
///
/// Actions return a [`GatewayActionReport`] right away; what the exchange
/// made of them arrives later on [`subscribe_order_updates`](Self::subscribe_order_updates).
pub trait OrderEntryGateway: Send + Sync {
    fn send_order(&self, order: &OrderRequest) -> GatewayActionReport;

    fn cancel_order(&self, cancel: &CancelRequest) -> GatewayActionReport;

    fn replace_order(&self, replace: &ReplaceRequest) -> GatewayActionReport;

    /// Fresh client order id
    fn generate_client_order_id(&self) -> String;

    /// Whether cancels address orders by client id (true) or exchange id (false)
    fn cancels_by_client_order_id(&self) -> bool;

    fn subscribe_order_updates(&self) -> ChannelSubscriber<OrderStatusReport>;

    fn subscribe_connectivity(&self) -> ChannelSubscriber<ConnectivityStatus>;

    fn connectivity(&self) -> ConnectivityStatus;
}

/// Balance facet
pub trait PositionGateway: Send + Sync {
    fn subscribe_positions(&self) -> ChannelSubscriber<CurrencyPosition>;
}

/// Static exchange facts
pub trait ExchangeDetailsGateway: Send + Sync {
    fn exchange(&self) -> Exchange;

    fn name(&self) -> &str;

    /// Fee rate for resting liquidity (negative is a rebate)
    fn make_fee(&self) -> Decimal;

    /// Fee rate for taking liquidity
    fn take_fee(&self) -> Decimal;

    fn has_self_trade_prevention(&self) -> bool;
}

/// One connector: the four facets of a single exchange/pair
#[derive(Clone)]
pub struct CombinedGateway {
    pub market_data: Arc<dyn MarketDataGateway>,
    pub order_entry: Arc<dyn OrderEntryGateway>,
    pub positions: Arc<dyn PositionGateway>,
    pub details: Arc<dyn ExchangeDetailsGateway>,
}

impl CombinedGateway {
    pub fn new(
        market_data: Arc<dyn MarketDataGateway>,
        order_entry: Arc<dyn OrderEntryGateway>,
        positions: Arc<dyn PositionGateway>,
        details: Arc<dyn ExchangeDetailsGateway>,
    ) -> Self {
        Self {
            market_data,
            order_entry,
            positions,
            details,
        }
    }
}

/// Connectivity stream plus its latest value
pub struct ConnectivityFeed {
    component: &'static str,
    publisher: ChannelPublisher<ConnectivityStatus>,
    current: Mutex<ConnectivityStatus>,
}

impl ConnectivityFeed {
    pub fn new(component: &'static str, capacity: usize) -> Self {
        Self {
            component,
            publisher: ChannelPublisher::with_capacity(capacity),
            current: Mutex::new(ConnectivityStatus::default()),
        }
    }

    /// Record and publish a status
    pub fn set(&self, status: ConnectivityStatus) {
        *self.current.lock() = status;
        info!(
            "{} is {:?} (subject {})",
            self.component,
            status,
            Subjects::connectivity(self.component)
        );
        self.publisher.send(status);
    }

    pub fn current(&self) -> ConnectivityStatus {
        *self.current.lock()
    }

    pub fn subscribe(&self) -> ChannelSubscriber<ConnectivityStatus> {
        self.publisher.subscribe()
    }
}
