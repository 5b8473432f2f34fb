//! Market data message types

use helios_core::{Price, Quantity, Side, Timestamp};
use serde::{Deserialize, Serialize};

/// One price level of a book side (price + size)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSide {
    pub price: Price,
    pub size: Quantity,
}

impl MarketSide {
    /// Create a new book level
    pub fn new(price: Price, size: Quantity) -> Self {
        Self { price, size }
    }
}

/// Full order book snapshot
///
/// Levels are kept in the order the exchange reported them; gateways never
/// re-sort or diff them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub bids: Vec<MarketSide>,
    pub asks: Vec<MarketSide>,
    pub time: Timestamp,
}

impl Market {
    pub fn new(bids: Vec<MarketSide>, asks: Vec<MarketSide>, time: Timestamp) -> Self {
        Self { bids, asks, time }
    }

    /// First reported bid level
    pub fn best_bid(&self) -> Option<&MarketSide> {
        self.bids.first()
    }

    /// First reported ask level
    pub fn best_ask(&self) -> Option<&MarketSide> {
        self.asks.first()
    }
}

/// Trade print reported by the exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrade {
    /// Exchange-assigned trade id, unique per pair
    pub trade_id: String,
    pub price: Price,
    pub size: Quantity,
    pub time: Timestamp,
    /// Aggressor side, when the exchange reports one
    pub side: Option<Side>,
}
