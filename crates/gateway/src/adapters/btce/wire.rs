//! BTC-e REST payloads, exactly as the exchange sends and expects them

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `depth/{pair}` body for one pair; levels are `[price, amount]`
#[derive(Debug, Clone, Deserialize)]
pub struct DepthBook {
    #[serde(default)]
    pub bids: Vec<(Decimal, Decimal)>,
    #[serde(default)]
    pub asks: Vec<(Decimal, Decimal)>,
}

/// One entry of a `trades/{pair}` body
#[derive(Debug, Clone, Deserialize)]
pub struct WireTrade {
    /// "bid" or "ask"
    #[serde(rename = "type")]
    pub kind: String,
    pub price: Decimal,
    pub amount: Decimal,
    pub tid: u64,
    /// Unix seconds
    pub timestamp: i64,
}

/// Public API bodies are keyed by pair: `{"btc_usd": ...}`
pub type PairKeyed<T> = HashMap<String, T>;

/// `Trade` method fields (new limit order)
#[derive(Debug, Clone, Serialize)]
pub struct TradeParams {
    pub pair: String,
    /// "buy" or "sell"
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// `Trade` method result
#[derive(Debug, Clone, Deserialize)]
pub struct TradeAck {
    #[serde(default)]
    pub received: Decimal,
    pub remains: Decimal,
    /// 0 when the order filled completely on arrival
    pub order_id: u64,
    #[serde(default)]
    pub funds: HashMap<String, Decimal>,
}

/// `CancelOrder` method fields
#[derive(Debug, Clone, Serialize)]
pub struct CancelParams {
    pub order_id: u64,
}

/// `CancelOrder` method result
#[derive(Debug, Clone, Deserialize)]
pub struct CancelAck {
    /// Echo of the cancelled id; some replies omit it
    #[serde(default)]
    pub order_id: u64,
    #[serde(default)]
    pub funds: HashMap<String, Decimal>,
}
