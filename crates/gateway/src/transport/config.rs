//! Transport configuration

/// Subjects for logical message routing
///
/// Even with tokio channels, we use logical subject names for:
/// - Clear message categorization
/// - Easy migration to distributed transports later
/// - Debugging and logging
pub struct Subjects;

impl Subjects {
    // Market Data (Gateway → Internal)

    /// Order book snapshots for a pair: `md.btc_usd`
    pub fn market_data(pair_key: &str) -> String {
        format!("md.{}", pair_key)
    }

    /// Trade prints for a pair: `trades.btc_usd`
    pub fn trades(pair_key: &str) -> String {
        format!("trades.{}", pair_key)
    }

    // Orders (Exchange → Gateway → Internal)

    /// Order status reports from one exchange: `orders.BtcE`
    pub fn order_updates(exchange: &str) -> String {
        format!("orders.{}", exchange)
    }

    /// Balance updates from one exchange: `positions.BtcE`
    pub fn positions(exchange: &str) -> String {
        format!("positions.{}", exchange)
    }

    // Control

    /// Connectivity changes of one gateway component: `control.connectivity.btce-md`
    pub fn connectivity(component: &str) -> String {
        format!("control.connectivity.{}", component)
    }
}
