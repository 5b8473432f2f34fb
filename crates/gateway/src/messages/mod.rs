//! Normalized message types exchanged between gateways and the engine
//!
//! Every exchange adapter converts its native payloads into these types
//! before publishing them.

pub mod market_data;
pub mod order;

pub use market_data::{Market, MarketSide, MarketTrade};
pub use order::{CancelRequest, GatewayActionReport, OrderRequest, ReplaceRequest};

// Order status deltas are domain types shared with the engine
pub use helios_core::OrderStatusReport;
