//! Helios Gateway
//!
//! Gateway layer for Helios exchange connectors. Provides:
//! - Event transport (tokio broadcast channels, consumed through `Subscriber`)
//! - An HTTP port for REST exchange clients
//! - Normalized message types for market data and orders
//! - The gateway contract (market data, order entry, positions, details)
//! - Exchange adapters (BTC-e)
//!
//! ## Architecture
//!
//! ```text
//! External World (BTC-e REST)
//!         │  GET depth/trades, signed POST Trade/CancelOrder
//!    ┌────▼────┐
//!    │ Adapter │  ← Timer drives polls, Clock stamps events
//!    └────┬────┘
//!         │ Channels:
//!         │ md.{pair}, trades.{pair}, orders.{exchange}, control.connectivity.*
//!    ┌────▼────┐
//!    │ Engine  │
//!    └─────────┘
//! ```
//!
//! ## Transport
//!
//! Every stream is a tokio broadcast channel: each `subscribe_*` call gets an
//! independent receiver, slow receivers skip what they missed, and publishing
//! with nobody listening is fine.

pub mod adapters;
pub mod error;
pub mod gateway;
pub mod http;
pub mod messages;
pub mod transport;

// Re-export commonly used types
pub use adapters::btce::{BtceConfig, BtceConnector, ConfigError};
pub use error::{GatewayError, TransportError};
pub use gateway::{
    CombinedGateway, ConnectivityFeed, Exchange, ExchangeDetailsGateway, MarketDataGateway,
    OrderEntryGateway, PositionGateway,
};
pub use http::{HttpTransport, ReqwestTransport};
pub use messages::{
    CancelRequest, GatewayActionReport, Market, MarketSide, MarketTrade, OrderRequest,
    OrderStatusReport, ReplaceRequest,
};
pub use transport::{
    Subjects, Subscriber,
    channel::{ChannelPublisher, ChannelSubscriber},
};
