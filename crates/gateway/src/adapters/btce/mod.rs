//! BTC-e exchange adapter
//!
//! Public data (book, trades) is polled over `GET {public}/depth|trades/{pair}`;
//! orders go through signed form POSTs to `{trade}/{method}`.
//!
//! ```text
//!            BtceConnector::new(pair, timer, clock, config)
//!                              │
//!   ┌──────────────┬───────────┴──────┬─────────────────┐
//!   │ MarketData   │ OrderEntry       │ Position        │ Details
//!   │ (public GET) │ (signed POST)    │ (silent)        │ (static)
//!   └──────────────┴──────────────────┴─────────────────┘
//!                       CombinedGateway
//! ```

mod auth_client;
mod config;
mod details;
mod market_data;
mod nonce;
mod order_entry;
mod position;
mod public_client;
mod wire;

pub use auth_client::{ApiOutcome, ApiResponse, AuthenticatedApiClient, Credentials, sign_form};
pub use config::{API_KEY_ENV, API_SECRET_ENV, BtceConfig, ConfigError};
pub use details::BtceExchangeDetails;
pub use market_data::{BtceMarketDataGateway, SeenTradeIds};
pub use nonce::NonceGenerator;
pub use order_entry::BtceOrderEntryGateway;
pub use position::BtcePositionGateway;
pub use public_client::PublicApiClient;
pub use wire::{CancelAck, CancelParams, DepthBook, TradeAck, TradeParams, WireTrade};

use std::future::Future;
use std::sync::Arc;

use helios_core::CurrencyPair;
use helios_ports::{Clock, Timer};
use log::{error, info};
use tokio::runtime::Handle;

use crate::error::GatewayError;
use crate::gateway::CombinedGateway;
use crate::http::{HttpTransport, ReqwestTransport};

/// Builds the four BTC-e facets for one currency pair
pub struct BtceConnector;

impl BtceConnector {
    /// Connector over live HTTP (one pooled reqwest client for both APIs)
    pub fn new(
        pair: &CurrencyPair,
        timer: &dyn Timer,
        clock: Arc<dyn Clock>,
        config: &BtceConfig,
    ) -> Result<CombinedGateway, GatewayError> {
        let http: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new()?);
        Self::with_transports(pair, timer, clock, config, http.clone(), http)
    }

    /// Connector over caller-supplied transports for the public and trade APIs
    pub fn with_transports(
        pair: &CurrencyPair,
        timer: &dyn Timer,
        clock: Arc<dyn Clock>,
        config: &BtceConfig,
        public_http: Arc<dyn HttpTransport>,
        trade_http: Arc<dyn HttpTransport>,
    ) -> Result<CombinedGateway, GatewayError> {
        config.validate()?;
        let pair_key = Self::pair_key(pair);
        info!("Starting BTC-e connector for {} ({})", pair, pair_key);

        let public_client = PublicApiClient::new(public_http, &config.public_rest_url);
        let auth_client = Arc::new(AuthenticatedApiClient::new(
            trade_http,
            &config.trade_rest_url,
            config.credentials(),
            clock.clone(),
        ));

        let market_data =
            BtceMarketDataGateway::new(pair_key.clone(), public_client, timer, clock.clone(), config);
        let order_entry = BtceOrderEntryGateway::new(
            pair_key.clone(),
            auth_client,
            timer,
            clock,
            config.channel_capacity,
        );
        let positions = BtcePositionGateway::new(pair_key, config.channel_capacity);

        Ok(CombinedGateway::new(
            market_data,
            Arc::new(order_entry),
            Arc::new(positions),
            Arc::new(BtceExchangeDetails),
        ))
    }

    /// `BTC/USD` → `btc_usd`
    pub fn pair_key(pair: &CurrencyPair) -> String {
        format!("{}_{}", pair.base.code(), pair.quote.code()).to_lowercase()
    }
}

/// Run exchange I/O off the caller's stack; timer callbacks are synchronous
fn spawn_detached<F>(what: &str, future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match Handle::try_current() {
        Ok(handle) => {
            handle.spawn(future);
        }
        Err(_) => error!("No tokio runtime to run {}", what),
    }
}
