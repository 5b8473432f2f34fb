use std::fmt::Debug;

use helios_gateway::{ChannelSubscriber, CombinedGateway, Subscriber};
use log::{info, warn};
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;

const LOG_TARGET: &str = "helios::runner";

/// Spawn one logging task per event stream of `gateway`
///
/// Tasks run until aborted; callers own the handles.
pub fn spawn_event_loggers(gateway: &CombinedGateway) -> Vec<JoinHandle<()>> {
    vec![
        spawn_logger("market data", gateway.market_data.subscribe_market_data()),
        spawn_logger("trade", gateway.market_data.subscribe_market_trades()),
        spawn_logger("md connectivity", gateway.market_data.subscribe_connectivity()),
        spawn_logger("order update", gateway.order_entry.subscribe_order_updates()),
        spawn_logger("oe connectivity", gateway.order_entry.subscribe_connectivity()),
        spawn_logger("position", gateway.positions.subscribe_positions()),
    ]
}

fn spawn_logger<M>(stream: &'static str, mut subscriber: ChannelSubscriber<M>) -> JoinHandle<()>
where
    M: Debug + Clone + Send + DeserializeOwned + 'static,
{
    tokio::spawn(async move {
        loop {
            match subscriber.next().await {
                Ok(msg) => info!(target: LOG_TARGET, "{}: {:?}", stream, msg),
                Err(e) => {
                    warn!(target: LOG_TARGET, "{} stream ended: {}", stream, e);
                    break;
                }
            }
        }
    })
}
