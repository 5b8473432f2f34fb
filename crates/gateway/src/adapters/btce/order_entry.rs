//! Order entry over the BTC-e trade API
//!
//! Actions return a receipt immediately and run the signed call on a spawned
//! task. The outcome is published as an `OrderStatusReport`:
//!
//! | call          | exchange says            | report                              |
//! |---------------|--------------------------|-------------------------------------|
//! | `Trade`       | success, `order_id == 0` | `Complete`, leaves = `remains`      |
//! | `Trade`       | success, `order_id != 0` | `Working`, exchange id, leaves      |
//! | `CancelOrder` | success                  | `Cancelled`                         |
//! | either        | `success: 0`             | `Rejected` with the exchange text   |
//!
//! Transport failures produce no report; they are logged.

use std::sync::{Arc, Weak};

use helios_core::{ConnectivityStatus, OrderStatus, OrderStatusReport};
use helios_ports::{Clock, Timer};
use log::{debug, error, info, warn};
use uuid::Uuid;

use super::auth_client::{ApiOutcome, ApiResponse, AuthenticatedApiClient};
use super::spawn_detached;
use super::wire::{CancelAck, CancelParams, TradeAck, TradeParams};
use crate::error::GatewayError;
use crate::gateway::{ConnectivityFeed, Exchange, OrderEntryGateway};
use crate::messages::{
    CancelRequest, GatewayActionReport, OrderRequest, ReplaceRequest,
};
use crate::transport::Subjects;
use crate::transport::channel::{ChannelPublisher, ChannelSubscriber};

const LOG_TARGET: &str = "helios::btce::oe";

const CLIENT_ORDER_ID_LEN: usize = 12;

struct OrderEntryInner {
    pair_key: String,
    client: Arc<AuthenticatedApiClient>,
    clock: Arc<dyn Clock>,
    order_updates: ChannelPublisher<OrderStatusReport>,
    connectivity: ConnectivityFeed,
}

/// BTC-e order entry for one pair
pub struct BtceOrderEntryGateway {
    inner: Arc<OrderEntryInner>,
}

impl BtceOrderEntryGateway {
    pub fn new(
        pair_key: impl Into<String>,
        client: Arc<AuthenticatedApiClient>,
        timer: &dyn Timer,
        clock: Arc<dyn Clock>,
        capacity: usize,
    ) -> Self {
        let inner = Arc::new(OrderEntryInner {
            pair_key: pair_key.into(),
            client,
            clock,
            order_updates: ChannelPublisher::with_capacity(capacity),
            connectivity: ConnectivityFeed::new("btce-oe", capacity),
        });

        let weak: Weak<OrderEntryInner> = Arc::downgrade(&inner);
        timer.set_immediate(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.connectivity.set(ConnectivityStatus::Connected);
            }
        }));

        Self { inner }
    }

    /// Place a limit order and wait for the exchange's answer
    ///
    /// The resulting report is also published on the order update stream.
    pub async fn submit(&self, order: &OrderRequest) -> Result<OrderStatusReport, GatewayError> {
        self.inner.submit(order).await
    }

    /// Cancel an order and wait for the exchange's answer
    ///
    /// The resulting report is also published on the order update stream.
    pub async fn cancel(&self, cancel: &CancelRequest) -> Result<OrderStatusReport, GatewayError> {
        self.inner.cancel(cancel).await
    }

    fn receipt(&self) -> GatewayActionReport {
        GatewayActionReport::new(self.inner.clock.now())
    }
}

impl OrderEntryInner {
    fn publish(&self, report: &OrderStatusReport) {
        debug!(
            target: LOG_TARGET,
            "Publishing {:?} for {} on subject {}",
            report.status,
            report.order_id,
            Subjects::order_updates(&Exchange::BtcE.to_string())
        );
        self.order_updates.send(report.clone());
    }

    async fn submit(&self, order: &OrderRequest) -> Result<OrderStatusReport, GatewayError> {
        let params = TradeParams {
            pair: self.pair_key.clone(),
            kind: order.side.as_str(),
            rate: order.price,
            amount: order.quantity,
        };
        info!(
            target: LOG_TARGET,
            "Sending {} {} {} @ {} ({})",
            params.kind, order.quantity, self.pair_key, order.price, order.order_id
        );

        let response: ApiResponse<TradeAck> = self.client.post("Trade", &params).await?;
        let now = self.clock.now();

        let report = match response.into_outcome()? {
            ApiOutcome::Success(ack) => {
                let report = OrderStatusReport::new(order.order_id.clone(), OrderStatus::Working, now)
                    .with_leaves_quantity(ack.remains);
                if ack.order_id == 0 {
                    info!(target: LOG_TARGET, "Order {} filled on arrival", order.order_id);
                    OrderStatusReport {
                        status: OrderStatus::Complete,
                        ..report
                    }
                } else {
                    info!(
                        target: LOG_TARGET,
                        "Order {} working as {}, {} left",
                        order.order_id, ack.order_id, ack.remains
                    );
                    report.with_exchange_id(ack.order_id.to_string())
                }
            }
            ApiOutcome::Failure(message) => {
                warn!(target: LOG_TARGET, "Order {} rejected: {}", order.order_id, message);
                OrderStatusReport::rejected(order.order_id.clone(), message, now)
            }
        };

        self.publish(&report);
        Ok(report)
    }

    async fn cancel(&self, cancel: &CancelRequest) -> Result<OrderStatusReport, GatewayError> {
        let order_id = match parse_exchange_id(cancel) {
            Ok(id) => id,
            Err(e) => {
                warn!(target: LOG_TARGET, "Not cancelling {}: {}", cancel.order_id, e);
                let report =
                    OrderStatusReport::rejected(cancel.order_id.clone(), e.to_string(), self.clock.now());
                self.publish(&report);
                return Ok(report);
            }
        };
        info!(target: LOG_TARGET, "Cancelling {} ({})", cancel.order_id, order_id);

        let response: ApiResponse<CancelAck> = self
            .client
            .post("CancelOrder", &CancelParams { order_id })
            .await?;
        let now = self.clock.now();

        let report = match response.into_outcome()? {
            ApiOutcome::Success(_) => {
                info!(target: LOG_TARGET, "Order {} cancelled", cancel.order_id);
                OrderStatusReport::new(cancel.order_id.clone(), OrderStatus::Cancelled, now)
            }
            ApiOutcome::Failure(message) => {
                warn!(target: LOG_TARGET, "Cancel of {} rejected: {}", cancel.order_id, message);
                OrderStatusReport::rejected(cancel.order_id.clone(), message, now)
            }
        };

        self.publish(&report);
        Ok(report)
    }
}

/// Exchange ids are the decimal `order_id` BTC-e returned for the order
fn parse_exchange_id(cancel: &CancelRequest) -> Result<u64, GatewayError> {
    let raw = cancel.exchange_id.as_deref().ok_or_else(|| {
        GatewayError::InvalidOrder(format!("order {} has no exchange id", cancel.order_id))
    })?;
    raw.trim().parse::<u64>().map_err(|_| {
        GatewayError::InvalidOrder(format!("unusable exchange id {:?} for order {}", raw, cancel.order_id))
    })
}

impl OrderEntryGateway for BtceOrderEntryGateway {
    fn send_order(&self, order: &OrderRequest) -> GatewayActionReport {
        let inner = self.inner.clone();
        let order = order.clone();
        spawn_detached("send order", async move {
            if let Err(e) = inner.submit(&order).await {
                error!(target: LOG_TARGET, "Failed to send order {}: {}", order.order_id, e);
            }
        });
        self.receipt()
    }

    fn cancel_order(&self, cancel: &CancelRequest) -> GatewayActionReport {
        let inner = self.inner.clone();
        let cancel = cancel.clone();
        spawn_detached("cancel order", async move {
            if let Err(e) = inner.cancel(&cancel).await {
                error!(target: LOG_TARGET, "Failed to cancel order {}: {}", cancel.order_id, e);
            }
        });
        self.receipt()
    }

    fn replace_order(&self, replace: &ReplaceRequest) -> GatewayActionReport {
        let inner = self.inner.clone();
        let cancel = replace.cancel_leg();
        let order = replace.order_leg();
        // Cancel is signed (and sent) before the new order
        spawn_detached("replace order", async move {
            if let Err(e) = inner.cancel(&cancel).await {
                error!(target: LOG_TARGET, "Failed to cancel order {}: {}", cancel.order_id, e);
            }
            if let Err(e) = inner.submit(&order).await {
                error!(target: LOG_TARGET, "Failed to send order {}: {}", order.order_id, e);
            }
        });
        self.receipt()
    }

    fn generate_client_order_id(&self) -> String {
        Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(CLIENT_ORDER_ID_LEN)
            .collect()
    }

    fn cancels_by_client_order_id(&self) -> bool {
        false
    }

    fn subscribe_order_updates(&self) -> ChannelSubscriber<OrderStatusReport> {
        self.inner.order_updates.subscribe()
    }

    fn subscribe_connectivity(&self) -> ChannelSubscriber<ConnectivityStatus> {
        self.inner.connectivity.subscribe()
    }

    fn connectivity(&self) -> ConnectivityStatus {
        self.inner.connectivity.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helios_core::Side;

    #[test]
    fn test_parse_exchange_id() {
        let cancel = CancelRequest::new("c1", Some("4412".to_string()), Side::Buy);
        assert_eq!(parse_exchange_id(&cancel).unwrap(), 4412);

        let missing = CancelRequest::new("c2", None, Side::Buy);
        assert!(matches!(parse_exchange_id(&missing), Err(GatewayError::InvalidOrder(_))));

        let negative = CancelRequest::new("c3", Some("-5".to_string()), Side::Sell);
        assert!(parse_exchange_id(&negative).is_err());

        let garbage = CancelRequest::new("c4", Some("abc".to_string()), Side::Sell);
        assert!(parse_exchange_id(&garbage).is_err());
    }
}
