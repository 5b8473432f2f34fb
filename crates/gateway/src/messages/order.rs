//! Order entry message types

use helios_core::{OrderId, Price, Quantity, Side, Timestamp};
use serde::{Deserialize, Serialize};

/// New limit order submitted by the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Client-assigned order ID for correlation
    pub order_id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

impl OrderRequest {
    pub fn new(order_id: impl Into<OrderId>, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            order_id: order_id.into(),
            side,
            price,
            quantity,
        }
    }
}

/// Cancel request for a previously acknowledged order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelRequest {
    /// Client-assigned ID of the order being cancelled
    pub order_id: OrderId,
    /// Exchange-assigned order ID, known once the order is working
    pub exchange_id: Option<String>,
    pub side: Side,
}

impl CancelRequest {
    pub fn new(order_id: impl Into<OrderId>, exchange_id: Option<String>, side: Side) -> Self {
        Self {
            order_id: order_id.into(),
            exchange_id,
            side,
        }
    }
}

/// Replace an order with a new price/quantity
///
/// Executed as a cancel of `orig_order_id` followed by a new order under
/// `order_id`; the two legs report independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplaceRequest {
    /// Client ID of the order being replaced
    pub orig_order_id: OrderId,
    /// Client ID for the replacement order
    pub order_id: OrderId,
    /// Exchange ID of the order being replaced
    pub exchange_id: Option<String>,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

impl ReplaceRequest {
    /// The cancel leg, targeting the original order
    pub fn cancel_leg(&self) -> CancelRequest {
        CancelRequest::new(self.orig_order_id.clone(), self.exchange_id.clone(), self.side)
    }

    /// The new-order leg, carrying the replacement parameters
    pub fn order_leg(&self) -> OrderRequest {
        OrderRequest::new(self.order_id.clone(), self.side, self.price, self.quantity)
    }
}

/// Immediate receipt for an order action
///
/// Only says when the action was handed to the gateway; the outcome arrives
/// later as an `OrderStatusReport`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayActionReport {
    pub sent_at: Timestamp,
}

impl GatewayActionReport {
    pub fn new(sent_at: Timestamp) -> Self {
        Self { sent_at }
    }
}
