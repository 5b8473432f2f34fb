use serde::{Deserialize, Serialize};

use super::{OrderId, OrderStatus};
use crate::values::{Quantity, Timestamp};

/// Delta describing one change to an order's lifecycle.
///
/// Gateways emit these; only the engine applies them to its `Order`s.
/// Optional fields are `None` when the exchange said nothing about them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusReport {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub leaves_quantity: Option<Quantity>,
    pub exchange_id: Option<String>,
    pub reject_message: Option<String>,
    pub time: Timestamp,
}

impl OrderStatusReport {
    /// Create a report carrying only a status change
    pub fn new(order_id: impl Into<OrderId>, status: OrderStatus, time: Timestamp) -> Self {
        Self {
            order_id: order_id.into(),
            status,
            leaves_quantity: None,
            exchange_id: None,
            reject_message: None,
            time,
        }
    }

    /// Create a rejection carrying the exchange's message verbatim
    pub fn rejected(
        order_id: impl Into<OrderId>,
        message: impl Into<String>,
        time: Timestamp,
    ) -> Self {
        Self::new(order_id, OrderStatus::Rejected, time).with_reject_message(message)
    }

    pub fn with_leaves_quantity(mut self, leaves: Quantity) -> Self {
        self.leaves_quantity = Some(leaves);
        self
    }

    pub fn with_exchange_id(mut self, exchange_id: impl Into<String>) -> Self {
        self.exchange_id = Some(exchange_id.into());
        self
    }

    pub fn with_reject_message(mut self, message: impl Into<String>) -> Self {
        self.reject_message = Some(message.into());
        self
    }

    /// Check if the report moves the order to a terminal state
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
