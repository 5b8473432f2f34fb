use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderStatus, OrderStatusReport, Side};
use crate::values::{Price, Quantity, Timestamp};

/// Client-assigned order identifier
pub type OrderId = String;

/// Engine-owned order state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Assigned by the exchange once the order rests on the book
    pub exchange_id: Option<String>,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
    pub leaves_quantity: Quantity,
    pub status: OrderStatus,
    pub reject_reason: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Order {
    /// Create a new order with explicit timestamp
    pub fn new_with_time(
        id: impl Into<OrderId>,
        side: Side,
        price: Price,
        quantity: Quantity,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            exchange_id: None,
            side,
            price,
            quantity,
            leaves_quantity: quantity,
            status: OrderStatus::New,
            reject_reason: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Apply a status report from a gateway.
    ///
    /// Fields absent from the report are left untouched. Returns false (and
    /// changes nothing) when the report belongs to another order.
    pub fn apply(&mut self, report: &OrderStatusReport) -> bool {
        if report.order_id != self.id {
            return false;
        }

        self.status = report.status;
        if let Some(leaves) = report.leaves_quantity {
            self.leaves_quantity = leaves;
        }
        if let Some(exchange_id) = &report.exchange_id {
            self.exchange_id = Some(exchange_id.clone());
        }
        if let Some(message) = &report.reject_message {
            self.reject_reason = Some(message.clone());
        }
        self.updated_at = report.time;
        true
    }

    /// Quantity filled so far
    pub fn filled_quantity(&self) -> Quantity {
        (self.quantity - self.leaves_quantity).max(Decimal::ZERO)
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
