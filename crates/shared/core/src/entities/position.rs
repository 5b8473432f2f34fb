use serde::{Deserialize, Serialize};

use super::Currency;
use crate::values::Quantity;

/// Balance of one currency on an exchange account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyPosition {
    pub currency: Currency,
    /// Available balance
    pub amount: Quantity,
    /// Balance locked in open orders
    pub held_amount: Quantity,
}

impl CurrencyPosition {
    pub fn new(currency: Currency, amount: Quantity, held_amount: Quantity) -> Self {
        Self {
            currency,
            amount,
            held_amount,
        }
    }

    /// Available plus held balance
    pub fn total(&self) -> Quantity {
        self.amount + self.held_amount
    }
}
