//! Helios Core Domain
//!
//! Pure domain types shared by the exchange connectors and the engine that
//! consumes them. This crate contains no async, no I/O, and is 100% unit
//! testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    ConnectivityStatus,
    // Instruments
    Currency,
    CurrencyPair,
    // Balances
    CurrencyPosition,
    ParseCurrencyError,
    // Order lifecycle
    Order,
    OrderId,
    OrderStatus,
    OrderStatusReport,
    Side,
};
pub use values::{Price, Quantity, Timestamp};
