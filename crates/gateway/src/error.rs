//! Error types for the gateway crate

use thiserror::Error;

use crate::adapters::btce::ConfigError;

/// Transport-level errors
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Channel closed")]
    ChannelClosed,
}

/// Gateway-level errors (adapter operations)
///
/// Business rejections from the exchange are not errors; they are delivered
/// as `Rejected` order status reports.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Message conversion error: {0}")]
    Conversion(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::Deserialization(e.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for GatewayError {
    fn from(e: serde_urlencoded::ser::Error) -> Self {
        GatewayError::Serialization(e.to_string())
    }
}
