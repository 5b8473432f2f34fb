//! Exchange adapters
//!
//! Adapters poll or call an exchange's native API, normalize what comes back
//! into `messages` types and publish it through the `gateway` traits.

pub mod btce;

pub use btce::{BtceConfig, BtceConnector};
