use helios_core::CurrencyPosition;
use log::debug;

use crate::gateway::{Exchange, PositionGateway};
use crate::transport::Subjects;
use crate::transport::channel::{ChannelPublisher, ChannelSubscriber};

/// BTC-e balances
///
/// Nothing polls balances yet, so the stream stays silent.
pub struct BtcePositionGateway {
    pair_key: String,
    positions: ChannelPublisher<CurrencyPosition>,
}

impl BtcePositionGateway {
    pub fn new(pair_key: impl Into<String>, capacity: usize) -> Self {
        debug!(
            target: "helios::btce::pg",
            "Position feed on subject {}",
            Subjects::positions(&Exchange::BtcE.to_string())
        );
        Self {
            pair_key: pair_key.into(),
            positions: ChannelPublisher::with_capacity(capacity),
        }
    }

    pub fn pair_key(&self) -> &str {
        &self.pair_key
    }
}

impl PositionGateway for BtcePositionGateway {
    fn subscribe_positions(&self) -> ChannelSubscriber<CurrencyPosition> {
        self.positions.subscribe()
    }
}
