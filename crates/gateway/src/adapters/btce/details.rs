use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::gateway::{Exchange, ExchangeDetailsGateway};

const MAKE_FEE: Decimal = dec!(-0.0001);
const TAKE_FEE: Decimal = dec!(0.001);

/// Static BTC-e facts
#[derive(Debug, Clone, Copy, Default)]
pub struct BtceExchangeDetails;

impl ExchangeDetailsGateway for BtceExchangeDetails {
    fn exchange(&self) -> Exchange {
        Exchange::BtcE
    }

    fn name(&self) -> &str {
        "BtcE"
    }

    fn make_fee(&self) -> Decimal {
        MAKE_FEE
    }

    fn take_fee(&self) -> Decimal {
        TAKE_FEE
    }

    fn has_self_trade_prevention(&self) -> bool {
        false
    }
}
