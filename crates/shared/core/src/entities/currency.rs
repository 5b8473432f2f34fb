use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currencies traded on the supported exchanges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Btc,
    Ltc,
    Nmc,
    Nvc,
    Ppc,
    Eth,
    Usd,
    Eur,
    Rur,
}

impl Currency {
    /// Upper-case ISO-style code (`BTC`, `USD`, ...)
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Btc => "BTC",
            Currency::Ltc => "LTC",
            Currency::Nmc => "NMC",
            Currency::Nvc => "NVC",
            Currency::Ppc => "PPC",
            Currency::Eth => "ETH",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Rur => "RUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCurrencyError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid currency pair (expected BASE/QUOTE): {0}")]
    InvalidPair(String),
}

impl FromStr for Currency {
    type Err = ParseCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BTC" => Ok(Currency::Btc),
            "LTC" => Ok(Currency::Ltc),
            "NMC" => Ok(Currency::Nmc),
            "NVC" => Ok(Currency::Nvc),
            "PPC" => Ok(Currency::Ppc),
            "ETH" => Ok(Currency::Eth),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "RUR" => Ok(Currency::Rur),
            other => Err(ParseCurrencyError::UnknownCurrency(other.to_string())),
        }
    }
}

/// A spot trading pair (e.g., BTC/USD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Base currency (the one being bought/sold)
    pub base: Currency,
    /// Quote currency (the one used to price the base)
    pub quote: Currency,
}

impl CurrencyPair {
    pub fn new(base: Currency, quote: Currency) -> Self {
        Self { base, quote }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = ParseCurrencyError;

    /// Parses `BASE/QUOTE`, e.g. `BTC/USD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s
            .split_once('/')
            .ok_or_else(|| ParseCurrencyError::InvalidPair(s.to_string()))?;
        Ok(Self::new(base.parse()?, quote.parse()?))
    }
}
