use helios_core::{CurrencyPair, ParseCurrencyError};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PAIR: &str = "BTC/USD";

pub const USAGE: &str = r#"Helios runner - BTC-e connector event logger

USAGE:
    helios-runner <CONFIG> [BASE/QUOTE]

ARGS:
    <CONFIG>        BTC-e connector config (JSON)
    [BASE/QUOTE]    Currency pair to poll (default: BTC/USD)

ENVIRONMENT VARIABLES:
    BTCE_API_KEY    Overrides api_key from the config file
    BTCE_API_SECRET Overrides api_secret from the config file
    RUST_LOG        Log level filter (default: info)
"#;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("missing config path")]
    MissingConfig,

    #[error("invalid pair: {0}")]
    InvalidPair(#[from] ParseCurrencyError),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerArgs {
    pub config_path: PathBuf,
    pub pair: CurrencyPair,
}

impl RunnerArgs {
    /// Parse arguments (without the program name). `Ok(None)` means help was requested.
    pub fn parse<I>(args: I) -> Result<Option<Self>, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut positional = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(None),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let config_path = positional.next().ok_or(CliError::MissingConfig)?;
        let pair = positional.next().unwrap_or_else(|| DEFAULT_PAIR.to_string());
        if let Some(extra) = positional.next() {
            return Err(CliError::UnexpectedArgument(extra));
        }

        Ok(Some(Self {
            config_path: PathBuf::from(config_path),
            pair: pair.parse()?,
        }))
    }
}
