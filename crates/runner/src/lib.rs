//! Helios Runner
//!
//! Bootstraps one exchange connector outside of any engine:
//!
//! - **CLI**: config path and currency pair from the command line
//! - **Event log**: one task per event stream, logging everything it sees
//!
//! ```text
//!   config.json ──► BtceConfig ──► BtceConnector ──► CombinedGateway
//!                                                        │ md, trades, orders,
//!                                                        │ positions, connectivity
//!                                                        ▼
//!                                                   event loggers
//! ```

pub mod cli;
pub mod event_log;

pub use cli::{CliError, RunnerArgs};
pub use event_log::spawn_event_loggers;
