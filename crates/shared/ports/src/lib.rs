//! Helios Ports
//!
//! Port definitions (traits) for the Helios exchange connectors.
//! These define the boundaries between gateway logic and infrastructure.

mod clock;
mod timer;

pub use clock::Clock;
pub use timer::{ImmediateCallback, IntervalCallback, Timer};
