//! Helios Clock Infrastructure
//!
//! Implementations of the [`Clock`] and [`Timer`] ports:
//!
//! | Port    | Production     | Tests         |
//! |---------|----------------|---------------|
//! | `Clock` | `SystemClock`  | `ManualClock` |
//! | `Timer` | `TokioTimer`   | `ManualTimer` |
//!
//! ## Usage
//!
//! ```ignore
//! use helios_clock::{ManualTimer, Timer};
//! use std::{sync::Arc, time::Duration};
//!
//! let timer = ManualTimer::new();
//! timer.set_interval(Duration::from_secs(2), Arc::new(|| println!("poll")));
//! timer.set_immediate(Box::new(|| println!("connected")));
//!
//! timer.fire_immediates(); // "connected"
//! timer.tick();            // "poll"
//! ```

mod manual;
mod manual_timer;
mod system;
mod timer;

pub use manual::ManualClock;
pub use manual_timer::ManualTimer;
pub use system::SystemClock;
pub use timer::TokioTimer;

// Re-export the ports for convenience
pub use helios_ports::{Clock, ImmediateCallback, IntervalCallback, Timer};
