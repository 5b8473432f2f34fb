use chrono::Duration;
use helios_core::Timestamp;
use helios_ports::Clock;
use parking_lot::Mutex;

/// Clock that only moves when told to
///
/// Used for deterministic tests: nonce derivation, report timestamps and
/// book snapshot times all read from the injected clock.
pub struct ManualClock {
    current: Mutex<Timestamp>,
}

impl ManualClock {
    pub fn new(initial: Timestamp) -> Self {
        Self {
            current: Mutex::new(initial),
        }
    }

    /// Create a clock frozen at the given unix time in milliseconds
    pub fn from_millis(millis: i64) -> Self {
        Self::new(chrono::DateTime::from_timestamp_millis(millis).unwrap_or_default())
    }

    /// Move the clock forward (or backward, for a negative duration)
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current.lock();
        *current += duration;
    }

    /// Jump to an explicit time
    pub fn set(&self, time: Timestamp) {
        *self.current.lock() = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current.lock()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}
