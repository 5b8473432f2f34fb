use std::time::Duration;

use helios_ports::{ImmediateCallback, IntervalCallback, Timer};
use parking_lot::Mutex;

/// Timer driven by hand, for deterministic tests
///
/// Registrations are recorded; nothing runs until the test calls
/// [`fire_immediates`](Self::fire_immediates) or [`tick`](Self::tick).
#[derive(Default)]
pub struct ManualTimer {
    intervals: Mutex<Vec<(Duration, IntervalCallback)>>,
    immediates: Mutex<Vec<ImmediateCallback>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Periods of every interval registered so far, in registration order
    pub fn interval_periods(&self) -> Vec<Duration> {
        self.intervals.lock().iter().map(|(p, _)| *p).collect()
    }

    /// Number of one-shot callbacks waiting to run
    pub fn pending_immediates(&self) -> usize {
        self.immediates.lock().len()
    }

    /// Run and discard every pending one-shot callback. Returns how many ran.
    pub fn fire_immediates(&self) -> usize {
        let pending: Vec<ImmediateCallback> = self.immediates.lock().drain(..).collect();
        let count = pending.len();
        for callback in pending {
            callback();
        }
        count
    }

    /// Run every interval callback once. Returns how many ran.
    pub fn tick(&self) -> usize {
        // Clone out first so callbacks may register more work
        let callbacks: Vec<IntervalCallback> =
            self.intervals.lock().iter().map(|(_, cb)| cb.clone()).collect();
        for callback in &callbacks {
            callback();
        }
        callbacks.len()
    }
}

impl Timer for ManualTimer {
    fn set_interval(&self, period: Duration, callback: IntervalCallback) {
        self.intervals.lock().push((period, callback));
    }

    fn set_immediate(&self, callback: ImmediateCallback) {
        self.immediates.lock().push(callback);
    }
}
