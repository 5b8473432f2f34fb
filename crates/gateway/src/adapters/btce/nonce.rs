use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use helios_ports::Clock;
use log::warn;

const NONCES_PER_MILLI: u64 = 100;

/// Strictly increasing nonce source for signed requests
///
/// A nonce is the wall-clock millisecond scaled by 100, so up to 100 calls
/// within one millisecond still get distinct values. The next nonce is
/// `max(now_ms * 100, previous + 1)`, applied atomically.
///
/// Bursts of more than 100 calls push the nonce past the current
/// millisecond's range. That is not a clock regression; only a wall-clock
/// reading earlier than the latest one seen counts as one.
pub struct NonceGenerator {
    clock: Arc<dyn Clock>,
    last: AtomicU64,
    last_ms: AtomicU64,
    regressions: AtomicU64,
}

impl NonceGenerator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last: AtomicU64::new(0),
            last_ms: AtomicU64::new(0),
            regressions: AtomicU64::new(0),
        }
    }

    pub fn next(&self) -> u64 {
        let now_ms = self.clock.now().timestamp_millis().max(0) as u64;
        let candidate = now_ms.saturating_mul(NONCES_PER_MILLI);

        let step = |last: u64| candidate.max(last.saturating_add(1));
        let previous = match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(step(last)))
        {
            Ok(previous) | Err(previous) => previous,
        };

        let latest_ms = self.last_ms.fetch_max(now_ms, Ordering::SeqCst);
        if now_ms < latest_ms {
            self.regressions.fetch_add(1, Ordering::Relaxed);
            warn!(
                target: "helios::btce::auth",
                "Clock moved backwards ({} ms < {} ms), continuing from last nonce {}",
                now_ms, latest_ms, previous
            );
        }
        step(previous)
    }

    /// Number of times the clock was read earlier than a previous reading
    pub fn clock_regressions(&self) -> u64 {
        self.regressions.load(Ordering::Relaxed)
    }
}
