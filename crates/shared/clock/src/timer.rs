use std::time::Duration;

use helios_ports::{ImmediateCallback, IntervalCallback, Timer};
use log::{debug, warn};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Shortest period accepted by `set_interval`
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Tokio-backed timer for production use
///
/// Every `set_interval` registration runs on its own task; the callbacks are
/// expected to be cheap (gateways spawn their I/O). All tasks are aborted
/// when the timer is dropped.
pub struct TokioTimer {
    handle: Handle,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl TokioTimer {
    /// Create a timer bound to the current tokio runtime
    ///
    /// # Panics
    /// Panics when called outside of a tokio runtime.
    pub fn new() -> Self {
        Self::with_handle(Handle::current())
    }

    /// Create a timer spawning onto an explicit runtime
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle,
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Number of periodic registrations still running
    pub fn active_intervals(&self) -> usize {
        self.tasks.lock().iter().filter(|t| !t.is_finished()).count()
    }
}

impl Timer for TokioTimer {
    fn set_interval(&self, period: Duration, callback: IntervalCallback) {
        let period = if period < MIN_PERIOD {
            warn!("Interval period {:?} too short, using {:?}", period, MIN_PERIOD);
            MIN_PERIOD
        } else {
            period
        };

        debug!("Registering interval every {:?}", period);
        let task = self.handle.spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            // Slow callbacks shift the schedule instead of bursting to catch up
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                callback();
            }
        });
        self.tasks.lock().push(task);
    }

    fn set_immediate(&self, callback: ImmediateCallback) {
        self.handle.spawn(async move { callback() });
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        for task in self.tasks.get_mut().drain(..) {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, IntervalCallback) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        (
            count,
            Arc::new(move || {
                c.fetch_add(1, Ordering::SeqCst);
            }),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_fires_after_each_period() {
        let timer = TokioTimer::new();
        let (count, callback) = counter();
        timer.set_interval(Duration::from_secs(2), callback);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert_eq!(timer.active_intervals(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_runs_once() {
        let timer = TokioTimer::new();
        let fired = Arc::new(AtomicBool::new(false));
        let f = fired.clone();
        timer.set_immediate(Box::new(move || f.store(true, Ordering::SeqCst)));

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_intervals() {
        let timer = TokioTimer::new();
        let (count, callback) = counter();
        timer.set_interval(Duration::from_secs(1), callback);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        drop(timer);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
