use std::sync::Arc;
use std::time::Duration;

/// Callback run on every tick of a periodic registration
pub type IntervalCallback = Arc<dyn Fn() + Send + Sync>;

/// Callback run once, as soon as the timer gets to it
pub type ImmediateCallback = Box<dyn FnOnce() + Send>;

/// Port for scheduling work
///
/// Gateways register their polling loops and one-shot notifications here
/// instead of spawning timers themselves, so tests can drive them by hand.
pub trait Timer: Send + Sync {
    /// Run `callback` every `period`, first after one full period
    fn set_interval(&self, period: Duration, callback: IntervalCallback);

    /// Run `callback` once, soon, outside the caller's stack frame
    fn set_immediate(&self, callback: ImmediateCallback);
}
