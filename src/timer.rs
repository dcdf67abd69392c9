//! Timer handles - repeating interval and cancellable one-shot delay.
//!
//! Background threads communicate through atomics only; signals and view
//! state are touched exclusively on the event-loop thread when the owner
//! polls. Both handles cancel on drop, so a torn-down component can never
//! be mutated by a stale timer.
//!
//! # Pattern
//!
//! - `Interval` accumulates ticks in an atomic counter; the owner drains
//!   them with `take_ticks()` once per event-loop pass
//! - `Delay` flips a fired flag once; the owner observes it with `fired()`
//! - Cancelling stops the effect; the thread exits on its next wakeup and
//!   is not joined (stopping must not block the event loop)

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

// =============================================================================
// INTERVAL
// =============================================================================

/// A repeating timer that accumulates ticks until drained.
pub struct Interval {
    ticks: Arc<AtomicU64>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Interval {
    /// Start a repeating timer with the given period.
    pub fn start(period: Duration) -> Self {
        let ticks = Arc::new(AtomicU64::new(0));
        let running = Arc::new(AtomicBool::new(true));

        let ticks_clone = ticks.clone();
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                thread::sleep(period);
                if running_clone.load(Ordering::SeqCst) {
                    ticks_clone.fetch_add(1, Ordering::SeqCst);
                }
            }
        });

        Self {
            ticks,
            running,
            handle: Some(handle),
        }
    }

    /// Drain and return the number of ticks elapsed since the last drain.
    pub fn take_ticks(&self) -> u64 {
        self.ticks.swap(0, Ordering::SeqCst)
    }

    /// Whether the timer thread is still scheduled to tick.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop ticking. The thread exits on its next wakeup; not joined.
    pub fn cancel(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        self.handle.take();
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// DELAY
// =============================================================================

/// A cancellable one-shot timer.
pub struct Delay {
    fired: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Delay {
    /// Start a one-shot timer that fires after `duration`.
    pub fn start(duration: Duration) -> Self {
        let fired = Arc::new(AtomicBool::new(false));
        let cancelled = Arc::new(AtomicBool::new(false));

        let fired_clone = fired.clone();
        let cancelled_clone = cancelled.clone();
        let handle = thread::spawn(move || {
            thread::sleep(duration);
            if !cancelled_clone.load(Ordering::SeqCst) {
                fired_clone.store(true, Ordering::SeqCst);
            }
        });

        Self {
            fired,
            cancelled,
            handle: Some(handle),
        }
    }

    /// Whether the delay has elapsed. A cancelled delay never fires.
    pub fn fired(&self) -> bool {
        !self.cancelled.load(Ordering::SeqCst) && self.fired.load(Ordering::SeqCst)
    }

    /// Cancel the delay. Safe to call after it fired; `fired()` reports
    /// false from then on.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.handle.take();
    }
}

impl Drop for Delay {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_accumulates_ticks() {
        let interval = Interval::start(Duration::from_millis(10));
        thread::sleep(Duration::from_millis(55));

        let ticks = interval.take_ticks();
        assert!(ticks >= 2, "expected at least 2 ticks, got {ticks}");

        // Drained
        let _ = interval.take_ticks();
        let immediately_after = interval.ticks.load(Ordering::SeqCst);
        assert!(immediately_after <= 1);
    }

    #[test]
    fn test_interval_cancel_stops_ticking() {
        let mut interval = Interval::start(Duration::from_millis(5));
        thread::sleep(Duration::from_millis(20));
        interval.cancel();
        assert!(!interval.is_running());

        let _ = interval.take_ticks();
        thread::sleep(Duration::from_millis(25));
        assert_eq!(interval.take_ticks(), 0);
    }

    #[test]
    fn test_delay_fires_once_elapsed() {
        let delay = Delay::start(Duration::from_millis(10));
        assert!(!delay.fired());

        thread::sleep(Duration::from_millis(40));
        assert!(delay.fired());
    }

    #[test]
    fn test_cancelled_delay_never_fires() {
        let mut delay = Delay::start(Duration::from_millis(10));
        delay.cancel();

        thread::sleep(Duration::from_millis(40));
        assert!(!delay.fired());
    }

    #[test]
    fn test_cancel_after_fire_wins() {
        let mut delay = Delay::start(Duration::from_millis(5));
        thread::sleep(Duration::from_millis(30));
        assert!(delay.fired());

        delay.cancel();
        assert!(!delay.fired());
    }
}
