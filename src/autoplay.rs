//! Autoplay driver - timer-driven load steps.
//!
//! A repeating interval that triggers a load step once per period while
//! autoplay is enabled. The interval keeps ticking while disabled; drained
//! ticks simply no-op, so re-enabling resumes on the next tick without
//! restarting anything. Disabled explicitly by the user toggle, implicitly
//! by any manual scroll, and by the feed's terminal condition.

use std::time::Duration;

use crate::feed::FeedController;
use crate::state::view::ViewState;
use crate::timer::Interval;

/// Period between automatic load steps.
pub const AUTOPLAY_PERIOD: Duration = Duration::from_secs(2);

// =============================================================================
// AUTOPLAY DRIVER
// =============================================================================

/// Owns the repeating tick that drives automatic loading.
pub struct AutoplayDriver {
    interval: Interval,
}

impl AutoplayDriver {
    pub fn new() -> Self {
        Self::with_period(AUTOPLAY_PERIOD)
    }

    /// Driver with a custom tick period.
    pub fn with_period(period: Duration) -> Self {
        Self {
            interval: Interval::start(period),
        }
    }

    /// Drain elapsed ticks and trigger load steps for them.
    ///
    /// Each tick no-ops unless autoplay is enabled and no load is in
    /// flight; the in-flight guard in `request_load` makes extra ticks
    /// harmless either way.
    pub fn poll(&mut self, view: &ViewState, feed: &mut FeedController) {
        let ticks = self.interval.take_ticks();
        for _ in 0..ticks {
            if view.autoplay.get() && !view.loading.get() {
                feed.request_load(view);
            }
        }
    }

    /// Flip autoplay on/off.
    pub fn toggle(&self, view: &ViewState) {
        view.autoplay.set(!view.autoplay.get());
    }

    /// Tear down the interval. Ticks stop accumulating immediately.
    pub fn cancel(&mut self) {
        self.interval.cancel();
    }
}

impl Default for AutoplayDriver {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn setup() -> (ViewState, FeedController, AutoplayDriver) {
        (
            ViewState::new(),
            // Long fetch delay: requests stay visibly in flight
            FeedController::with_delay(Duration::from_secs(60)),
            AutoplayDriver::with_period(Duration::from_millis(10)),
        )
    }

    #[test]
    fn test_tick_triggers_load_when_enabled() {
        let (view, mut feed, mut driver) = setup();

        thread::sleep(Duration::from_millis(40));
        driver.poll(&view, &mut feed);

        assert!(view.loading.get());
        assert!(feed.is_pending());
    }

    #[test]
    fn test_tick_noops_when_disabled() {
        let (view, mut feed, mut driver) = setup();
        view.autoplay.set(false);

        thread::sleep(Duration::from_millis(40));
        driver.poll(&view, &mut feed);

        assert!(!view.loading.get());
        assert!(!feed.is_pending());
    }

    #[test]
    fn test_interval_keeps_ticking_while_disabled() {
        let (view, mut feed, mut driver) = setup();
        view.autoplay.set(false);

        // Ticks accumulate and are drained as no-ops
        thread::sleep(Duration::from_millis(40));
        driver.poll(&view, &mut feed);
        assert!(!view.loading.get());

        // Re-enabling resumes on the next drained tick
        view.autoplay.set(true);
        thread::sleep(Duration::from_millis(40));
        driver.poll(&view, &mut feed);
        assert!(view.loading.get());
    }

    #[test]
    fn test_ticks_dropped_while_load_in_flight() {
        let (view, mut feed, mut driver) = setup();

        thread::sleep(Duration::from_millis(40));
        driver.poll(&view, &mut feed);
        assert!(view.loading.get());

        // More ticks while the fetch is pending change nothing
        thread::sleep(Duration::from_millis(40));
        driver.poll(&view, &mut feed);
        assert_eq!(view.item_count(), 1);
        assert!(view.loading.get());
    }

    #[test]
    fn test_toggle() {
        let view = ViewState::new();
        let driver = AutoplayDriver::with_period(Duration::from_millis(10));

        assert!(view.autoplay.get());
        driver.toggle(&view);
        assert!(!view.autoplay.get());
        driver.toggle(&view);
        assert!(view.autoplay.get());
    }

    #[test]
    fn test_cancel_stops_ticks() {
        let (view, mut feed, mut driver) = setup();
        driver.cancel();

        thread::sleep(Duration::from_millis(40));
        driver.poll(&view, &mut feed);

        assert!(!view.loading.get());
    }
}
