//! Sequence controller - the load step.
//!
//! A load step appends exactly one item after a simulated fetch delay:
//!
//! 1. `request_load` - rejected while a step is in flight; hitting the
//!    resolved section's exclusive end disables autoplay instead of
//!    starting a step (the designed terminal condition, not an error)
//! 2. the delay elapses on a timer thread
//! 3. `poll` (event-loop thread) - append `last + 1`, recompute
//!    orientation, clear `loading`, and scroll to the newest block if
//!    autoplay is still enabled at that moment
//!
//! All state mutation happens inside `request_load`/`poll` on the loop
//! thread, so the step's sub-steps never interleave with other triggers.

use std::time::Duration;

use crate::layout::compute_feed_layout;
use crate::sections::resolve_section;
use crate::state::scroll::ScrollState;
use crate::state::view::ViewState;
use crate::timer::Delay;

/// Simulated fetch latency for one load step.
pub const LOAD_DELAY: Duration = Duration::from_millis(500);

// =============================================================================
// FEED CONTROLLER
// =============================================================================

/// Owns the in-flight load step, if any.
pub struct FeedController {
    fetch_delay: Duration,
    pending: Option<Delay>,
}

impl FeedController {
    pub fn new() -> Self {
        Self::with_delay(LOAD_DELAY)
    }

    /// Controller with a custom fetch delay.
    pub fn with_delay(fetch_delay: Duration) -> Self {
        Self {
            fetch_delay,
            pending: None,
        }
    }

    /// Whether a load step is currently in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Begin a load step.
    ///
    /// No-op while a step is in flight: re-entrant requests are dropped,
    /// not queued. When the last item has reached its section's exclusive
    /// end, autoplay is disabled and nothing is appended.
    pub fn request_load(&mut self, view: &ViewState) {
        if view.loading.get() {
            return;
        }

        let last = view.last_item();
        let section = resolve_section(last);
        if last >= section.end {
            // No further section configured past this boundary
            view.autoplay.set(false);
            return;
        }

        view.loading.set(true);
        self.pending = Some(Delay::start(self.fetch_delay));
    }

    /// Complete the in-flight step once its delay has fired.
    ///
    /// Appends the next item, recomputes orientation, clears `loading`,
    /// syncs scroll bounds against the grown feed, and - if autoplay is
    /// enabled at completion - scrolls the newest block into view.
    ///
    /// Returns `true` if an item was appended this call.
    pub fn poll(
        &mut self,
        view: &ViewState,
        scroll: &ScrollState,
        viewport_w: u16,
        viewport_h: u16,
    ) -> bool {
        let fired = self.pending.as_ref().is_some_and(|d| d.fired());
        if !fired {
            return false;
        }
        self.pending = None;

        view.append_next();
        view.loading.set(false);

        let orientation = view.orientation.get();
        let layout = compute_feed_layout(view.item_count(), orientation, viewport_w, viewport_h);
        scroll.sync_max(&layout);

        if view.autoplay.get() {
            scroll.scroll_to_latest(orientation);
        }
        true
    }

    /// Cancel the in-flight step, if any. The pending delay can no longer
    /// complete a step; `loading` is cleared so the state is consistent if
    /// it outlives the controller.
    pub fn cancel(&mut self, view: &ViewState) {
        if let Some(mut delay) = self.pending.take() {
            delay.cancel();
            view.loading.set(false);
        }
    }
}

impl Default for FeedController {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
