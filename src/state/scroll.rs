//! Scroll state for the feed container.
//!
//! Manages the container's scroll offset:
//! - Offset signals (user state, clamped)
//! - Scroll bounds synced from layout
//! - Trailing-edge detection for end-of-feed loading
//!
//! Offsets are stored per axis; which axis the feed actually scrolls on is
//! decided by the current orientation.

use spark_signals::{Signal, signal};

use crate::layout::ComputedLayout;
use crate::types::Orientation;

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Default scroll amount for arrow keys (lines).
pub const LINE_SCROLL: u16 = 1;

/// Default scroll amount for mouse wheel.
pub const WHEEL_SCROLL: u16 = 3;

/// Default scroll amount for Page Up/Down (90% of viewport).
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

/// How close (in cells) to the trailing edge counts as "near the end".
pub const EDGE_THRESHOLD: u16 = 4;

// =============================================================================
// SCROLL STATE
// =============================================================================

/// Reactive scroll offsets and bounds for the feed container.
#[derive(Clone)]
pub struct ScrollState {
    offset_x: Signal<u16>,
    offset_y: Signal<u16>,
    max_x: Signal<u16>,
    max_y: Signal<u16>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset_x: signal(0),
            offset_y: signal(0),
            max_x: signal(0),
            max_y: signal(0),
        }
    }

    /// Current scroll offset as (x, y).
    pub fn offset(&self) -> (u16, u16) {
        (self.offset_x.get(), self.offset_y.get())
    }

    /// Maximum scroll values as (max_x, max_y).
    pub fn max(&self) -> (u16, u16) {
        (self.max_x.get(), self.max_y.get())
    }

    /// Set scroll offset (clamped to valid range).
    pub fn set_offset(&self, x: u16, y: u16) {
        self.offset_x.set(x.min(self.max_x.get()));
        self.offset_y.set(y.min(self.max_y.get()));
    }

    /// Scroll by a delta amount.
    ///
    /// Returns `true` if scrolling occurred, `false` if already at boundary.
    pub fn scroll_by(&self, delta_x: i32, delta_y: i32) -> bool {
        let (current_x, current_y) = self.offset();
        let (max_x, max_y) = self.max();

        // Compute new values with clamping (using i32 to handle negative deltas)
        let new_x = ((current_x as i32) + delta_x).clamp(0, max_x as i32) as u16;
        let new_y = ((current_y as i32) + delta_y).clamp(0, max_y as i32) as u16;

        if new_x == current_x && new_y == current_y {
            return false; // Already at boundary
        }

        self.offset_x.set(new_x);
        self.offset_y.set(new_y);
        true
    }

    /// Sync scroll bounds from a computed layout, re-clamping the offsets.
    pub fn sync_max(&self, layout: &ComputedLayout) {
        self.max_x.set(layout.max_scroll_x);
        self.max_y.set(layout.max_scroll_y);
        let (x, y) = self.offset();
        self.set_offset(x, y);
    }

    /// Scroll the trailing axis to its maximum extent so the most recently
    /// appended block is in view. The other axis is preserved.
    pub fn scroll_to_latest(&self, orientation: Orientation) {
        if orientation.is_horizontal() {
            self.offset_x.set(self.max_x.get());
        } else {
            self.offset_y.set(self.max_y.get());
        }
    }

    /// Whether the offset is within `threshold` cells of the trailing edge
    /// (bottom for vertical, right edge for horizontal).
    pub fn near_trailing_edge(&self, orientation: Orientation, threshold: u16) -> bool {
        let (offset, max) = if orientation.is_horizontal() {
            (self.offset_x.get(), self.max_x.get())
        } else {
            (self.offset_y.get(), self.max_y.get())
        };
        offset >= max.saturating_sub(threshold)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
