//! Manual scroll listener.
//!
//! Every manual scroll - mouse wheel, arrow keys, PageUp/PageDown -
//! unconditionally disables autoplay (manual scroll always wins), applies
//! the clamped delta, and requests a load step when the offset lands
//! within the edge threshold of the trailing edge. The in-flight guard in
//! the controller guarantees that at most one step results.

use crossterm::event::KeyCode;

use crate::feed::FeedController;
use crate::state::input::{ScrollDirection, ScrollEvent};
use crate::state::scroll::{
    EDGE_THRESHOLD, LINE_SCROLL, PAGE_SCROLL_FACTOR, ScrollState, WHEEL_SCROLL,
};
use crate::state::view::ViewState;

// =============================================================================
// DISPATCH
// =============================================================================

/// Handle a mouse wheel scroll.
pub fn on_wheel(
    view: &ViewState,
    scroll: &ScrollState,
    feed: &mut FeedController,
    event: ScrollEvent,
) {
    let amount = (event.delta * WHEEL_SCROLL) as i32;
    apply_manual_scroll(view, scroll, feed, event.direction, amount);
}

/// Handle a scrolling key, if the key is one.
///
/// Returns `true` if the key was consumed as a scroll.
pub fn on_scroll_key(
    view: &ViewState,
    scroll: &ScrollState,
    feed: &mut FeedController,
    code: KeyCode,
    viewport_w: u16,
    viewport_h: u16,
) -> bool {
    let page_x = (viewport_w as f32 * PAGE_SCROLL_FACTOR) as i32;
    let page_y = (viewport_h as f32 * PAGE_SCROLL_FACTOR) as i32;
    let horizontal = view.orientation.get().is_horizontal();

    let (direction, amount) = match code {
        KeyCode::Up => (ScrollDirection::Up, LINE_SCROLL as i32),
        KeyCode::Down => (ScrollDirection::Down, LINE_SCROLL as i32),
        KeyCode::Left => (ScrollDirection::Left, LINE_SCROLL as i32),
        KeyCode::Right => (ScrollDirection::Right, LINE_SCROLL as i32),
        // Page keys scroll along the orientation axis
        KeyCode::PageUp if horizontal => (ScrollDirection::Left, page_x),
        KeyCode::PageDown if horizontal => (ScrollDirection::Right, page_x),
        KeyCode::PageUp => (ScrollDirection::Up, page_y),
        KeyCode::PageDown => (ScrollDirection::Down, page_y),
        KeyCode::Home => {
            // Jump to the leading edge; still a manual scroll
            view.autoplay.set(false);
            scroll.set_offset(0, 0);
            return true;
        }
        KeyCode::End => {
            view.autoplay.set(false);
            let orientation = view.orientation.get();
            scroll.scroll_to_latest(orientation);
            maybe_request_load(view, scroll, feed);
            return true;
        }
        _ => return false,
    };

    apply_manual_scroll(view, scroll, feed, direction, amount);
    true
}

fn apply_manual_scroll(
    view: &ViewState,
    scroll: &ScrollState,
    feed: &mut FeedController,
    direction: ScrollDirection,
    amount: i32,
) {
    // Manual scroll always wins over autoplay
    view.autoplay.set(false);

    let (dx, dy) = match direction {
        ScrollDirection::Up => (0, -amount),
        ScrollDirection::Down => (0, amount),
        ScrollDirection::Left => (-amount, 0),
        ScrollDirection::Right => (amount, 0),
    };
    scroll.scroll_by(dx, dy);

    maybe_request_load(view, scroll, feed);
}

fn maybe_request_load(view: &ViewState, scroll: &ScrollState, feed: &mut FeedController) {
    if scroll.near_trailing_edge(view.orientation.get(), EDGE_THRESHOLD) {
        feed.request_load(view);
    }
}

// =============================================================================
// TESTS
// =============================================================================
