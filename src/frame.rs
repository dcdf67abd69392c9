//! Frame composition - signals in, frame buffer out.
//!
//! `compose_frame` is a pure function of the view state, scroll state, and
//! terminal size. Wrapped in a derived, it becomes the reactive render
//! pipeline: any signal it reads re-runs the composition, and the render
//! effect picks up the new frame.
//!
//! Layout per frame: the feed area fills the terminal minus one bottom
//! status row. Each item block fills the feed area, painted with its
//! derived color and a centered bold item number. While a fetch is
//! pending a trailing block shows a dimmed loading label. The status row
//! shows item count, orientation, and the autoplay control.

use spark_signals::{Derived, Signal, derived};

use crate::layout::compute_feed_layout;
use crate::renderer::FrameBuffer;
use crate::state::scroll::ScrollState;
use crate::state::view::ViewState;
use crate::types::{Attr, Orientation, Rgba};

/// Label for the autoplay toggle, reflecting current state.
pub fn autoplay_label(enabled: bool) -> &'static str {
    if enabled {
        "Pause Auto-scroll"
    } else {
        "Resume Auto-scroll"
    }
}

fn orientation_name(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Vertical => "vertical",
        Orientation::Horizontal => "horizontal",
    }
}

const STATUS_BG: Rgba = Rgba::rgb(32, 32, 32);
const STATUS_FG: Rgba = Rgba::rgb(220, 220, 220);
const LOADING_LABEL: &str = "Loading...";

// =============================================================================
// COMPOSITION
// =============================================================================

/// Compose one frame from the current state.
pub fn compose_frame(
    view: &ViewState,
    scroll: &ScrollState,
    width: u16,
    height: u16,
) -> FrameBuffer {
    let mut buffer = FrameBuffer::new(width, height);
    if width == 0 || height < 2 {
        return buffer;
    }

    let items = view.items.get();
    let orientation = view.orientation.get();
    let loading = view.loading.get();
    let autoplay = view.autoplay.get();
    let (offset_x, offset_y) = scroll.offset();

    let feed_h = height - 1;
    let block_count = items.len() + loading as usize;
    let layout = compute_feed_layout(block_count, orientation, width, feed_h);

    for (i, rect) in layout.blocks.iter().enumerate() {
        let sx = rect.x as i32 - offset_x as i32;
        let sy = rect.y as i32 - offset_y as i32;

        if sx + rect.width as i32 <= 0
            || sy + rect.height as i32 <= 0
            || sx >= width as i32
            || sy >= feed_h as i32
        {
            continue;
        }

        if let Some(&id) = items.get(i) {
            let bg = Rgba::item_color(id);
            buffer.fill_rect(sx, sy, rect.width, rect.height, bg);

            let label = id.to_string();
            let lx = sx + (rect.width as i32 - label.len() as i32) / 2;
            let ly = sy + rect.height as i32 / 2;
            buffer.draw_text(lx, ly, &label, Rgba::BLACK, bg, Attr::BOLD);
        } else {
            // Trailing loading block
            let lx = sx + (rect.width as i32 - LOADING_LABEL.len() as i32) / 2;
            let ly = sy + rect.height as i32 / 2;
            buffer.draw_text(
                lx,
                ly,
                LOADING_LABEL,
                Rgba::TERMINAL_DEFAULT,
                Rgba::TERMINAL_DEFAULT,
                Attr::DIM,
            );
        }
    }

    draw_status_bar(
        &mut buffer,
        width,
        height - 1,
        items.len(),
        orientation,
        autoplay,
    );

    buffer
}

fn draw_status_bar(
    buffer: &mut FrameBuffer,
    width: u16,
    row: u16,
    item_count: usize,
    orientation: Orientation,
    autoplay: bool,
) {
    buffer.fill_rect(0, row as i32, width, 1, STATUS_BG);

    let left = format!(" {} items | {}", item_count, orientation_name(orientation));
    buffer.draw_text(0, row as i32, &left, STATUS_FG, STATUS_BG, Attr::NONE);

    let right = format!("[space] {}  [q] Quit ", autoplay_label(autoplay));
    let rx = width as i32 - right.len() as i32;
    buffer.draw_text(rx, row as i32, &right, STATUS_FG, STATUS_BG, Attr::NONE);
}

// =============================================================================
// DERIVED PIPELINE
// =============================================================================

/// Wire the state into a derived frame buffer.
///
/// Reading the derived inside an effect subscribes the effect to every
/// signal the composition touches.
pub fn create_frame_derived(
    view: &ViewState,
    scroll: &ScrollState,
    width: Signal<u16>,
    height: Signal<u16>,
) -> Derived<FrameBuffer> {
    let view = view.clone();
    let scroll = scroll.clone();
    derived(move || compose_frame(&view, &scroll, width.get(), height.get()))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_feed_layout;

    const W: u16 = 60;
    const H: u16 = 13; // 12 feed rows + status bar

    fn setup() -> (ViewState, ScrollState) {
        (ViewState::new(), ScrollState::new())
    }

    fn row_text(buffer: &FrameBuffer, y: u16) -> String {
        (0..buffer.width())
            .map(|x| buffer.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    #[test]
    fn test_first_block_painted_with_item_color() {
        let (view, scroll) = setup();
        let frame = compose_frame(&view, &scroll, W, H);

        let bg = frame.get(0, 0).map(|c| c.bg);
        assert_eq!(bg, Some(Rgba::item_color(1)));

        // Centered bold item number
        let mid_row = (H - 1) / 2;
        let mid = row_text(&frame, mid_row);
        assert_eq!(mid.trim(), "1");

        let x = mid.find('1').unwrap() as u16;
        let cell = frame.get(x, mid_row).unwrap();
        assert!(cell.attrs.contains(Attr::BOLD));
        assert_eq!(cell.fg, Rgba::BLACK);
    }

    #[test]
    fn test_status_label_flips_with_autoplay() {
        let (view, scroll) = setup();

        let frame = compose_frame(&view, &scroll, W, H);
        assert!(row_text(&frame, H - 1).contains("Pause Auto-scroll"));

        view.autoplay.set(false);
        let frame = compose_frame(&view, &scroll, W, H);
        assert!(row_text(&frame, H - 1).contains("Resume Auto-scroll"));
    }

    #[test]
    fn test_status_shows_count_and_orientation() {
        let (view, scroll) = setup();
        view.append_next();

        let frame = compose_frame(&view, &scroll, W, H);
        let status = row_text(&frame, H - 1);
        assert!(status.contains("2 items"));
        assert!(status.contains("vertical"));
    }

    #[test]
    fn test_scroll_offset_shifts_blocks() {
        let (view, scroll) = setup();
        view.append_next();

        let layout = compute_feed_layout(2, view.orientation.get(), W, H - 1);
        scroll.sync_max(&layout);
        scroll.set_offset(0, H - 1); // One full block down

        let frame = compose_frame(&view, &scroll, W, H);
        assert_eq!(frame.get(0, 0).map(|c| c.bg), Some(Rgba::item_color(2)));
        assert_eq!(row_text(&frame, (H - 1) / 2).trim(), "2");
    }

    #[test]
    fn test_loading_block_shows_label() {
        let (view, scroll) = setup();
        view.loading.set(true);

        // Two blocks now (item + loading); scroll to the trailing edge
        let layout = compute_feed_layout(2, view.orientation.get(), W, H - 1);
        scroll.sync_max(&layout);
        scroll.scroll_to_latest(Orientation::Vertical);

        let frame = compose_frame(&view, &scroll, W, H);
        let mid = row_text(&frame, (H - 1) / 2);
        assert!(mid.contains(LOADING_LABEL));
    }

    #[test]
    fn test_degenerate_sizes_do_not_panic() {
        let (view, scroll) = setup();
        let _ = compose_frame(&view, &scroll, 0, 0);
        let _ = compose_frame(&view, &scroll, 10, 1);
        let _ = compose_frame(&view, &scroll, 1, 2);
    }

    #[test]
    fn test_derived_recomputes_on_change() {
        let (view, scroll) = setup();
        let width = spark_signals::signal(W);
        let height = spark_signals::signal(H);
        let frame = create_frame_derived(&view, &scroll, width.clone(), height.clone());

        assert!(row_text(&frame.get(), H - 1).contains("1 items"));

        view.append_next();
        assert!(row_text(&frame.get(), H - 1).contains("2 items"));

        height.set(H + 2);
        assert_eq!(frame.get().height(), H + 2);
    }
}
