//! Application lifecycle - mount, event loop, teardown.
//!
//! `mount()` sets up the terminal (raw mode, alternate screen, mouse
//! capture) and the reactive render pipeline: a derived frame buffer read
//! by a render effect that diffs to the terminal. The event loop polls
//! input at ~60fps and drives the autoplay and feed controllers each pass.
//!
//! # Example
//!
//! ```ignore
//! use scrollfeed::app::App;
//!
//! let mut app = App::mount()?;
//! app.run()?; // Blocks until q/Esc/Ctrl+C
//! app.unmount();
//! ```

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::KeyCode;
use spark_signals::{Signal, effect, signal};

use crate::autoplay::AutoplayDriver;
use crate::feed::FeedController;
use crate::frame::create_frame_derived;
use crate::layout::compute_feed_layout;
use crate::listener;
use crate::renderer::{self, TermRenderer};
use crate::state::input::{self, InputEvent, KeyPress};
use crate::state::scroll::ScrollState;
use crate::state::view::ViewState;

/// Input poll timeout per event-loop pass (~60fps).
const POLL_TIMEOUT: Duration = Duration::from_millis(16);

// =============================================================================
// KEY BINDINGS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Quit,
    ToggleAutoplay,
    Scroll(KeyCode),
}

fn key_action(key: KeyPress) -> KeyAction {
    if key.ctrl && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    match key.code {
        KeyCode::Char(' ') => KeyAction::ToggleAutoplay,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        code => KeyAction::Scroll(code),
    }
}

// =============================================================================
// APP
// =============================================================================

/// The mounted viewer.
///
/// Owns the state record, the two drivers, and the render effect. All
/// state mutation happens on the thread that calls `tick`.
pub struct App {
    view: ViewState,
    scroll: ScrollState,
    feed: FeedController,
    autoplay: AutoplayDriver,
    width: Signal<u16>,
    height: Signal<u16>,
    running: Arc<AtomicBool>,
    stop_effect: Option<Box<dyn FnOnce()>>,
}

impl App {
    /// Mount the viewer: terminal setup plus the reactive render pipeline.
    pub fn mount() -> io::Result<Self> {
        let (tw, th) = crossterm::terminal::size()?;

        let view = ViewState::new();
        let scroll = ScrollState::new();
        let width = signal(tw);
        let height = signal(th);

        renderer::enter_fullscreen()?;
        input::enable_mouse()?;

        let frame_derived = create_frame_derived(&view, &scroll, width.clone(), height.clone());
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let mut term = TermRenderer::new();

        // The one render effect: re-runs whenever the composition's inputs
        // change, diffing only changed cells to the terminal.
        let stop_fn = effect(move || {
            if !running_clone.load(Ordering::SeqCst) {
                return;
            }
            let frame = frame_derived.get();
            let _ = term.render(&frame);
        });

        let mut app = Self {
            view,
            scroll,
            feed: FeedController::new(),
            autoplay: AutoplayDriver::new(),
            width,
            height,
            running,
            stop_effect: Some(Box::new(stop_fn)),
        };
        app.sync_scroll_bounds();
        Ok(app)
    }

    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the application (sets running to false).
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Run the event loop once.
    ///
    /// Returns `Ok(false)` when the application should stop.
    pub fn tick(&mut self) -> io::Result<bool> {
        if !self.is_running() {
            return Ok(false);
        }

        if let Some(event) = input::poll_event(POLL_TIMEOUT)? {
            self.handle_event(event);
        }

        self.autoplay.poll(&self.view, &mut self.feed);

        let (w, h) = self.feed_viewport();
        self.feed.poll(&self.view, &self.scroll, w, h);
        self.sync_scroll_bounds();

        Ok(self.is_running())
    }

    /// Run the event loop (blocking until stopped).
    pub fn run(&mut self) -> io::Result<()> {
        while self.tick()? {
            // Continue processing events
        }
        Ok(())
    }

    /// Tear down: cancel timers, stop the render effect, restore the
    /// terminal. Pending timers can no longer mutate state.
    pub fn unmount(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        self.feed.cancel(&self.view);
        self.autoplay.cancel();

        if let Some(stop) = self.stop_effect.take() {
            stop();
        }

        let _ = input::disable_mouse();
        let _ = renderer::exit_fullscreen();
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Scroll(scroll_event) => {
                listener::on_wheel(&self.view, &self.scroll, &mut self.feed, scroll_event);
            }
            InputEvent::Key(key) => match key_action(key) {
                KeyAction::Quit => self.stop(),
                KeyAction::ToggleAutoplay => self.autoplay.toggle(&self.view),
                KeyAction::Scroll(code) => {
                    let (w, h) = self.feed_viewport();
                    let _ = listener::on_scroll_key(
                        &self.view,
                        &self.scroll,
                        &mut self.feed,
                        code,
                        w,
                        h,
                    );
                }
            },
            InputEvent::Resize(w, h) => {
                self.width.set(w);
                self.height.set(h);
                self.sync_scroll_bounds();
            }
            InputEvent::None => {}
        }
    }

    /// Feed area: terminal size minus the status row.
    fn feed_viewport(&self) -> (u16, u16) {
        (self.width.get(), self.height.get().saturating_sub(1))
    }

    /// Recompute scroll bounds from the current feed layout. The loading
    /// block counts: the user can scroll it into view.
    fn sync_scroll_bounds(&self) {
        let (w, h) = self.feed_viewport();
        let block_count = self.view.item_count() + self.view.loading.get() as usize;
        let layout = compute_feed_layout(block_count, self.view.orientation.get(), w, h);
        self.scroll.sync_max(&layout);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Full cleanup unless unmount already ran
        if self.stop_effect.is_some() {
            self.shutdown();
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
