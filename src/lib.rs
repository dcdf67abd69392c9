//! # scrollfeed
//!
//! Auto-advancing infinite-scroll feed viewer for the terminal.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! The viewer holds a small reactive state record (loaded items, scroll
//! orientation, loading and autoplay flags) and advances it from three
//! event sources: a repeating autoplay tick, manual scrolling, and the
//! pause/resume toggle. The render pipeline is purely derived-based:
//!
//! ```text
//! ViewState/ScrollState signals → frame derived → render effect
//! ```
//!
//! Items carry a fixed section table that switches the scroll orientation
//! (vertical vs horizontal) as the feed grows. Each load step appends
//! exactly one item after a simulated fetch delay; reaching the end of the
//! configured sections disables autoplay.
//!
//! ## Modules
//!
//! - [`types`] - Core types (ItemId, Orientation, Rgba, Cell)
//! - [`sections`] - Static section table and resolution
//! - [`state`] - View state, scroll state, input conversion
//! - [`feed`] - The load step (sequence controller)
//! - [`autoplay`] - Timer-driven load steps
//! - [`listener`] - Manual scroll handling
//! - [`timer`] - Interval and cancellable delay handles
//! - [`layout`] - Taffy flex layout of the feed blocks
//! - [`frame`] - Frame composition (signals in, frame buffer out)
//! - [`renderer`] - Frame buffer and differential terminal output
//! - [`app`] - Mount, event loop, teardown

pub mod app;
pub mod autoplay;
pub mod feed;
pub mod frame;
pub mod layout;
pub mod listener;
pub mod renderer;
pub mod sections;
pub mod state;
pub mod timer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use app::App;
pub use autoplay::{AUTOPLAY_PERIOD, AutoplayDriver};
pub use feed::{FeedController, LOAD_DELAY};
pub use frame::{autoplay_label, compose_frame, create_frame_derived};
pub use layout::{BlockRect, ComputedLayout, compute_feed_layout};
pub use renderer::{FrameBuffer, TermRenderer};
pub use sections::{SECTIONS, Section, orientation_for, resolve_section};
pub use state::{
    EDGE_THRESHOLD, InputEvent, KeyPress, LINE_SCROLL, PAGE_SCROLL_FACTOR, ScrollDirection,
    ScrollEvent, ScrollState, ViewState, WHEEL_SCROLL,
};
pub use timer::{Delay, Interval};
