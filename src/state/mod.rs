//! State modules: the feed's reactive state record, scroll offsets, and
//! input event conversion.

pub mod input;
pub mod scroll;
pub mod view;

pub use input::{InputEvent, KeyPress, ScrollDirection, ScrollEvent};
pub use scroll::{EDGE_THRESHOLD, LINE_SCROLL, PAGE_SCROLL_FACTOR, ScrollState, WHEEL_SCROLL};
pub use view::ViewState;
