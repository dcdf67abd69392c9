//! Terminal rendering: the frame buffer the composer draws into and the
//! differential renderer that puts it on screen.

pub mod buffer;
pub mod term;

pub use buffer::FrameBuffer;
pub use term::{TermRenderer, enter_fullscreen, exit_fullscreen};
