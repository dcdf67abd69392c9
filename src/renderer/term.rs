//! Differential terminal renderer.
//!
//! Compares the current frame to the previous one and only outputs cells
//! that have changed, which keeps terminal I/O small and updates
//! flicker-free. Output is queued into a byte buffer and flushed in one
//! write.

use std::io::{self, Write, stdout};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use super::buffer::FrameBuffer;
use crate::types::{Attr, Cell, Rgba};

// =============================================================================
// FULLSCREEN CONTROL
// =============================================================================

/// Enter fullscreen mode: raw mode, alternate screen, hidden cursor.
pub fn enter_fullscreen() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))
}

/// Exit fullscreen mode, restoring the terminal.
pub fn exit_fullscreen() -> io::Result<()> {
    execute!(
        stdout(),
        SetAttribute(Attribute::Reset),
        Show,
        LeaveAlternateScreen
    )?;
    disable_raw_mode()
}

// =============================================================================
// DIFF RENDERER
// =============================================================================

/// Differential renderer for fullscreen mode.
///
/// Keeps the previous frame to enable diff-based rendering.
pub struct TermRenderer {
    out: Vec<u8>,
    previous: Option<FrameBuffer>,
}

impl TermRenderer {
    pub fn new() -> Self {
        Self {
            out: Vec::new(),
            previous: None,
        }
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true if any cells were written.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut has_changes = false;

        let width = buffer.width();
        let height = buffer.height();

        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|p| p.width() == width && p.height() == height);

        for y in 0..height {
            for x in 0..width {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };

                let changed = if same_size {
                    match self.previous.as_ref().and_then(|p| p.get(x, y)) {
                        Some(prev_cell) => prev_cell != cell,
                        None => true,
                    }
                } else {
                    true
                };

                if changed {
                    has_changes = true;
                    self.queue_cell(x, y, cell)?;
                }
            }
        }

        if has_changes {
            let mut out = stdout();
            out.write_all(&self.out)?;
            out.flush()?;
        }
        self.out.clear();

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Invalidate the previous frame. Next render is a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Check if a previous frame exists to diff against.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    fn queue_cell(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(x, y),
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_color(cell.fg)),
            SetBackgroundColor(to_color(cell.bg)),
        )?;
        if cell.attrs.contains(Attr::BOLD) {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if cell.attrs.contains(Attr::DIM) {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        if cell.attrs.contains(Attr::UNDERLINE) {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        if cell.attrs.contains(Attr::INVERSE) {
            queue!(self.out, SetAttribute(Attribute::Reverse))?;
        }
        queue!(self.out, Print(cell.ch))
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map an Rgba to a crossterm color. Terminal-default resets to the
/// terminal's own choice.
fn to_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else {
        Color::Rgb {
            r: color.r as u8,
            g: color.g as u8,
            b: color.b as u8,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_creation() {
        let renderer = TermRenderer::new();
        assert!(!renderer.has_previous());
    }

    #[test]
    fn test_invalidate() {
        let mut renderer = TermRenderer::new();
        renderer.previous = Some(FrameBuffer::new(10, 10));
        assert!(renderer.has_previous());

        renderer.invalidate();
        assert!(!renderer.has_previous());
    }

    #[test]
    fn test_to_color() {
        assert_eq!(to_color(Rgba::TERMINAL_DEFAULT), Color::Reset);
        assert_eq!(
            to_color(Rgba::rgb(10, 20, 30)),
            Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }

    #[test]
    fn test_queue_cell_emits_bytes() {
        let mut renderer = TermRenderer::new();
        let cell = Cell {
            ch: 'X',
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
            attrs: Attr::BOLD,
        };

        renderer.queue_cell(3, 4, &cell).unwrap();
        assert!(!renderer.out.is_empty());
    }
}
