//! Frame buffer - the in-memory grid of cells the composer draws into.
//!
//! Drawing operations accept signed coordinates and clip to the buffer, so
//! the composer can place partially offscreen blocks without pre-clipping.

use crate::types::{Attr, Cell, Rgba};

/// A width x height grid of terminal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get a cell. None if out of bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    /// Set a cell. Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.cells[idx] = cell;
    }

    /// Fill a rectangle with a background color, clipped to the buffer.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u16, height: u16, bg: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + width as i32).min(self.width as i32);
        let y1 = (y + height as i32).min(self.height as i32);

        for cy in y0..y1 {
            for cx in x0..x1 {
                self.set(
                    cx as u16,
                    cy as u16,
                    Cell {
                        ch: ' ',
                        fg: Rgba::TERMINAL_DEFAULT,
                        bg,
                        attrs: Attr::NONE,
                    },
                );
            }
        }
    }

    /// Draw a text run starting at (x, y), clipped to the buffer.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Rgba, bg: Rgba, attrs: Attr) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let cx = x + i as i32;
            if cx < 0 {
                continue;
            }
            if cx >= self.width as i32 {
                break;
            }
            self.set(cx as u16, y as u16, Cell { ch, fg, bg, attrs });
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
    fn test_new_buffer_is_default_cells() {
        let buffer = FrameBuffer::new(4, 3);
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.get(0, 0), Some(&Cell::default()));
        assert_eq!(buffer.get(3, 2), Some(&Cell::default()));
        assert_eq!(buffer.get(4, 0), None);
        assert_eq!(buffer.get(0, 3), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut buffer = FrameBuffer::new(4, 3);
        let cell = Cell {
            ch: 'X',
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
            attrs: Attr::BOLD,
        };

        buffer.set(2, 1, cell);
        assert_eq!(buffer.get(2, 1), Some(&cell));

        // Out of bounds is dropped, not a panic
        buffer.set(10, 10, cell);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buffer = FrameBuffer::new(4, 4);
        let bg = Rgba::rgb(1, 2, 3);

        // Partially offscreen on all sides
        buffer.fill_rect(-2, -2, 4, 4, bg);
        assert_eq!(buffer.get(0, 0).map(|c| c.bg), Some(bg));
        assert_eq!(buffer.get(1, 1).map(|c| c.bg), Some(bg));
        assert_eq!(buffer.get(2, 2).map(|c| c.bg), Some(Rgba::TERMINAL_DEFAULT));

        buffer.fill_rect(3, 3, 5, 5, bg);
        assert_eq!(buffer.get(3, 3).map(|c| c.bg), Some(bg));
    }

    #[test]
    fn test_draw_text_clips() {
        let mut buffer = FrameBuffer::new(5, 2);

        buffer.draw_text(-1, 0, "abc", Rgba::BLACK, Rgba::WHITE, Attr::NONE);
        assert_eq!(buffer.get(0, 0).map(|c| c.ch), Some('b'));
        assert_eq!(buffer.get(1, 0).map(|c| c.ch), Some('c'));

        buffer.draw_text(3, 1, "wxyz", Rgba::BLACK, Rgba::WHITE, Attr::NONE);
        assert_eq!(buffer.get(3, 1).map(|c| c.ch), Some('w'));
        assert_eq!(buffer.get(4, 1).map(|c| c.ch), Some('x'));

        // Entirely off the bottom
        buffer.draw_text(0, 5, "nope", Rgba::BLACK, Rgba::WHITE, Attr::NONE);
        assert_eq!(buffer.get(0, 0).map(|c| c.ch), Some('b'));
    }
}
